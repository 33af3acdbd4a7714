//! Bounded pool of falling items
//!
//! Per update: advance every item, collide the survivors with the player,
//! drop anything vanished, then refill to capacity.

use rand::Rng;

use super::collision::overlaps;
use super::state::{GameEvent, Item, ItemKind, Player};
use crate::tuning::Tuning;

/// Active items in spawn order
#[derive(Debug, Clone)]
pub struct ItemPool {
    items: Vec<Item>,
    capacity: usize,
    /// Next item ID
    next_id: u32,
}

impl ItemPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in stable spawn order, for drawing
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Insert a specific item (scripted scenarios)
    ///
    /// A full pool evicts its oldest item to make room and returns it, so the
    /// pool never holds more than `capacity` items.
    pub fn push(&mut self, item: Item) -> Option<Item> {
        if self.capacity == 0 {
            return Some(item);
        }
        self.next_id = self.next_id.max(item.id + 1);
        let evicted = if self.items.len() >= self.capacity {
            Some(self.items.remove(0))
        } else {
            None
        };
        self.items.push(item);
        evicted
    }

    /// Allocate a new item ID
    pub fn next_item_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Run one tick of the pool against `player`
    ///
    /// Returns the hit events in pool order. `elapsed_ticks` feeds the
    /// difficulty scaling of items spawned during the refill.
    pub fn update<R: Rng>(
        &mut self,
        player: &Player,
        rng: &mut R,
        tuning: &Tuning,
        elapsed_ticks: u64,
    ) -> Vec<GameEvent> {
        for item in &mut self.items {
            item.update(tuning);
        }

        let mut hits = Vec::new();
        for item in self.items.iter_mut().filter(|i| i.is_active()) {
            if overlaps(&item.shape, item.pos, &player.shape, player.pos) {
                log::debug!("Item {} ({:?}) hit the player at {}", item.id, item.kind, item.pos);
                hits.push(item.hit(tuning));
            }
        }

        self.items.retain(|i| i.is_active());
        self.refill(rng, tuning, elapsed_ticks);

        hits
    }

    /// Spawn until the pool is back at capacity
    pub fn refill<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning, elapsed_ticks: u64) {
        while self.items.len() < self.capacity {
            let kind = ItemKind::roll(rng, tuning.bomb_chance_percent);
            let id = self.next_item_id();
            let item = Item::spawn(id, kind, rng, tuning, elapsed_ticks);
            log::debug!(
                "Spawned item {} ({:?}) at x={:.0} speed={}",
                id,
                kind,
                item.pos.x,
                item.speed
            );
            self.items.push(item);
        }
    }
}
