//! Game state and core simulation types
//!
//! Everything a session mutates during a tick lives in [`GameState`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Shape;
use super::pool::ItemPool;
use crate::consts::{ITEM_SIZE, PLAYER_ANIM_FRAMES, PLAYER_ANIM_PERIOD};
use crate::error::ConfigError;
use crate::tuning::{HitboxStyle, Tuning};

/// Active scene of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    /// Start prompt, nothing moves
    #[default]
    Title,
    /// Active gameplay
    Playing,
    /// Run ended, final frame frozen under the restart prompt
    GameOver,
}

impl Scene {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scene::Title => "title",
            Scene::Playing => "playing",
            Scene::GameOver => "game_over",
        }
    }
}

/// Things that happened during a tick, drained by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An apple touched the player
    AppleCaught { points: u64 },
    /// A bomb touched the player
    BombHit,
    /// Scene machine moved
    SceneChanged { from: Scene, to: Scene },
}

/// The player-controlled catcher
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Sprite top-left corner; y never changes
    pub pos: Vec2,
    pub size: f32,
    pub shape: Shape,
    /// Cosmetic walk-cycle counter
    anim_ticks: u32,
}

impl Player {
    /// Fresh player at the canonical start position
    pub fn new(tuning: &Tuning) -> Self {
        let size = tuning.player_size;
        let shape = match tuning.hitbox {
            HitboxStyle::Box => Shape::rect(0.0, 0.0, size, size),
            HitboxStyle::Circle => Shape::circle(size / 2.0, size / 2.0, size / 2.0),
        };
        Self {
            pos: Vec2::new(tuning.player_start_x, tuning.ground_y - size),
            size,
            shape,
            anim_ticks: 0,
        }
    }

    /// Move by `axis` steps (sign only) and clamp to the playfield
    pub fn update(&mut self, axis: i8, tuning: &Tuning) {
        self.anim_ticks = (self.anim_ticks + 1) % PLAYER_ANIM_PERIOD;

        let (min_x, max_x) = tuning.player_x_bounds();
        self.pos.x += f32::from(axis.signum()) * tuning.player_step;
        self.pos.x = self.pos.x.clamp(min_x, max_x);
    }

    /// Walk-cycle frame in `0..PLAYER_ANIM_FRAMES`
    pub fn anim_frame(&self) -> usize {
        (self.anim_ticks / (PLAYER_ANIM_PERIOD / PLAYER_ANIM_FRAMES)) as usize
    }
}

/// Falling item variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Apple,
    Bomb,
}

impl ItemKind {
    /// Hand-tuned hitbox inside the item sprite
    pub fn shape(&self, style: HitboxStyle, item_size: f32) -> Shape {
        let shape = match (self, style) {
            (ItemKind::Apple, HitboxStyle::Box) => Shape::rect(0.0, 15.0, 75.0, 80.0),
            (ItemKind::Bomb, HitboxStyle::Box) => Shape::rect(15.0, 31.0, 61.0, 76.0),
            (ItemKind::Apple, HitboxStyle::Circle) => Shape::circle(38.0, 48.0, 32.0),
            (ItemKind::Bomb, HitboxStyle::Circle) => Shape::circle(38.0, 53.0, 23.0),
        };
        shape.scaled(item_size / ITEM_SIZE)
    }

    /// Weighted variant draw
    pub fn roll<R: Rng>(rng: &mut R, bomb_chance_percent: u32) -> Self {
        if rng.random_range(0..100) < bomb_chance_percent {
            ItemKind::Bomb
        } else {
            ItemKind::Apple
        }
    }
}

/// Item lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Active,
    /// Terminal; removed from the pool at the end of the update
    Vanished,
}

/// A falling item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    /// Sprite top-left corner
    pub pos: Vec2,
    /// Pixels per tick, downward
    pub speed: f32,
    pub shape: Shape,
    pub state: ItemState,
}

impl Item {
    pub fn new(id: u32, kind: ItemKind, pos: Vec2, speed: f32, tuning: &Tuning) -> Self {
        Self {
            id,
            kind,
            pos,
            speed,
            shape: kind.shape(tuning.hitbox, tuning.item_size),
            state: ItemState::Active,
        }
    }

    /// Spawn above the playfield with a difficulty-scaled random speed
    pub fn spawn<R: Rng>(
        id: u32,
        kind: ItemKind,
        rng: &mut R,
        tuning: &Tuning,
        elapsed_ticks: u64,
    ) -> Self {
        let x = rng.random_range(0.0..=tuning.max_spawn_x());
        let jitter = rng.random_range(0..=tuning.speed_jitter) as f32;
        let speed = tuning.base_speed + jitter + tuning.speed_bonus(elapsed_ticks);
        Self::new(id, kind, Vec2::new(x, tuning.spawn_y), speed, tuning)
    }

    pub fn is_active(&self) -> bool {
        self.state == ItemState::Active
    }

    /// Fall one tick; past the bottom edge the item is missed
    pub fn update(&mut self, tuning: &Tuning) {
        self.pos.y += self.speed;
        if self.pos.y > tuning.height {
            self.state = ItemState::Vanished;
        }
    }

    /// Resolve contact with the player
    pub fn hit(&mut self, tuning: &Tuning) -> GameEvent {
        self.state = ItemState::Vanished;
        match self.kind {
            ItemKind::Apple => GameEvent::AppleCaught {
                points: tuning.apple_score,
            },
            ItemKind::Bomb => GameEvent::BombHit,
        }
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub scene: Scene,
    pub score: u64,
    /// Ticks spent in Playing since the last (re)start
    pub time_ticks: u64,
    pub game_over: bool,
    pub player: Player,
    pub items: ItemPool,
    /// Pending events, drained once per frame
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// New session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), seed)
    }

    /// New session with custom tuning, rejected if it cannot run
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self::build(tuning, seed))
    }

    fn build(tuning: Tuning, seed: u64) -> Self {
        log::info!(
            "New session: seed={}, pool={}, bomb chance={}%, hitbox={}",
            seed,
            tuning.pool_size,
            tuning.bomb_chance_percent,
            tuning.hitbox.as_str()
        );
        Self {
            seed,
            player: Player::new(&tuning),
            items: ItemPool::new(tuning.pool_size),
            tuning,
            scene: Scene::Title,
            score: 0,
            time_ticks: 0,
            game_over: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Move to `to`, recording the transition
    pub(crate) fn set_scene(&mut self, to: Scene) {
        let from = self.scene;
        if from == to {
            return;
        }
        log::info!("Scene {} -> {} (score {})", from.as_str(), to.as_str(), self.score);
        self.scene = to;
        self.events.push(GameEvent::SceneChanged { from, to });
    }

    /// Fresh run: new player, empty pool, score and clock back to zero
    pub(crate) fn reset_run(&mut self) {
        self.player = Player::new(&self.tuning);
        self.items.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.game_over = false;
    }

    /// Take all events recorded since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
