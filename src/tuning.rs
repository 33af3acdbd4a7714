//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives in [`Tuning`]. Defaults
//! come from [`crate::consts`]; a settings file may override any field.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Hitbox convention shared by the player and every item.
///
/// The two kinds are never compared against each other, so one style is
/// chosen for the whole configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitboxStyle {
    /// Axis-aligned sub-rectangles of each sprite
    #[default]
    Box,
    /// Inscribed circles
    Circle,
}

impl HitboxStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitboxStyle::Box => "box",
            HitboxStyle::Circle => "circle",
        }
    }
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub width: f32,
    pub height: f32,
    pub ground_y: f32,

    // === Player ===
    pub player_size: f32,
    pub player_step: f32,
    pub player_start_x: f32,

    // === Items ===
    pub item_size: f32,
    pub spawn_y: f32,
    pub pool_size: usize,
    pub bomb_chance_percent: u32,
    pub base_speed: f32,
    pub speed_jitter: u32,
    pub scaling_window: u64,
    pub apple_score: u64,

    // === Collision ===
    pub hitbox: HitboxStyle,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            ground_y: GROUND_Y,

            player_size: PLAYER_SIZE,
            player_step: PLAYER_STEP,
            player_start_x: PLAYER_START_X,

            item_size: ITEM_SIZE,
            spawn_y: ITEM_SPAWN_Y,
            pool_size: ITEM_POOL_SIZE,
            bomb_chance_percent: BOMB_CHANCE_PERCENT,
            base_speed: ITEM_BASE_SPEED,
            speed_jitter: ITEM_SPEED_JITTER,
            scaling_window: SPEED_SCALING_WINDOW,
            apple_score: APPLE_SCORE,

            hitbox: HitboxStyle::Box,
        }
    }
}

impl Tuning {
    /// Horizontal clamp range for the player's left edge.
    ///
    /// Centre-based: the sprite may hang half off either side, so the range
    /// is `[-size / 2, width - size / 2]`.
    pub fn player_x_bounds(&self) -> (f32, f32) {
        let half = self.player_size / 2.0;
        (-half, self.width - half)
    }

    /// Largest spawn x that keeps an item fully inside the playfield.
    pub fn max_spawn_x(&self) -> f32 {
        self.width - self.item_size
    }

    /// Difficulty bonus added to the fall speed of items spawned at `elapsed_ticks`.
    pub fn speed_bonus(&self, elapsed_ticks: u64) -> f32 {
        (elapsed_ticks / self.scaling_window.max(1)) as f32
    }

    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidPlayfield {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.item_size > 0.0 && self.max_spawn_x() >= 0.0) {
            return Err(ConfigError::SpawnRange {
                item_size: self.item_size,
                width: self.width,
            });
        }
        if self.spawn_y + self.item_size > 0.0 {
            return Err(ConfigError::SpawnVisible {
                spawn_y: self.spawn_y,
                item_size: self.item_size,
            });
        }
        if self.bomb_chance_percent > 100 {
            return Err(ConfigError::BombChance(self.bomb_chance_percent));
        }
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.scaling_window == 0 {
            return Err(ConfigError::ScalingWindow);
        }
        if !(self.player_size > 0.0
            && self.ground_y >= self.player_size
            && self.ground_y <= self.height)
        {
            return Err(ConfigError::Ground {
                ground_y: self.ground_y,
                player_size: self.player_size,
                height: self.height,
            });
        }
        let (min, max) = self.player_x_bounds();
        if !(min..=max).contains(&self.player_start_x) {
            return Err(ConfigError::PlayerStart {
                x: self.player_start_x,
                min,
                max,
            });
        }
        Ok(())
    }
}
