//! Apple Catcher - a falling-object arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scene machine)
//! - `session`: Per-frame orchestration against the host collaborators
//! - `renderer`: Drawing interface and the terminal renderer
//! - `input`: Input sampling and edge triggering
//! - `audio`: Sound cue interface
//! - `platform`: Native keyboard handling
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use session::GameSession;
pub use settings::Settings;
pub use tuning::{HitboxStyle, Tuning};

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate; every tick-based constant assumes it
    pub const SIM_HZ: u32 = 60;

    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 640.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;
    /// Top of the grass strip; the player stands on it
    pub const GROUND_Y: f32 = 400.0;

    /// Player sprite is square
    pub const PLAYER_SIZE: f32 = 32.0;
    /// Horizontal movement per tick at full axis deflection
    pub const PLAYER_STEP: f32 = 8.0;
    pub const PLAYER_START_X: f32 = 240.0;
    /// Walk cycle: 4 frames over 40 ticks
    pub const PLAYER_ANIM_PERIOD: u32 = 40;
    pub const PLAYER_ANIM_FRAMES: u32 = 4;

    /// Item sprites are square; hitboxes are tuned for this size
    pub const ITEM_SIZE: f32 = 80.0;
    /// Spawn height, fully above the visible top edge
    pub const ITEM_SPAWN_Y: f32 = -100.0;
    /// Number of items kept falling at once
    pub const ITEM_POOL_SIZE: usize = 5;
    /// Weighted variant draw: 80% Bomb / 20% Apple
    pub const BOMB_CHANCE_PERCENT: u32 = 80;

    /// Fall speed = base + jitter(0..=SPEED_JITTER) + elapsed / SCALING_WINDOW
    pub const ITEM_BASE_SPEED: f32 = 4.0;
    pub const ITEM_SPEED_JITTER: u32 = 8;
    /// Ticks per +1 px/tick of fall speed (5 seconds at 60 Hz)
    pub const SPEED_SCALING_WINDOW: u64 = 300;

    /// Points per caught apple
    pub const APPLE_SCORE: u64 = 10;
}
