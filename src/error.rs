//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating game configuration.
///
/// All of these are fatal at construction time; a running session never
/// produces one.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read.
    #[error("Failed to read settings '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Settings file could not be written.
    #[error("Failed to write settings '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// JSON parsing or encoding failed.
    #[error("Invalid settings JSON in '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// Playfield has no area.
    #[error("Playfield must be non-empty, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },

    /// Items are wider than the playfield, so no spawn x exists.
    #[error("Item size {item_size} does not fit playfield width {width}")]
    SpawnRange { item_size: f32, width: f32 },

    /// Items would spawn (partly) inside the visible playfield.
    #[error("Items must spawn above the top edge: spawn y {spawn_y} + size {item_size} > 0")]
    SpawnVisible { spawn_y: f32, item_size: f32 },

    /// Weighted draw outside 0..=100.
    #[error("Bomb chance must be within 0..=100, got {0}")]
    BombChance(u32),

    /// Pool with no slots would never spawn anything.
    #[error("Item pool needs at least one slot")]
    EmptyPool,

    /// Difficulty scaling divides by this window.
    #[error("Speed scaling window must be at least one tick")]
    ScalingWindow,

    /// Ground line leaves no room for the player.
    #[error("Ground line {ground_y} does not fit a {player_size}px player in a {height}px playfield")]
    Ground {
        ground_y: f32,
        player_size: f32,
        height: f32,
    },

    /// Player would start outside its clamp range.
    #[error("Player start x {x} outside [{min}, {max}]")]
    PlayerStart { x: f32, min: f32, max: f32 },

    /// Volume outside 0.0..=1.0.
    #[error("Volume '{name}' must be within 0.0..=1.0, got {value}")]
    Volume { name: &'static str, value: f32 },
}
