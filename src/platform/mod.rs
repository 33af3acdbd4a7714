//! Platform abstraction layer
//!
//! Native terminal handling:
//! - Keyboard events (held-key tracking, start/quit/pause keys)

pub mod keyboard;

pub use keyboard::{KeyboardInput, spawn_event_reader};
