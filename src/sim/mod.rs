//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, elapsed time counted in ticks
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, input or audio dependencies

pub mod collision;
pub mod pool;
pub mod state;
pub mod tick;

pub use collision::{Shape, ShapeKind, overlaps};
pub use pool::ItemPool;
pub use state::{GameEvent, GameState, Item, ItemKind, ItemState, Player, Scene};
pub use tick::{TickInput, tick};
