//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One `tick` per display frame, no variable timestep
//! - Every random draw goes through the state's own generator
//! - Bricks are swept in grid order, items newest first
//! - No rendering or platform dependencies

pub mod entity;
pub mod rect;
pub mod stage;
pub mod state;
pub mod tick;

pub use entity::{Ball, Brick, Item, ItemKind, Pad, PadSize, Particle};
pub use rect::{PointExt, Rect};
pub use stage::Stage;
pub use state::{Action, GamePhase, GameState, Rules, brick_wall, burst};
pub use tick::{TickInput, tick};
