//! Platform abstraction layer
//!
//! Host-facing pieces that don't touch the simulation directly:
//! - Keyboard state and key-release bindings

pub mod input;

pub use input::{KeyCode, Keyboard, key};
