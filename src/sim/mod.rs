//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame, velocities in pixels per frame
//! - Stable brick iteration order (column-major grid)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Ball, Brick, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
