//! Canvas Breakout - a classic brick-breaker game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball movement, collisions, game state)
//! - `layout`: Viewport-driven canvas and brick grid sizing
//! - `renderer`: Canvas 2D rendering (wasm only)

pub mod layout;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Ball radius in pixels
    pub const BALL_RADIUS: f32 = 12.0;
    /// Ball start velocity, pixels per frame
    pub const BALL_START_VEL_X: f32 = 3.0;
    pub const BALL_START_VEL_Y: f32 = -3.0;
    /// Ball starts this far above the canvas bottom
    pub const BALL_START_OFFSET_Y: f32 = 30.0;

    /// Paddle dimensions, anchored to the canvas bottom
    pub const PADDLE_WIDTH: f32 = 125.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;

    /// Brick grid geometry
    pub const BRICK_WIDTH: f32 = 85.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_PADDING: f32 = 15.0;
    pub const BRICK_OFFSET_TOP: f32 = 50.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Canvas height as a fraction of the viewport height
    pub const CANVAS_HEIGHT_RATIO: f32 = 0.8;
}
