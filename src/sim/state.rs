//! Game state and core simulation types

use glam::Vec2;

use crate::consts::*;
use crate::layout::Layout;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// All bricks cleared
    Won,
    /// Ball passed the paddle
    Lost,
}

/// The ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at its serve position for the given canvas size
    pub fn at_start(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            pos: Vec2::new(canvas_width / 2.0, canvas_height - BALL_START_OFFSET_Y),
            vel: Vec2::new(BALL_START_VEL_X, BALL_START_VEL_Y),
            radius: BALL_RADIUS,
        }
    }
}

/// The player's paddle, anchored to the canvas bottom
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Left edge x position
    pub x: f32,
}

impl Paddle {
    /// Paddle centered on the canvas
    pub fn centered(canvas_width: f32) -> Self {
        Self {
            x: (canvas_width - PADDLE_WIDTH) / 2.0,
        }
    }

    /// Strict horizontal overlap test against the paddle span
    pub fn overlaps_x(&self, x: f32) -> bool {
        x > self.x && x < self.x + PADDLE_WIDTH
    }
}

/// A destructible brick. Destroyed bricks stay in the grid, flagged dead.
#[derive(Debug, Clone, Copy)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

impl Brick {
    /// Strict AABB containment test for a point (the ball center)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.x + BRICK_WIDTH && p.y > self.y && p.y < self.y + BRICK_HEIGHT
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Canvas dimensions
    pub width: f32,
    pub height: f32,
    /// Brick grid dimensions, fixed until the next layout pass
    pub rows: usize,
    pub cols: usize,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Column-major brick grid (`cols * rows` entries)
    pub bricks: Vec<Brick>,
    pub score: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Build a fresh session for the given layout
    pub fn new(layout: &Layout) -> Self {
        let mut bricks = Vec::with_capacity(layout.cols * layout.rows);
        for col in 0..layout.cols {
            for row in 0..layout.rows {
                bricks.push(Brick {
                    x: col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
                    y: row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
                    alive: true,
                });
            }
        }
        Self {
            width: layout.canvas_width,
            height: layout.canvas_height,
            rows: layout.rows,
            cols: layout.cols,
            ball: Ball::at_start(layout.canvas_width, layout.canvas_height),
            paddle: Paddle::centered(layout.canvas_width),
            bricks,
            score: 0,
            phase: GamePhase::Running,
        }
    }

    /// Reset ball, paddle, bricks and score for a restart.
    /// Grid dimensions are preserved.
    pub fn reset(&mut self) {
        self.ball = Ball::at_start(self.width, self.height);
        self.paddle = Paddle::centered(self.width);
        for brick in &mut self.bricks {
            brick.alive = true;
        }
        self.score = 0;
        self.phase = GamePhase::Running;
    }

    /// Number of bricks not yet destroyed
    pub fn alive_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// Number of destroyed bricks
    pub fn destroyed_bricks(&self) -> usize {
        self.bricks.len() - self.alive_bricks()
    }
}
