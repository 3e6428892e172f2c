//! Viewport-driven layout
//!
//! Computes canvas dimensions and brick grid dimensions from the current
//! viewport size. Runs at startup and on every window resize; the shell
//! applies the result by resizing the canvas element and building a fresh
//! `GameState`.

use crate::consts::CANVAS_HEIGHT_RATIO;

/// Narrow-screen tiers for the brick grid (viewport width, pixels)
const NARROW_VIEWPORT_MAX: f32 = 400.0;
const SMALL_VIEWPORT_MAX: f32 = 450.0;

/// Canvas and brick grid dimensions for one session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub rows: usize,
    pub cols: usize,
}

impl Layout {
    /// Compute the layout for the given viewport.
    ///
    /// The brick grid tier follows the viewport width; the canvas fills the
    /// containing element's content width and 80% of the viewport height.
    pub fn compute(viewport_width: f32, viewport_height: f32, container_width: f32) -> Self {
        let (rows, cols) = grid_for_viewport(viewport_width);
        Self {
            canvas_width: container_width,
            canvas_height: viewport_height * CANVAS_HEIGHT_RATIO,
            rows,
            cols,
        }
    }
}

fn grid_for_viewport(viewport_width: f32) -> (usize, usize) {
    if viewport_width <= NARROW_VIEWPORT_MAX {
        (3, 3)
    } else if viewport_width <= SMALL_VIEWPORT_MAX {
        (3, 4)
    } else {
        (4, 7)
    }
}
