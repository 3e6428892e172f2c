//! Canvas 2D rendering
//!
//! Clears and redraws every visible entity each frame, and toggles the
//! game-over overlay for terminal phases.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

const ENTITY_FILL: &str = "#0095DD";
const GAME_OVER_FILL: &str = "#FF0000";

/// Canvas width below which the win message uses the smaller font
const SMALL_MESSAGE_CANVAS_WIDTH: f32 = 500.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    overlay: Element,
    restart: Element,
}

impl CanvasRenderer {
    /// Wrap the canvas 2D context and the overlay elements.
    /// Panics if the canvas cannot provide a 2D context (one-time init).
    pub fn new(canvas: &HtmlCanvasElement, overlay: Element, restart: Element) -> Self {
        let ctx = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("canvas has no 2d context")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("not a 2d context");
        Self { ctx, overlay, restart }
    }

    /// Redraw the frame for the current phase
    pub fn render(&self, state: &GameState) {
        self.ctx
            .clear_rect(0.0, 0.0, state.width as f64, state.height as f64);
        match state.phase {
            GamePhase::Running => {
                self.draw_bricks(state);
                self.draw_ball(state);
                self.draw_paddle(state);
                self.draw_score(state);
                self.set_overlay_visible(false);
            }
            GamePhase::Won => {
                let font_px = if state.width < SMALL_MESSAGE_CANVAS_WIDTH {
                    27
                } else {
                    36
                };
                self.draw_message(state, "Congratulations You Win!", font_px, ENTITY_FILL);
                self.set_overlay_visible(true);
            }
            GamePhase::Lost => {
                self.draw_message(state, "Game Over", 36, GAME_OVER_FILL);
                self.set_overlay_visible(true);
            }
        }
    }

    fn draw_bricks(&self, state: &GameState) {
        self.ctx.set_fill_style_str(ENTITY_FILL);
        for brick in state.bricks.iter().filter(|b| b.alive) {
            self.ctx.fill_rect(
                brick.x as f64,
                brick.y as f64,
                BRICK_WIDTH as f64,
                BRICK_HEIGHT as f64,
            );
        }
    }

    fn draw_ball(&self, state: &GameState) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            state.ball.radius as f64,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        self.ctx.set_fill_style_str(ENTITY_FILL);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn draw_paddle(&self, state: &GameState) {
        self.ctx.set_fill_style_str(ENTITY_FILL);
        self.ctx.fill_rect(
            state.paddle.x as f64,
            (state.height - PADDLE_HEIGHT) as f64,
            PADDLE_WIDTH as f64,
            PADDLE_HEIGHT as f64,
        );
    }

    fn draw_score(&self, state: &GameState) {
        self.ctx.set_font("20px Arial");
        self.ctx.set_fill_style_str(ENTITY_FILL);
        self.ctx.set_text_align("start");
        let _ = self
            .ctx
            .fill_text(&format!("Score: {}", state.score), 8.0, 20.0);
    }

    fn draw_message(&self, state: &GameState, text: &str, font_px: u32, fill: &str) {
        self.ctx.set_font(&format!("{font_px}px Arial"));
        self.ctx.set_fill_style_str(fill);
        self.ctx.set_text_align("center");
        let _ = self
            .ctx
            .fill_text(text, state.width as f64 / 2.0, state.height as f64 / 2.0);
    }

    fn set_overlay_visible(&self, visible: bool) {
        let class = if visible { "" } else { "hidden" };
        let _ = self.overlay.set_attribute("class", class);
        let _ = self.restart.set_attribute("class", class);
    }
}
