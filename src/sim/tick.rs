//! Per-frame simulation tick
//!
//! Advances the game by one animation frame. Velocities are in pixels per
//! frame, so the tick takes no timestep parameter.

use crate::consts::PADDLE_WIDTH;
use crate::sim::state::{GamePhase, GameState};

/// Input for a single tick, fed by the pointer/touch handlers
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer x coordinate relative to the canvas left edge.
    /// Last writer before the frame wins; the value persists between frames.
    pub pointer_x: Option<f32>,
}

/// Advance the game state by one frame. No-op unless Running.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Pointer port: applied only strictly inside the canvas; the resulting
    // paddle extent is not clamped.
    if let Some(px) = input.pointer_x {
        if px > 0.0 && px < state.width {
            state.paddle.x = px - PADDLE_WIDTH / 2.0;
        }
    }

    // Full grid scan every frame, no early exit; every brick containing the
    // ball center bounces the ball and is flagged destroyed.
    for brick in &mut state.bricks {
        if brick.alive && brick.contains(state.ball.pos) {
            state.ball.vel.y = -state.ball.vel.y;
            brick.alive = false;
            state.score += 1;
        }
    }

    if state.alive_bricks() == 0 {
        state.phase = GamePhase::Won;
        return;
    }

    // Projected position after this frame, including any bounce the brick
    // scan just applied to the velocity.
    let next = state.ball.pos + state.ball.vel;

    if next.x > state.width - state.ball.radius || next.x < state.ball.radius {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if next.y < state.ball.radius {
        state.ball.vel.y = -state.ball.vel.y;
    } else if next.y > state.height - state.ball.radius {
        // Single authoritative floor check per frame, against the
        // pre-update ball position: paddle overlap bounces, a miss ends
        // the session.
        if state.paddle.overlaps_x(state.ball.pos.x) {
            state.ball.vel.y = -state.ball.vel.y;
        } else {
            state.phase = GamePhase::Lost;
            return;
        }
    }

    state.ball.pos += state.ball.vel;
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::layout::Layout;

    /// 800x600 canvas, 4x7 grid
    fn wide_state() -> GameState {
        GameState::new(&Layout::compute(800.0, 750.0, 800.0))
    }

    /// 380x600 canvas, 3x3 grid
    fn narrow_state() -> GameState {
        GameState::new(&Layout::compute(380.0, 750.0, 380.0))
    }

    #[test]
    fn test_pointer_moves_paddle() {
        let mut state = wide_state();
        let input = TickInput { pointer_x: Some(500.0) };
        tick(&mut state, &input);
        assert_eq!(state.paddle.x, 500.0 - PADDLE_WIDTH / 2.0);
    }

    #[test]
    fn test_pointer_bounds_are_exclusive() {
        for px in [0.0, 800.0, -5.0, 900.0] {
            let mut state = wide_state();
            let before = state.paddle.x;
            let input = TickInput { pointer_x: Some(px) };
            tick(&mut state, &input);
            assert_eq!(state.paddle.x, before, "pointer at {px} must be ignored");
        }
    }

    #[test]
    fn test_paddle_extent_is_not_clamped() {
        let mut state = wide_state();
        // In-range coordinate whose centered paddle hangs off the left edge
        let input = TickInput { pointer_x: Some(10.0) };
        tick(&mut state, &input);
        assert_eq!(state.paddle.x, 10.0 - PADDLE_WIDTH / 2.0);
    }

    #[test]
    fn test_brick_hit_bounces_and_scores() {
        let mut state = wide_state();
        // Center of the first brick (column 0, row 0)
        state.ball.pos = Vec2::new(70.0, 60.0);
        state.ball.vel = Vec2::new(3.0, -3.0);

        tick(&mut state, &TickInput::default());

        assert!(!state.bricks[0].alive);
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel, Vec2::new(3.0, 3.0));
        // Position advanced with the reflected velocity
        assert_eq!(state.ball.pos, Vec2::new(73.0, 63.0));
    }

    #[test]
    fn test_last_brick_wins_same_tick() {
        let mut state = narrow_state();
        let last = state.bricks.len() - 1;
        for brick in &mut state.bricks[..last] {
            brick.alive = false;
        }
        state.score = last as u32;
        // Center of the last brick (column 2, row 2)
        let pos = Vec2::new(state.bricks[last].x + 10.0, state.bricks[last].y + 10.0);
        state.ball.pos = pos;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.score as usize, state.bricks.len());
        // Won on the same step, no position update
        assert_eq!(state.ball.pos, pos);
    }

    #[test]
    fn test_paddle_bounce() {
        let mut state = wide_state();
        state.ball.pos = Vec2::new(400.0, 595.0);
        state.ball.vel = Vec2::new(3.0, 3.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.ball.vel, Vec2::new(3.0, -3.0));
        assert_eq!(state.ball.pos, Vec2::new(403.0, 592.0));
    }

    #[test]
    fn test_ball_past_paddle_loses() {
        let mut state = wide_state();
        // Far from the centered paddle
        state.ball.pos = Vec2::new(50.0, 595.0);
        state.ball.vel = Vec2::new(3.0, 3.0);
        let pos = state.ball.pos;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Lost);
        // Lost on the same step, no position update
        assert_eq!(state.ball.pos, pos);
    }

    #[test]
    fn test_side_wall_reflection() {
        let mut state = wide_state();
        state.ball.pos = Vec2::new(14.0, 300.0);
        state.ball.vel = Vec2::new(-3.0, -3.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, 3.0);
        assert_eq!(state.ball.pos, Vec2::new(17.0, 297.0));

        let mut state = wide_state();
        state.ball.pos = Vec2::new(787.0, 300.0);
        state.ball.vel = Vec2::new(3.0, -3.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, -3.0);
    }

    #[test]
    fn test_side_walls_no_reflection_at_boundary() {
        // Next x lands exactly on width - radius: still in bounds, no flip
        let mut state = wide_state();
        state.ball.pos = Vec2::new(785.0, 300.0);
        state.ball.vel = Vec2::new(3.0, -3.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, 3.0);
        assert_eq!(state.ball.pos, Vec2::new(788.0, 297.0));

        // Next x lands exactly on radius
        let mut state = wide_state();
        state.ball.pos = Vec2::new(15.0, 300.0);
        state.ball.vel = Vec2::new(-3.0, -3.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, -3.0);
        assert_eq!(state.ball.pos, Vec2::new(12.0, 297.0));
    }

    #[test]
    fn test_ceiling_reflection() {
        let mut state = wide_state();
        state.ball.pos = Vec2::new(400.0, 14.0);
        state.ball.vel = Vec2::new(3.0, -3.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.y, 3.0);
        assert_eq!(state.ball.pos, Vec2::new(403.0, 17.0));

        // Next y lands exactly on the radius: still in bounds, no flip
        let mut state = wide_state();
        state.ball.pos = Vec2::new(400.0, 15.0);
        state.ball.vel = Vec2::new(3.0, -3.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.y, -3.0);
        assert_eq!(state.ball.pos, Vec2::new(403.0, 12.0));
    }

    #[test]
    fn test_terminal_phase_is_inert() {
        for phase in [GamePhase::Won, GamePhase::Lost] {
            let mut state = wide_state();
            state.phase = phase;
            let ball_pos = state.ball.pos;
            let paddle_x = state.paddle.x;

            let input = TickInput { pointer_x: Some(500.0) };
            tick(&mut state, &input);

            assert_eq!(state.phase, phase);
            assert_eq!(state.ball.pos, ball_pos);
            assert_eq!(state.paddle.x, paddle_x);
        }
    }

    proptest! {
        /// Score stays monotone and always equals the destroyed brick count,
        /// whatever the pointer does.
        #[test]
        fn prop_score_matches_destroyed_bricks(
            pointers in proptest::collection::vec(
                proptest::option::of(-100.0f32..900.0),
                1..400,
            )
        ) {
            let mut state = wide_state();
            let mut prev_score = 0;
            for pointer_x in pointers {
                tick(&mut state, &TickInput { pointer_x });
                prop_assert!(state.score >= prev_score);
                prop_assert_eq!(state.score as usize, state.destroyed_bricks());
                prev_score = state.score;
                if state.phase != GamePhase::Running {
                    break;
                }
            }
        }
    }
}
