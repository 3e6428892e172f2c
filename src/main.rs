//! Canvas Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use canvas_breakout::layout::Layout;
    use canvas_breakout::renderer::CanvasRenderer;
    use canvas_breakout::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        renderer: CanvasRenderer,
        /// True while an animation frame is scheduled; prevents resize or
        /// restart from starting a second loop.
        loop_active: bool,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Breakout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let overlay = document
            .get_element_by_id("game-over")
            .expect("no game-over element");
        let restart = document
            .get_element_by_id("restart-btn")
            .expect("no restart button");

        let layout = apply_layout(&canvas);
        log::info!(
            "Layout: {}x{} canvas, {}x{} bricks",
            layout.canvas_width,
            layout.canvas_height,
            layout.rows,
            layout.cols
        );

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(&layout),
            input: TickInput::default(),
            renderer: CanvasRenderer::new(&canvas, overlay, restart),
            loop_active: false,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());
        setup_restart_button(game.clone());

        start_loop(game);

        log::info!("Canvas Breakout running!");
    }

    /// Size the canvas element from the viewport and return the layout
    fn apply_layout(canvas: &HtmlCanvasElement) -> Layout {
        let window = web_sys::window().expect("no window");
        let viewport_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let container_w = canvas
            .parent_element()
            .map(|el| el.client_width() as f32)
            .unwrap_or(viewport_w);

        let layout = Layout::compute(viewport_w, viewport_h, container_w);
        canvas.set_width(layout.canvas_width as u32);
        canvas.set_height(layout.canvas_height as u32);
        layout
    }

    /// Schedule the loop if it is not already running
    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_active {
                return;
            }
            g.loop_active = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, _time: f64) {
        {
            let mut g = game.borrow_mut();
            let input = g.input;
            tick(&mut g.state, &input);
            g.renderer.render(&g.state);

            // Terminal phases stop rescheduling; restart or resize re-enters
            // the loop with a fresh initial call.
            if g.state.phase != GamePhase::Running {
                g.loop_active = false;
                match g.state.phase {
                    GamePhase::Won => log::info!("Game won with score {}", g.state.score),
                    GamePhase::Lost => log::info!("Game lost with score {}", g.state.score),
                    GamePhase::Running => {}
                }
                return;
            }
        }

        request_animation_frame(game);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let relative_x = event.client_x() as f32 - canvas_clone.offset_left() as f32;
                game.borrow_mut().input.pointer_x = Some(relative_x);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let relative_x = event.client_x() as f32 - canvas_clone.offset_left() as f32;
                game.borrow_mut().input.pointer_x = Some(relative_x);
            });
            let _ = document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - suppress default scrolling
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let relative_x = touch.client_x() as f32 - canvas_clone.offset_left() as f32;
                    game.borrow_mut().input.pointer_x = Some(relative_x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let relative_x = touch.client_x() as f32 - canvas_clone.offset_left() as f32;
                    game.borrow_mut().input.pointer_x = Some(relative_x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let layout = apply_layout(&canvas_clone);
            {
                let mut g = game.borrow_mut();
                g.state = GameState::new(&layout);
                g.input = TickInput::default();
            }
            log::info!(
                "Resized: {}x{} canvas, {}x{} bricks",
                layout.canvas_width,
                layout.canvas_height,
                layout.rows,
                layout.cols
            );
            start_loop(game.clone());
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                {
                    let mut g = game.borrow_mut();
                    g.state.reset();
                    g.input = TickInput::default();
                }
                log::info!("Game restarted");
                start_loop(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Breakout (native) starting...");
    log::info!("Rendering needs a browser canvas - run with `trunk serve` for the web version");

    // Headless smoke run of the simulation
    run_headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless_session() {
    use canvas_breakout::layout::Layout;
    use canvas_breakout::sim::{GamePhase, GameState, TickInput, tick};

    let layout = Layout::compute(800.0, 750.0, 800.0);
    let mut state = GameState::new(&layout);
    let input = TickInput::default();

    let mut frames = 0u32;
    while state.phase == GamePhase::Running && frames < 100_000 {
        tick(&mut state, &input);
        assert_eq!(state.score as usize, state.destroyed_bricks());
        frames += 1;
    }

    println!(
        "Headless session: {:?} after {} frames, score {}",
        state.phase, frames, state.score
    );
}
