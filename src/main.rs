//! Gapwing entry point
//!
//! Web: hooks browser input and `requestAnimationFrame` to a session and draws
//! through the 2D canvas context. Native: runs the demo pilot headless and
//! logs how the rounds went.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use gapwing::platform::web::WebCanvas;
    use gapwing::platform::{InputGate, InputSource};
    use gapwing::renderer::draw_frame;
    use gapwing::{GameConfig, GameEvent, Session, activate};

    /// Game instance holding all state
    struct Game {
        session: Session,
        gate: InputGate,
        canvas: WebCanvas,
    }

    impl Game {
        /// Press from any source; auto-repeat and held presses are dropped
        fn press(&mut self, source: InputSource) {
            if self.gate.press(source) {
                activate(&mut self.session);
            }
        }

        fn release(&mut self, source: InputSource) {
            self.gate.release(source);
        }

        /// Focus lost: forget held keys and the frame timestamp
        fn blur(&mut self) {
            self.gate.reset_held_state();
            self.session.pause_clock();
        }

        fn frame(&mut self, time: f64) {
            self.session.frame(time);
            for event in self.session.drain_events() {
                match event {
                    GameEvent::Crashed { cause, score } => {
                        log::debug!("Crashed into {:?} at {}", cause, score)
                    }
                    GameEvent::Scored { score } => log::debug!("Score {}", score),
                    _ => {}
                }
            }
            draw_frame(&self.session, &mut self.canvas);
        }
    }

    /// Optional tuning override from `<script id="gapwing-config" type="application/json">`
    fn load_config(document: &web_sys::Document) -> GameConfig {
        let Some(json) = document
            .get_element_by_id("gapwing-config")
            .and_then(|el| el.text_content())
        else {
            return GameConfig::default();
        };
        match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config override");
                config
            }
            Err(e) => {
                log::warn!("Ignoring config override: {}", e);
                GameConfig::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Gapwing starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = load_config(&document);
        let width = config.screen_width as f64;
        let height = config.screen_height as f64;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let session = match Session::new(config, seed) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Bad config ({}), using defaults", e);
                Session::with_seed(seed)
            }
        };
        log::info!("Session initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            gate: InputGate::new(),
            canvas: WebCanvas::new(ctx, width, height),
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_focus_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Gapwing running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), " " | "ArrowUp" | "Enter" | "w" | "W") {
                    event.prevent_default();
                    game.borrow_mut().press(InputSource::Keyboard);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), " " | "ArrowUp" | "Enter" | "w" | "W") {
                    game.borrow_mut().release(InputSource::Keyboard);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse / pen
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                if event.pointer_type() != "touch" {
                    game.borrow_mut().press(InputSource::Pointer);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
                game.borrow_mut().release(InputSource::Pointer);
            });
            let _ = window
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().press(InputSource::Touch);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if event.touches().length() == 0 {
                    game.borrow_mut().release(InputSource::Touch);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_focus_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Window blur (click outside, alt-tab)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().blur();
                log::debug!("Window blur");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tab hidden: frames stop arriving
        {
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.hidden() {
                    game.borrow_mut().blur();
                    log::debug!("Tab hidden");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: `gapwing [--dump-mesh out.bin] [seconds] [seed] [config.json]`
///
/// `--dump-mesh` writes the final frame, tessellated into raw vertex bytes
/// (`[x, y, r, g, b, a]` f32 per vertex), for feeding a GPU backend offline.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use gapwing::consts::FRAME_DT;
    use gapwing::renderer::{MeshCanvas, draw_frame};
    use gapwing::sim::{Autopilot, DEFAULT_SEED};
    use gapwing::{GameConfig, GameEvent, Session, activate};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mesh_path = match args.iter().position(|a| a == "--dump-mesh") {
        Some(i) if i + 1 < args.len() => {
            let path = args.remove(i + 1);
            args.remove(i);
            Some(path)
        }
        Some(_) => {
            log::error!("--dump-mesh needs an output path");
            return std::process::ExitCode::FAILURE;
        }
        None => None,
    };
    let seconds: f32 = args.first().and_then(|s| s.parse().ok()).unwrap_or(60.0);
    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_SEED);

    let config = match args.get(2) {
        Some(path) => {
            let loaded = std::fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Cannot use config {}: {}", path, e);
                    return std::process::ExitCode::FAILURE;
                }
            }
        }
        None => GameConfig::default(),
    };

    let mut session = match Session::new(config, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    log::info!("Gapwing (native) demo: {seconds}s with seed {seed}");

    let mut pilot = Autopilot::default();
    let mut rounds = 0u32;
    let frames = (seconds / FRAME_DT).ceil() as u64;
    for _ in 0..frames {
        if pilot.decide(&session, FRAME_DT) {
            activate(&mut session);
        }
        gapwing::tick(&mut session, FRAME_DT);
        for event in session.drain_events() {
            if let GameEvent::Crashed { .. } = event {
                rounds += 1;
            }
        }
    }

    log::info!(
        "Done: {} crash(es), best score {}, current score {}",
        rounds,
        session.best_score.max(session.score),
        session.score
    );

    if let Some(path) = mesh_path {
        let mut canvas = MeshCanvas::default();
        draw_frame(&session, &mut canvas);
        if let Err(e) = std::fs::write(&path, canvas.as_bytes()) {
            log::error!("Cannot write mesh to {}: {}", path, e);
            return std::process::ExitCode::FAILURE;
        }
        log::info!(
            "Wrote {} vertices ({} labels) to {}",
            canvas.vertices.len(),
            canvas.labels.len(),
            path
        );
    }
    std::process::ExitCode::SUCCESS
}
