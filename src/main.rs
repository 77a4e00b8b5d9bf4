//! Breakout entry point
//!
//! The browser build drives the game from `requestAnimationFrame` and draws
//! on a 2D canvas. The native build plays a headless game with an
//! autopilot on a simulated 60 Hz clock.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use breakout::renderer::CanvasRenderer;
    use breakout::{Game, Settings};

    /// Game plus the surface it draws on
    struct App {
        game: Game,
        renderer: CanvasRenderer,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Match the canvas backing store to its CSS size and reflow
        fn fit_canvas(&mut self) {
            let (w, h) = (self.canvas.client_width(), self.canvas.client_height());
            if w <= 0 || h <= 0 {
                return;
            }
            self.canvas.set_width(w as u32);
            self.canvas.set_height(h as u32);
            self.game.resize(w as f32, h as f32);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
        }

        log::info!("Breakout starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let mut settings = Settings::load();
        settings.seed.get_or_insert(js_sys::Date::now() as u64);
        let renderer = CanvasRenderer::new(&canvas)?;
        let (w, h) = (canvas.client_width() as f32, canvas.client_height() as f32);
        let mut app = App {
            game: Game::new(settings, w, h),
            renderer,
            canvas,
        };
        app.fit_canvas();
        let app = Rc::new(RefCell::new(app));

        setup_input_handlers(&window, app.clone())?;
        request_animation_frame(app);

        log::info!("Breakout running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_down(event.key_code());
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_up(event.key_code());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Resize
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().fit_canvas();
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping frame loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        if let Err(err) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut guard = app.borrow_mut();
            let App { game, renderer, .. } = &mut *guard;
            game.frame(time, renderer);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use breakout::consts::FRAME_MS;
    use breakout::platform::key;
    use breakout::renderer::HeadlessRenderer;
    use breakout::sim::GamePhase;
    use breakout::{Game, Settings};

    /// Ten simulated minutes
    const MAX_FRAMES: u32 = 60 * 60 * 10;
    /// Dead zone before the autopilot steers
    const STEER_MARGIN: f32 = 8.0;

    env_logger::init();
    log::info!("Breakout (native) starting...");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = Settings::load(path.as_deref());
    let mut game = Game::new(settings, 1024.0, 768.0);
    let mut renderer = HeadlessRenderer::new();

    game.tap(key::SPACE);

    let mut now = 0.0;
    let mut frames = 0;
    while frames < MAX_FRAMES && !game.phase().is_finished() {
        // Follow the ball
        let offset = game.state.ball.rect.center_x() - game.state.pad.rect.center_x();
        let steer = [
            (key::LEFT, offset < -STEER_MARGIN),
            (key::RIGHT, offset > STEER_MARGIN),
        ];
        for (code, held) in steer {
            if held && game.keyboard.is_up(code) {
                game.key_down(code);
            } else if !held && game.keyboard.is_down(code) {
                game.key_up(code);
            }
        }

        game.frame(now, &mut renderer);
        now += FRAME_MS;
        frames += 1;
    }

    let state = &game.state;
    match state.phase {
        GamePhase::Won => log::info!("Won after {} frames", frames),
        GamePhase::GameOver => log::info!(
            "Game over after {} frames, {}/{} bricks cleared",
            frames,
            state.destroyed_bricks,
            state.destructible_bricks
        ),
        phase => log::info!(
            "Stopped after {} frames in {:?}, {} lives left, {}/{} bricks cleared",
            frames,
            phase,
            state.lives,
            state.destroyed_bricks,
            state.destructible_bricks
        ),
    }
    log::info!("{} draw calls over {} frames", renderer.draw_calls, renderer.frames);
}
