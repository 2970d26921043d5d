//! Browser host: owns the game and drives it from `requestAnimationFrame`

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, FrameDriver, LocalGame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use crate::canvas::{CanvasSurface, PerformanceClock};
use crate::input::{handle_key_down, handle_key_up, handle_pointer_move};
use crate::scoreboard::Scoreboard;

/// Main client state
struct App {
    game: LocalGame,
    driver: FrameDriver<PerformanceClock>,
    surface: CanvasSurface,
    scoreboard: Scoreboard,
}

impl App {
    fn frame(&mut self, timestamp_ms: f64) {
        let report = self
            .driver
            .on_frame(timestamp_ms, &mut self.game, &mut self.surface);
        if report.events.score_changed() {
            self.scoreboard.show(self.game.score());
        }
    }
}

type Shared = Rc<RefCell<App>>;

/// Start a match on `canvas`
///
/// `config_json` may override any subset of the tuning values. The surface
/// size always comes from the canvas.
#[wasm_bindgen]
pub fn start_game(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second start_game call finds the logger already installed
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger not installed: {err}");
    }

    let config = load_config(&canvas, config_json.as_deref())?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let performance = window
        .performance()
        .ok_or_else(|| JsValue::from_str("No performance timer"))?;

    let seed = random_seed();
    log::info!(
        "starting game {}x{}, seed {seed}",
        config.surface_width,
        config.surface_height
    );

    let app = App {
        game: LocalGame::new(config, seed),
        driver: FrameDriver::new(PerformanceClock::new(performance)),
        surface: CanvasSurface::new(&canvas)?,
        scoreboard: Scoreboard::from_document(&document)?,
    };
    app.scoreboard.show(app.game.score());
    let app = Rc::new(RefCell::new(app));

    register_listeners(&window, &canvas, &app)?;
    start_loop(window, app)
}

fn load_config(canvas: &HtmlCanvasElement, json: Option<&str>) -> Result<Config, JsValue> {
    let mut config = match json {
        Some(json) => Config::parse(json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => Config::new(),
    };
    config.surface_width = canvas.width() as f32;
    config.surface_height = canvas.height() as f32;
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

fn random_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
    now ^ noise
}

fn register_listeners(window: &Window, canvas: &HtmlCanvasElement, app: &Shared) -> Result<(), JsValue> {
    // Pointer position relative to the canvas's on-screen box
    {
        let app = app.clone();
        let target = canvas.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let input = handle_pointer_move(event.client_y() as f64, rect.top(), rect.height());
            app.borrow_mut().game.push_input(input);
        });
        canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    {
        let app = app.clone();
        let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if let Some(input) = handle_key_down(&event.key(), event.repeat()) {
                app.borrow_mut().game.push_input(input);
            }
        });
        window.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
        on_key_down.forget();
    }

    {
        let app = app.clone();
        let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if let Some(input) = handle_key_up(&event.key()) {
                app.borrow_mut().game.push_input(input);
            }
        });
        window.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
        on_key_up.forget();
    }

    let on_context_menu = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
        event.prevent_default();
    });
    canvas.add_event_listener_with_callback("contextmenu", on_context_menu.as_ref().unchecked_ref())?;
    on_context_menu.forget();

    Ok(())
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Self-rescheduling animation loop; each callback queues the next one
fn start_loop(window: Window, app: Shared) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let loop_window = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        app.borrow_mut().frame(timestamp);
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = loop_window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::error!("failed to schedule frame: {err:?}");
            }
        }
    }));

    let first = slot.borrow();
    let callback = first
        .as_ref()
        .ok_or_else(|| JsValue::from_str("Frame callback missing"))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}
