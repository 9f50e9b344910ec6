//! WASM bridge for the finale effect.
//!
//! The page calls `finale_init` once, forwards pointer and resize events, and
//! either calls `finale_explode` itself or hands its trigger button to
//! `finale_bind_trigger`. Everything else (frame scheduling, canvas drawing,
//! cursor and hover styling) happens on the Rust side.

pub mod canvas;
pub mod dom;
pub mod error;
pub mod frame_loop;
pub mod runner;
pub mod styles;

pub use canvas::CanvasSurface;
pub use error::SetupError;
pub use runner::{FinaleRunner, HostSurface, TrackerFrame};

use std::cell::RefCell;

use finale_engine::{magnetic_offset, FinaleConfig, FrameOutcome, InputEvent, TrackerConfig};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

thread_local! {
    static RUNNER: RefCell<Option<FinaleRunner<CanvasSurface>>> = RefCell::new(None);
}

/// Run `f` against the runner, or return None before a successful init.
fn try_with_runner<R>(f: impl FnOnce(&mut FinaleRunner<CanvasSurface>) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn viewport() -> Result<Vec2, SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Vec2::new(width as f32, height as f32))
}

fn document() -> Result<Document, SetupError> {
    web_sys::window()
        .ok_or(SetupError::NoWindow)?
        .document()
        .ok_or(SetupError::NoDocument)
}

fn magnetic_pull() -> f32 {
    try_with_runner(|r| r.magnetic_pull()).unwrap_or_else(|| TrackerConfig::default().magnetic_pull)
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn init(canvas_id: &str, config_json: Option<String>) -> Result<(), SetupError> {
    if RUNNER.with(|cell| cell.borrow().is_some()) {
        log::warn!("finale: already initialized; ignoring init for #{}", canvas_id);
        return Ok(());
    }
    let config = match config_json {
        Some(json) => FinaleConfig::from_json(&json)?,
        None => FinaleConfig::default(),
    };
    let surface = CanvasSurface::acquire(canvas_id)?;
    let runner = FinaleRunner::new(config, surface, viewport()?);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    frame_loop::run(|timestamp| {
        let Some(frame) = try_with_runner(|r| r.tick_tracker(timestamp)) else {
            return false;
        };
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            dom::apply_tracker_frame(&document, &frame);
        }
        true
    })
}

/// Set up the engine on `canvas_id`. `config_json` overrides defaults.
///
/// On failure the effect stays disabled and every other export is a no-op.
#[wasm_bindgen]
pub fn finale_init(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match init(canvas_id, config_json) {
        Ok(()) => {
            log::info!("finale: initialized on #{}", canvas_id);
            Ok(())
        }
        Err(err) => {
            log::warn!("finale: disabled: {}", err);
            Err(err.into())
        }
    }
}

/// Fire a burst from the center of the canvas.
#[wasm_bindgen]
pub fn finale_explode() {
    match try_with_runner(|r| r.explode()) {
        Some(true) => start_particle_loop(),
        Some(false) => {}
        None => log::debug!("finale_explode before init; ignored"),
    }
}

/// Wire `button_id` as the one-shot finale trigger: on click the button is
/// retired, a burst fires and the footer heading turns into the thank-you
/// message. A missing button is logged and skipped.
#[wasm_bindgen]
pub fn finale_bind_trigger(button_id: &str) -> Result<(), JsValue> {
    let page = document()?;
    let Some(button) = page
        .get_element_by_id(button_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("finale: no trigger #{}", button_id);
        return Ok(());
    };

    let target = button.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || {
        dom::retire_trigger(&target);
        finale_explode();
        if let Err(err) = document().and_then(|d| dom::reveal_thank_you(&d)) {
            log::warn!("finale: thank-you reveal skipped: {}", err);
        }
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn start_particle_loop() {
    let result = frame_loop::run(|_| {
        try_with_runner(|r| r.frame() == FrameOutcome::Continue).unwrap_or(false)
    });
    if let Err(err) = result {
        log::error!("finale: could not start particle loop: {}", err);
    }
}

#[wasm_bindgen]
pub fn finale_pointer_move(x: f32, y: f32) {
    let time_ms = now_ms();
    try_with_runner(|r| r.push_input(InputEvent::PointerMove { x, y, time_ms }));
}

#[wasm_bindgen]
pub fn finale_resize(width: f32, height: f32) {
    try_with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

#[wasm_bindgen]
pub fn finale_is_active() -> bool {
    try_with_runner(|r| r.is_active()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn finale_particle_count() -> u32 {
    try_with_runner(|r| r.particle_count()).unwrap_or(0)
}

/// Translation `[x, y]` for a magnetic element centered at (cx, cy).
#[wasm_bindgen]
pub fn finale_magnetic_offset(cx: f32, cy: f32, px: f32, py: f32) -> Box<[f32]> {
    let offset = magnetic_offset(Vec2::new(cx, cy), Vec2::new(px, py), magnetic_pull());
    Box::new([offset.x, offset.y])
}

/// Attach hover/leave listeners to `.magnetic, .nav-logo, .wish-item`.
/// Returns the number of elements bound.
#[wasm_bindgen]
pub fn finale_bind_magnetic() -> Result<u32, JsValue> {
    let bound = dom::bind_magnetic(&document()?, magnetic_pull())?;
    log::info!("finale: {} magnetic elements", bound);
    Ok(bound)
}

// ---- Event accessors ----

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    try_with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    try_with_runner(|r| r.events_len()).unwrap_or(0)
}
