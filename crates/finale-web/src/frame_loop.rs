//! Self-rescheduling `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::SetupError;

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(callback: &FrameCallback) -> Result<i32, SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

/// Call `step` once per display refresh until it returns false.
///
/// `step` receives the rAF timestamp in milliseconds. The closure owns itself
/// through an `Rc` cycle that is broken when the loop stops.
pub fn run<F>(mut step: F) -> Result<(), SetupError>
where
    F: FnMut(f64) -> bool + 'static,
{
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&slot);

    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if !step(timestamp) {
            let _ = next.borrow_mut().take();
            return;
        }
        let scheduled = match next.borrow().as_ref() {
            Some(callback) => request_frame(callback),
            None => return,
        };
        if let Err(err) = scheduled {
            log::error!("animation loop stopped: {}", err);
            let _ = next.borrow_mut().take();
        }
    }));

    let first = match slot.borrow().as_ref() {
        Some(callback) => request_frame(callback),
        None => Ok(0),
    };
    first.map(|_| ())
}
