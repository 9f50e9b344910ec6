//! Page styling driven by the pointer tracker and the finale trigger.

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::error::SetupError;
use crate::runner::TrackerFrame;
use crate::styles::{self, StyleUpdate};

const CURSOR_SELECTORS: [&str; 2] = [".cursor-dot", ".cursor-circle"];
const HOVER_CLASS: &str = "hover-active";

/// Write the spotlight custom properties, cursor transforms and hover marker.
pub fn apply_tracker_frame(document: &Document, frame: &TrackerFrame) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        apply_styles(&root, &styles::spotlight(frame.spotlight));
    }

    let cursor: StyleUpdate = vec![
        ("opacity", frame.cursor_opacity.to_string()),
        ("transform", styles::cursor_transform(frame.cursor)),
    ];
    for selector in CURSOR_SELECTORS {
        if let Some(element) = query_html(document, selector) {
            apply_styles(&element, &cursor);
        }
    }

    if let Some(body) = document.body() {
        toggle_class(&body, HOVER_CLASS, frame.hover_active);
    }
}

/// Lean `element` toward the pointer.
pub fn apply_magnetic(element: &HtmlElement, pointer: Vec2, pull: f32) {
    let rect = element.get_bounding_client_rect();
    let center = Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    );
    apply_styles(element, &styles::magnetic_hover(center, pointer, pull));
}

/// Spring `element` back to rest, then drop the transition once it settles.
pub fn release_magnetic(element: &HtmlElement) {
    apply_styles(element, &styles::magnetic_release());
    let settled = element.clone();
    let result = after_ms(styles::MAGNETIC_SETTLE_MS, move || {
        apply_styles(&settled, &styles::magnetic_settled());
    });
    if let Err(err) = result {
        log::warn!("magnetic settle not scheduled: {}", err);
    }
}

/// Attach hover and leave listeners to every magnetic element. Returns how
/// many were bound.
pub fn bind_magnetic(document: &Document, pull: f32) -> Result<u32, SetupError> {
    let nodes = document.query_selector_all(styles::MAGNETIC_SELECTOR)?;
    let mut bound = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };

        let target = element.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let pointer = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            apply_magnetic(&target, pointer, pull);
        });
        element.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();

        let target = element.clone();
        let on_leave = Closure::<dyn FnMut()>::new(move || release_magnetic(&target));
        element.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();

        bound += 1;
    }
    Ok(bound)
}

/// Hide the trigger so it cannot fire twice.
pub fn retire_trigger(button: &HtmlElement) {
    apply_styles(button, &styles::retire_trigger());
}

/// Fade the footer heading out and swap in the thank-you message.
pub fn reveal_thank_you(document: &Document) -> Result<(), SetupError> {
    let document = document.clone();
    after_ms(styles::THANK_YOU_FADE_DELAY_MS, move || {
        let Some(heading) = query_html(&document, styles::THANK_YOU_SELECTOR) else {
            log::warn!("no `{}` to reveal", styles::THANK_YOU_SELECTOR);
            return;
        };
        apply_styles(&heading, &styles::thank_you_fade_out());

        let result = after_ms(styles::THANK_YOU_SWAP_DELAY_MS, move || {
            heading.set_inner_html(styles::THANK_YOU_HTML);
            toggle_class(&heading, styles::IMPACT_CLASS, true);
            apply_styles(&heading, &styles::thank_you_reveal());
        });
        if let Err(err) = result {
            log::warn!("thank-you swap not scheduled: {}", err);
        }
    })
}

/// Run `f` once after `delay_ms`.
fn after_ms(delay_ms: i32, f: impl FnOnce() + 'static) -> Result<(), SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)?;
    Ok(())
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn apply_styles(element: &HtmlElement, update: &StyleUpdate) {
    let style = element.style();
    for (property, value) in update {
        if let Err(err) = style.set_property(property, value) {
            log::warn!("set {} = {} failed: {:?}", property, value, err);
        }
    }
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class `{}` toggle failed: {:?}", class, err);
    }
}
