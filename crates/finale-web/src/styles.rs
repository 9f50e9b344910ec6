//! Inline style values for the page effects.
//!
//! Pure string building so the DOM layer only has to write them out.

use finale_engine::magnetic_offset;
use glam::Vec2;

/// A list of `(property, value)` pairs applied in order.
pub type StyleUpdate = Vec<(&'static str, String)>;

/// Elements that lean toward the pointer.
pub const MAGNETIC_SELECTOR: &str = ".magnetic, .nav-logo, .wish-item";
/// Springy settle back to rest after the pointer leaves.
pub const MAGNETIC_RELEASE_TRANSITION: &str =
    "transform 0.5s cubic-bezier(0.175, 0.885, 0.32, 1.275)";
/// The release transition is dropped once the settle has played out.
pub const MAGNETIC_SETTLE_MS: i32 = 500;

/// Footer heading swapped for the thank-you message.
pub const THANK_YOU_SELECTOR: &str = ".footer-content h2";
pub const THANK_YOU_HTML: &str = "AD MAIORA<br><span style='font-size: 0.4em; letter-spacing: 0.3em; margin-top: 1rem; display: block; opacity: 0.8;'>ENJOY YOUR DAY!</span>";
pub const IMPACT_CLASS: &str = "finale-impact";
/// Delay after the trigger before the heading starts fading.
pub const THANK_YOU_FADE_DELAY_MS: i32 = 50;
/// Delay after the fade starts before the text is swapped in.
pub const THANK_YOU_SWAP_DELAY_MS: i32 = 100;

pub fn translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// Cursor dot/circle transform, centered on the point.
pub fn cursor_transform(position: Vec2) -> String {
    format!("{} translate(-50%, -50%)", translate(position))
}

pub fn spotlight(position: Vec2) -> StyleUpdate {
    vec![
        ("--spotlight-x", format!("{}px", position.x)),
        ("--spotlight-y", format!("{}px", position.y)),
    ]
}

/// Pull a magnetic element toward the pointer.
pub fn magnetic_hover(element_center: Vec2, pointer: Vec2, pull: f32) -> StyleUpdate {
    vec![("transform", translate(magnetic_offset(element_center, pointer, pull)))]
}

/// Pointer left: spring back to rest.
pub fn magnetic_release() -> StyleUpdate {
    vec![
        ("transform", translate(Vec2::ZERO)),
        ("transition", MAGNETIC_RELEASE_TRANSITION.to_string()),
    ]
}

/// Clear the release transition so the next hover tracks without lag.
pub fn magnetic_settled() -> StyleUpdate {
    vec![("transition", String::new())]
}

/// Hide the trigger and make it unclickable.
pub fn retire_trigger() -> StyleUpdate {
    vec![
        ("opacity", "0".to_string()),
        ("pointer-events", "none".to_string()),
    ]
}

pub fn thank_you_fade_out() -> StyleUpdate {
    vec![
        ("transition", "opacity 0.2s ease".to_string()),
        ("opacity", "0".to_string()),
    ]
}

/// Restyle the heading after the swap. Opacity comes last so it fades back in.
pub fn thank_you_reveal() -> StyleUpdate {
    vec![
        ("border", "none".to_string()),
        ("font-size", "clamp(2rem, 5vw, 4rem)".to_string()),
        ("color", "#fff".to_string()),
        ("text-shadow", "none".to_string()),
        ("opacity", "1".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(update: &'a StyleUpdate, property: &str) -> Option<&'a str> {
        update.iter().find(|(p, _)| *p == property).map(|(_, v)| v.as_str())
    }

    #[test]
    fn cursor_transform_centers_on_point() {
        assert_eq!(
            cursor_transform(Vec2::new(12.5, 40.0)),
            "translate(12.5px, 40px) translate(-50%, -50%)"
        );
    }

    #[test]
    fn spotlight_sets_both_custom_properties() {
        let update = spotlight(Vec2::new(100.0, 200.0));
        assert_eq!(value(&update, "--spotlight-x"), Some("100px"));
        assert_eq!(value(&update, "--spotlight-y"), Some("200px"));
    }

    #[test]
    fn magnetic_hover_leans_by_pull() {
        let update = magnetic_hover(Vec2::new(100.0, 100.0), Vec2::new(110.0, 80.0), 0.4);
        assert_eq!(value(&update, "transform"), Some("translate(4px, -8px)"));
        assert_eq!(value(&update, "transition"), None);
    }

    #[test]
    fn magnetic_release_resets_to_rest_with_spring() {
        let update = magnetic_release();
        assert_eq!(value(&update, "transform"), Some("translate(0px, 0px)"));
        assert_eq!(value(&update, "transition"), Some(MAGNETIC_RELEASE_TRANSITION));
        assert_eq!(value(&magnetic_settled(), "transition"), Some(""));
    }

    #[test]
    fn retired_trigger_cannot_be_clicked_again() {
        let update = retire_trigger();
        assert_eq!(value(&update, "opacity"), Some("0"));
        assert_eq!(value(&update, "pointer-events"), Some("none"));
    }

    #[test]
    fn thank_you_fades_out_then_back_in() {
        assert_eq!(value(&thank_you_fade_out(), "opacity"), Some("0"));
        let reveal = thank_you_reveal();
        assert_eq!(reveal.last().map(|(p, v)| (*p, v.as_str())), Some(("opacity", "1")));
        assert!(THANK_YOU_FADE_DELAY_MS < THANK_YOU_SWAP_DELAY_MS);
        assert!(THANK_YOU_HTML.starts_with("AD MAIORA"));
    }
}
