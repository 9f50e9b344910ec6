//! Pointer tracker: follows real input, wanders on its own when input goes quiet.

use glam::Vec2;

use super::pointer::PointerSource;
use crate::api::config::TrackerConfig;
use crate::extensions::motion::{lerp_vec2, wander_point};

/// Tracks the pointer target plus two eased followers (cursor and spotlight).
///
/// Times are host milliseconds (e.g. `performance.now()`); only differences
/// matter.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    config: TrackerConfig,
    viewport: Vec2,
    target: Vec2,
    cursor: Vec2,
    spotlight: Vec2,
    idle: bool,
    last_input_ms: Option<f64>,
    hover_until_ms: f64,
    wander_time: f32,
}

impl PointerTracker {
    /// Everything starts at the viewport center, idle.
    pub fn new(viewport: Vec2, config: TrackerConfig) -> Self {
        let center = viewport * 0.5;
        Self {
            config,
            viewport,
            target: center,
            cursor: center,
            spotlight: center,
            idle: true,
            last_input_ms: None,
            hover_until_ms: f64::NEG_INFINITY,
            wander_time: 0.0,
        }
    }

    /// Mouse move, touch start or touch move. Non-finite coordinates are ignored.
    pub fn pointer_moved(&mut self, position: Vec2, now_ms: f64) {
        if !position.is_finite() {
            log::debug!("ignoring non-finite pointer position {:?}", position);
            return;
        }
        self.target = position;
        self.idle = false;
        self.last_input_ms = Some(now_ms);
        self.hover_until_ms = now_ms + self.config.hover_linger_ms;
    }

    /// Advance one animation frame.
    pub fn tick(&mut self, now_ms: f64) {
        let quiet = self
            .last_input_ms
            .map_or(true, |t| now_ms - t > self.config.idle_timeout_ms);
        if quiet && !self.idle {
            log::debug!("pointer idle, wandering");
        }
        if quiet {
            self.idle = true;
        }

        if self.idle {
            self.wander_time += self.config.wander_step;
            self.target = wander_point(
                self.viewport,
                self.wander_time,
                self.config.wander_freq,
                self.config.wander_amplitude,
            );
        }

        self.cursor = lerp_vec2(self.cursor, self.target, self.config.cursor_follow);
        self.spotlight = lerp_vec2(self.spotlight, self.target, self.config.spotlight_follow);
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Where the pointer is (or is wandering to).
    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn spotlight(&self) -> Vec2 {
        self.spotlight
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    /// Cursor UI fades out while wandering so only the spotlight remains.
    pub fn cursor_opacity(&self) -> f32 {
        if self.idle { 0.0 } else { 1.0 }
    }

    /// True for a short linger after each real input.
    pub fn hover_active(&self, now_ms: f64) -> bool {
        now_ms < self.hover_until_ms
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}

impl PointerSource for PointerTracker {
    fn pointer(&self) -> Option<Vec2> {
        Some(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PointerTracker {
        PointerTracker::new(Vec2::new(1000.0, 800.0), TrackerConfig::default())
    }

    #[test]
    fn starts_idle_at_center() {
        let t = tracker();
        assert!(t.is_idle());
        assert_eq!(t.target(), Vec2::new(500.0, 400.0));
        assert_eq!(t.cursor(), Vec2::new(500.0, 400.0));
        assert_eq!(t.cursor_opacity(), 0.0);
    }

    #[test]
    fn input_stops_wandering_until_timeout() {
        let mut t = tracker();
        t.pointer_moved(Vec2::new(100.0, 100.0), 1000.0);
        t.tick(1016.0);
        assert!(!t.is_idle());
        assert_eq!(t.target(), Vec2::new(100.0, 100.0));
        assert_eq!(t.cursor_opacity(), 1.0);

        t.tick(3500.0);
        assert!(!t.is_idle(), "exactly at the timeout is still active");
        t.tick(3501.0);
        assert!(t.is_idle());
        assert_ne!(t.target(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn followers_ease_at_different_rates() {
        let mut t = tracker();
        t.pointer_moved(Vec2::new(600.0, 400.0), 0.0);
        t.tick(16.0);
        // Gap of 100px: cursor closes 20%, spotlight 8%.
        assert!((t.cursor().x - 520.0).abs() < 1e-3);
        assert!((t.spotlight().x - 508.0).abs() < 1e-3);
    }

    #[test]
    fn idle_wander_moves_target() {
        let mut t = tracker();
        t.tick(0.0);
        let first = t.target();
        t.tick(16.0);
        assert_ne!(first, t.target());
    }

    #[test]
    fn hover_marker_lingers_briefly() {
        let mut t = tracker();
        assert!(!t.hover_active(0.0));
        t.pointer_moved(Vec2::new(10.0, 10.0), 500.0);
        assert!(t.hover_active(550.0));
        assert!(!t.hover_active(600.0));
    }

    #[test]
    fn non_finite_input_ignored() {
        let mut t = tracker();
        t.pointer_moved(Vec2::new(f32::NAN, 3.0), 0.0);
        assert!(t.is_idle());
        assert_eq!(t.pointer(), Some(Vec2::new(500.0, 400.0)));
    }
}
