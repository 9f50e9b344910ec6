use serde::Deserialize;

use super::error::ConfigError;
use crate::systems::effects::Rgba;

/// Tuning for a particle burst. Defaults reproduce the finale effect.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FinaleConfig {
    /// Particles appended per `explode` call (default: 500).
    pub burst_size: usize,
    /// Initial speed magnitude, uniform in `[min, max)` pixels/frame.
    pub speed_range: (f32, f32),
    /// Life lost per frame, uniform in `[min, max)`.
    pub decay_range: (f32, f32),
    /// Initial radius, uniform in `[min, max)`.
    pub size_range: (f32, f32),
    /// Hue band in degrees; may run past 360.
    pub hue_range: (f32, f32),
    pub saturation: f32,
    pub lightness: f32,
    /// Particles closer than this to the pointer get pushed.
    pub repel_radius: f32,
    /// Multiplier on the raw particle-pointer offset added to velocity.
    pub repel_strength: f32,
    /// Velocity multiplier applied every frame.
    pub drag: f32,
    /// Size multiplier applied every frame.
    pub shrink: f32,
    /// Opacity at full life.
    pub max_alpha: f32,
    /// Translucent fill painted each frame to leave trails.
    pub trail_color: Rgba,
    /// RNG seed for particle sampling.
    pub seed: u64,
    pub tracker: TrackerConfig,
}

impl Default for FinaleConfig {
    fn default() -> Self {
        Self {
            burst_size: 500,
            speed_range: (2.0, 17.0),
            decay_range: (0.01, 0.03),
            size_range: (1.0, 5.0),
            hue_range: (330.0, 370.0),
            saturation: 100.0,
            lightness: 60.0,
            repel_radius: 200.0,
            repel_strength: 0.001,
            drag: 0.96,
            shrink: 0.99,
            max_alpha: 0.6,
            trail_color: Rgba::new(3, 3, 3, 0.2),
            seed: 42,
            tracker: TrackerConfig::default(),
        }
    }
}

impl FinaleConfig {
    /// Parse from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FinaleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would keep a burst alive forever or break sampling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.burst_size == 0 {
            return Err(invalid("burst_size", "must be greater than zero"));
        }
        if !(self.decay_range.0 > 0.0) {
            return Err(invalid("decay_range", "minimum must be positive"));
        }
        for (field, (lo, hi)) in [
            ("speed_range", self.speed_range),
            ("decay_range", self.decay_range),
            ("size_range", self.size_range),
            ("hue_range", self.hue_range),
        ] {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(invalid(field, "must be finite with min <= max"));
            }
        }
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return Err(invalid("drag", "must be in (0, 1]"));
        }
        if !(self.shrink > 0.0 && self.shrink <= 1.0) {
            return Err(invalid("shrink", "must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.max_alpha) {
            return Err(invalid("max_alpha", "must be in [0, 1]"));
        }
        self.tracker.validate()
    }
}

/// Pointer tracker tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Milliseconds without input before the pointer starts wandering.
    pub idle_timeout_ms: f64,
    /// Wander clock advance per tick.
    pub wander_step: f32,
    /// Lissajous frequencies for the x and y axes.
    pub wander_freq: (f32, f32),
    /// Wander amplitude as a fraction of the viewport size.
    pub wander_amplitude: f32,
    /// Lerp factor for the cursor dot (fast follow).
    pub cursor_follow: f32,
    /// Lerp factor for the spotlight (slow follow).
    pub spotlight_follow: f32,
    /// How long the hover marker stays after the last input.
    pub hover_linger_ms: f64,
    /// Fraction of the pointer offset applied to magnetic elements.
    pub magnetic_pull: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: 2500.0,
            wander_step: 0.015,
            wander_freq: (0.8, 1.1),
            wander_amplitude: 0.3,
            cursor_follow: 0.2,
            spotlight_follow: 0.08,
            hover_linger_ms: 100.0,
            magnetic_pull: 0.4,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.cursor_follow) {
            return Err(invalid("tracker.cursor_follow", "must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.spotlight_follow) {
            return Err(invalid("tracker.spotlight_follow", "must be in [0, 1]"));
        }
        if self.idle_timeout_ms < 0.0 {
            return Err(invalid("tracker.idle_timeout_ms", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(FinaleConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = FinaleConfig::from_json(r#"{ "burst_size": 64, "tracker": { "cursor_follow": 0.5 } }"#).unwrap();
        assert_eq!(config.burst_size, 64);
        assert_eq!(config.drag, 0.96);
        assert_eq!(config.tracker.cursor_follow, 0.5);
        assert_eq!(config.tracker.idle_timeout_ms, 2500.0);
    }

    #[test]
    fn trail_color_parses() {
        let config = FinaleConfig::from_json(r#"{ "trail_color": { "r": 10, "g": 0, "b": 20, "a": 0.5 } }"#).unwrap();
        assert_eq!(config.trail_color, Rgba::new(10, 0, 20, 0.5));
    }

    #[test]
    fn zero_decay_rejected() {
        let err = FinaleConfig::from_json(r#"{ "decay_range": [0.0, 0.02] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "decay_range", .. }));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = FinaleConfig::from_json("{ burst_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn inverted_range_rejected() {
        let config = FinaleConfig { size_range: (5.0, 1.0), ..FinaleConfig::default() };
        assert!(config.validate().is_err());
    }
}
