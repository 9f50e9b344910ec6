//! Particle and trail colors.
//! Particles carry an HSL color; the trail fill is a plain RGBA.

use serde::{Deserialize, Serialize};

use super::rng::Rng;

/// HSL color. Hue is kept as sampled (it may exceed 360); CSS wraps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleColor {
    pub hue: f32,
    /// Percent, 0-100.
    pub saturation: f32,
    /// Percent, 0-100.
    pub lightness: f32,
}

impl ParticleColor {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Sample a hue uniformly from `[hue_range.0, hue_range.1)`.
    pub fn sample(rng: &mut Rng, hue_range: (f32, f32), saturation: f32, lightness: f32) -> Self {
        Self::new(rng.range(hue_range.0, hue_range.1), saturation, lightness)
    }

    /// Hue folded into [0, 360).
    pub fn normalized_hue(&self) -> f32 {
        self.hue.rem_euclid(360.0)
    }

    /// CSS `hsl()` string for Canvas 2D fill styles.
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }

    /// Convert to linear RGB components in [0, 1].
    pub fn to_rgb(&self) -> [f32; 3] {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.normalized_hue() / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        [r + m, g + m, b + m]
    }
}

/// RGBA color with 0-255 channels and alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba()` string.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
