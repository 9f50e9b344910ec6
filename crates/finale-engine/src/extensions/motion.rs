// extensions/motion.rs
//
// Follow and hover math for the page's pointer effects.
// No dependencies on the particle engine, just Vec2 math.

use glam::Vec2;

/// Linearly interpolate between two f32 values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Translation for a "magnetic" element: it leans toward the pointer by
/// `pull` times the pointer's offset from the element center.
#[inline]
pub fn magnetic_offset(element_center: Vec2, pointer: Vec2, pull: f32) -> Vec2 {
    (pointer - element_center) * pull
}

/// Point on the idle-wander Lissajous curve at time `t`.
#[inline]
pub fn wander_point(viewport: Vec2, t: f32, freq: (f32, f32), amplitude: f32) -> Vec2 {
    let center = viewport * 0.5;
    center
        + Vec2::new(
            (t * freq.0).cos() * viewport.x * amplitude,
            (t * freq.1).sin() * viewport.y * amplitude,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert!((lerp(100.0, 200.0, 0.2) - 120.0).abs() < 1e-4);
    }

    #[test]
    fn lerp_vec2_moves_fraction_of_gap() {
        let v = lerp_vec2(Vec2::ZERO, Vec2::new(100.0, -50.0), 0.08);
        assert!((v - Vec2::new(8.0, -4.0)).length() < 1e-4);
    }

    #[test]
    fn magnetic_leans_toward_pointer() {
        let offset = magnetic_offset(Vec2::new(100.0, 100.0), Vec2::new(110.0, 80.0), 0.4);
        assert!((offset - Vec2::new(4.0, -8.0)).length() < 1e-4);
        assert_eq!(magnetic_offset(Vec2::ONE, Vec2::ONE, 0.4), Vec2::ZERO);
    }

    #[test]
    fn wander_starts_right_of_center() {
        let viewport = Vec2::new(1000.0, 800.0);
        let p = wander_point(viewport, 0.0, (0.8, 1.1), 0.3);
        assert!((p - Vec2::new(800.0, 400.0)).length() < 1e-3);
    }

    #[test]
    fn wander_stays_inside_amplitude_box() {
        let viewport = Vec2::new(1000.0, 800.0);
        for i in 0..2000 {
            let p = wander_point(viewport, i as f32 * 0.015, (0.8, 1.1), 0.3);
            assert!(p.x >= 200.0 - 1e-3 && p.x <= 800.0 + 1e-3);
            assert!(p.y >= 160.0 - 1e-3 && p.y <= 640.0 + 1e-3);
        }
    }
}
