//! Burst particle: spawn sampling, per-frame physics, and drawing.

use glam::Vec2;

use super::color::ParticleColor;
use super::rng::Rng;
use crate::api::config::FinaleConfig;
use crate::renderer::surface::{FillStyle, Surface, SurfaceGuard};

/// A single particle with physics and rendering state.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Starts at 1.0; the particle is dead once this reaches zero.
    pub life: f32,
    /// Life lost per frame.
    pub decay: f32,
    /// Circle radius in pixels.
    pub size: f32,
    pub color: ParticleColor,
}

impl Particle {
    /// Sample a fresh particle at `origin`, flying out in a random direction.
    pub fn spawn(origin: Vec2, rng: &mut Rng, config: &FinaleConfig) -> Self {
        let angle = rng.next_f32() * std::f32::consts::TAU;
        let speed = rng.range(config.speed_range.0, config.speed_range.1);
        Particle {
            position: origin,
            velocity: Vec2::from_angle(angle) * speed,
            life: 1.0,
            decay: rng.range(config.decay_range.0, config.decay_range.1),
            size: rng.range(config.size_range.0, config.size_range.1),
            color: ParticleColor::sample(rng, config.hue_range, config.saturation, config.lightness),
        }
    }

    /// Advance one frame (explicit Euler, dt = 1 frame).
    ///
    /// Inside `repel_radius` the raw offset from the pointer is added to the
    /// velocity, so the push grows with displacement rather than falling off.
    pub fn update(&mut self, pointer: Vec2, config: &FinaleConfig) {
        self.position += self.velocity;

        let offset = self.position - pointer;
        if offset.length() < config.repel_radius {
            self.velocity += offset * config.repel_strength;
        }

        self.velocity *= config.drag;
        self.life -= self.decay;
        self.size *= config.shrink;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// False once any field has gone NaN/inf.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite() && self.life.is_finite() && self.size.is_finite()
    }

    /// Opacity for the current life, never above `max_alpha`.
    pub fn alpha(&self, max_alpha: f32) -> f32 {
        (self.life * max_alpha).clamp(0.0, max_alpha)
    }

    /// Draw as a filled circle. Alpha and fill changes are scoped to this call.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, max_alpha: f32) {
        let mut surface = SurfaceGuard::new(surface);
        surface.set_global_alpha(self.alpha(max_alpha));
        surface.set_fill_style(FillStyle::Hsl(self.color));
        surface.fill_circle(self.position, self.size.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};

    fn still_particle(position: Vec2) -> Particle {
        Particle {
            position,
            velocity: Vec2::new(1.0, 0.0),
            life: 1.0,
            decay: 0.02,
            size: 3.0,
            color: ParticleColor::new(340.0, 100.0, 60.0),
        }
    }

    #[test]
    fn spawn_samples_within_ranges() {
        let config = FinaleConfig::default();
        let mut rng = Rng::new(42);
        for _ in 0..1000 {
            let p = Particle::spawn(Vec2::new(400.0, 300.0), &mut rng, &config);
            assert_eq!(p.position, Vec2::new(400.0, 300.0));
            assert_eq!(p.life, 1.0);
            let speed = p.velocity.length();
            assert!(speed >= 2.0 - 1e-3 && speed < 17.0 + 1e-3, "speed {}", speed);
            assert!(p.decay >= 0.01 && p.decay < 0.03);
            assert!(p.size >= 1.0 && p.size < 5.0);
            assert!(p.color.hue >= 330.0 && p.color.hue < 370.0);
            assert_eq!(p.color.saturation, 100.0);
            assert_eq!(p.color.lightness, 60.0);
        }
    }

    #[test]
    fn update_integrates_then_drags() {
        let config = FinaleConfig::default();
        let mut p = still_particle(Vec2::ZERO);
        // Pointer far away: no repulsion.
        p.update(Vec2::new(5000.0, 5000.0), &config);
        assert_eq!(p.position, Vec2::new(1.0, 0.0));
        assert!((p.velocity.x - 0.96).abs() < 1e-6);
        assert!((p.life - 0.98).abs() < 1e-6);
        assert!((p.size - 2.97).abs() < 1e-6);
    }

    #[test]
    fn life_and_size_never_increase() {
        let config = FinaleConfig::default();
        let mut rng = Rng::new(3);
        let mut p = Particle::spawn(Vec2::new(100.0, 100.0), &mut rng, &config);
        let pointer = Vec2::new(120.0, 90.0);
        while p.is_alive() {
            let (life, size) = (p.life, p.size);
            p.update(pointer, &config);
            assert!(p.life < life);
            assert!(p.size <= size);
        }
    }

    #[test]
    fn repulsion_only_inside_radius() {
        let config = FinaleConfig::default();
        let pointer = Vec2::new(0.0, 0.0);

        // After the position step these sit 100px and 300px from the pointer.
        let mut near = still_particle(Vec2::new(99.0, 0.0));
        let mut far = still_particle(Vec2::new(299.0, 0.0));
        near.update(pointer, &config);
        far.update(pointer, &config);

        assert!((far.velocity.x - 0.96).abs() < 1e-6);
        // (1 + 100 * 0.001) * 0.96
        assert!((near.velocity.x - 1.056).abs() < 1e-5);
        assert_ne!(near.velocity, far.velocity);
    }

    #[test]
    fn repulsion_scales_with_raw_offset() {
        let config = FinaleConfig::default();
        let mut close = still_particle(Vec2::new(10.0, 0.0));
        let mut farther = still_particle(Vec2::new(150.0, 0.0));
        close.velocity = Vec2::ZERO;
        farther.velocity = Vec2::ZERO;
        close.update(Vec2::ZERO, &config);
        farther.update(Vec2::ZERO, &config);
        // 150px away pushes fifteen times harder than 10px away.
        assert!((farther.velocity.x / close.velocity.x - 15.0).abs() < 1e-3);
    }

    #[test]
    fn draw_isolates_state_and_fades_with_life() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        let mut p = still_particle(Vec2::new(10.0, 20.0));
        p.life = 0.5;
        let before = p.clone();
        p.draw(&mut surface, 0.6);

        assert_eq!(p, before);
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.global_alpha(), 1.0);
        match &surface.commands()[0] {
            DrawCommand::Circle { center, radius, fill, alpha } => {
                assert_eq!(*center, Vec2::new(10.0, 20.0));
                assert_eq!(*radius, 3.0);
                assert_eq!(*fill, FillStyle::Hsl(p.color));
                assert!((alpha - 0.3).abs() < 1e-6);
            }
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn alpha_is_capped() {
        let mut p = still_particle(Vec2::ZERO);
        assert!((p.alpha(0.6) - 0.6).abs() < 1e-6);
        p.life = -0.01;
        assert_eq!(p.alpha(0.6), 0.0);
    }
}
