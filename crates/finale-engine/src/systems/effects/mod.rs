//! Particle burst effects.
//!
//! `EffectsState` owns the live particles and the RNG they are sampled from.
//! Lifecycle (idle/active, events) lives in [`crate::core::engine`].

mod rng;
mod color;
mod particle;

pub use rng::Rng;
pub use color::{ParticleColor, Rgba};
pub use particle::Particle;

use glam::Vec2;

use crate::api::config::FinaleConfig;
use crate::renderer::surface::Surface;

/// Container for the live particles of every burst.
pub struct EffectsState {
    pub particles: Vec<Particle>,
    pub rng: Rng,
}

impl EffectsState {
    /// Create a new EffectsState with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        EffectsState {
            particles: Vec::new(),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Append `count` particles at `center`.
    pub fn spawn_burst(&mut self, center: Vec2, count: usize, config: &FinaleConfig) {
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(center, &mut self.rng, config);
            self.particles.push(p);
        }
    }

    /// Update and draw every particle in order, then keep only the survivors.
    ///
    /// One `retain_mut` pass: each particle is visited exactly once, so removal
    /// never shifts a neighbour out of the current frame. Returns the number of
    /// particles dropped because their state went non-finite.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        pointer: Vec2,
        config: &FinaleConfig,
        surface: &mut S,
    ) -> usize {
        let mut faulted = 0;
        self.particles.retain_mut(|p| {
            p.update(pointer, config);
            if !p.is_finite() {
                faulted += 1;
                return false;
            }
            if !p.is_alive() {
                return false;
            }
            p.draw(surface, config.max_alpha);
            true
        });
        if faulted > 0 {
            log::warn!("dropped {} particles with non-finite state", faulted);
        }
        faulted
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Clear all effects.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
