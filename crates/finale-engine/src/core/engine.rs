use glam::Vec2;

use crate::api::config::FinaleConfig;
use crate::api::types::{EngineEvent, EngineState, FrameOutcome};
use crate::input::pointer::PointerSource;
use crate::renderer::surface::{FillStyle, Surface};
use crate::systems::effects::{EffectsState, Particle};

/// The particle burst engine.
///
/// `explode` appends a burst and flips the engine to `Active`; the host then
/// calls `frame` once per display refresh until it returns
/// [`FrameOutcome::Finished`]. Pointer position comes from the injected
/// [`PointerSource`] and is only ever read.
pub struct ParticleEngine<P: PointerSource> {
    config: FinaleConfig,
    pointer: P,
    effects: EffectsState,
    state: EngineState,
    viewport: Vec2,
    events: Vec<EngineEvent>,
    frames_this_burst: u32,
}

impl<P: PointerSource> ParticleEngine<P> {
    pub fn new(config: FinaleConfig, pointer: P, viewport: Vec2) -> Self {
        let effects = EffectsState::new(config.seed);
        Self {
            config,
            pointer,
            effects,
            state: EngineState::Idle,
            viewport,
            events: Vec::new(),
            frames_this_burst: 0,
        }
    }

    /// Append a burst at `origin`.
    ///
    /// Returns true when the engine was idle, i.e. the host must start its frame
    /// loop. While already active the burst is appended to the running one
    /// (no reset), so two quick calls give twice the population.
    pub fn explode(&mut self, origin: Vec2) -> bool {
        let was_idle = self.state == EngineState::Idle;
        self.state = EngineState::Active;
        if was_idle {
            self.frames_this_burst = 0;
        }

        self.effects.spawn_burst(origin, self.config.burst_size, &self.config);
        let population = self.effects.len();
        log::info!(
            "burst of {} at ({:.0}, {:.0}), population {}",
            self.config.burst_size,
            origin.x,
            origin.y,
            population
        );
        self.events.push(EngineEvent::Activated { population: population as u32 });
        was_idle
    }

    /// Explode from the middle of the viewport.
    pub fn explode_centered(&mut self) -> bool {
        self.explode(self.center())
    }

    /// Render one animation frame.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameOutcome {
        if self.state == EngineState::Idle {
            return FrameOutcome::Finished;
        }

        // Translucent fill instead of a clear leaves motion trails.
        surface.set_fill_style(FillStyle::Rgba(self.config.trail_color));
        surface.fill_rect(0.0, 0.0, surface.width(), surface.height());

        let pointer = self.resolve_pointer();
        self.effects.tick(pointer, &self.config, surface);
        self.frames_this_burst += 1;

        if !self.effects.is_empty() {
            return FrameOutcome::Continue;
        }

        self.state = EngineState::Idle;
        self.events.push(EngineEvent::Deactivated);
        log::info!("burst finished after {} frames", self.frames_this_burst);
        FrameOutcome::Finished
    }

    /// Viewport changed. Takes effect for the next origin and pointer fallback.
    pub fn resize(&mut self, viewport: Vec2) {
        if !viewport.is_finite() || viewport.min_element() < 0.0 {
            log::warn!("ignoring invalid viewport {:?}", viewport);
            return;
        }
        self.viewport = viewport;
    }

    /// Drop every particle and go idle without signalling. For host teardown.
    pub fn clear(&mut self) {
        self.effects.clear();
        self.state = EngineState::Idle;
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == EngineState::Active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.effects.particles
    }

    pub fn particle_count(&self) -> usize {
        self.effects.len()
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn center(&self) -> Vec2 {
        self.viewport * 0.5
    }

    pub fn config(&self) -> &FinaleConfig {
        &self.config
    }

    pub fn pointer_source(&self) -> &P {
        &self.pointer
    }

    /// Missing or non-finite pointer reads fall back to the viewport center.
    fn resolve_pointer(&self) -> Vec2 {
        self.pointer
            .pointer()
            .filter(|p| p.is_finite())
            .unwrap_or_else(|| self.center())
    }
}
