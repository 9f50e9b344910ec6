use std::cell::RefCell;
use std::rc::Rc;

use finale_engine::{
    EngineEvent, FinaleConfig, FinaleEvent, FrameOutcome, InputEvent, InputQueue,
    ParticleEngine, PointerTracker, Surface,
};
use glam::Vec2;

/// What the page needs from its drawing target beyond plain drawing.
pub trait HostSurface: Surface {
    /// Match the backing store to the viewport.
    fn resize(&mut self, size: Vec2);
    /// Show or hide the "effect running" marker.
    fn set_active(&mut self, active: bool);
}

/// Per-frame pointer output for the cursor and spotlight styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerFrame {
    pub cursor: Vec2,
    pub spotlight: Vec2,
    pub cursor_opacity: f32,
    pub hover_active: bool,
}

type SharedTracker = Rc<RefCell<PointerTracker>>;

/// Wires the particle engine, pointer tracker and surface together.
///
/// The bridge keeps one of these in a `thread_local!` and drives it from two
/// `requestAnimationFrame` loops: the tracker loop runs for the page lifetime,
/// the particle loop only while a burst is alive.
pub struct FinaleRunner<S: HostSurface> {
    engine: ParticleEngine<SharedTracker>,
    tracker: SharedTracker,
    input: InputQueue,
    surface: S,
    /// Flat event records for raw-memory reads from JS. Holds the events of
    /// the most recent `explode` or `frame` call; tracker ticks leave it alone.
    events: Vec<FinaleEvent>,
}

impl<S: HostSurface> FinaleRunner<S> {
    pub fn new(config: FinaleConfig, mut surface: S, viewport: Vec2) -> Self {
        surface.resize(viewport);
        let tracker = Rc::new(RefCell::new(PointerTracker::new(viewport, config.tracker.clone())));
        let engine = ParticleEngine::new(config, Rc::clone(&tracker), viewport);
        Self {
            engine,
            tracker,
            input: InputQueue::new(),
            surface,
            events: Vec::with_capacity(8),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply queued input and advance the pointer followers by one frame.
    pub fn tick_tracker(&mut self, now_ms: f64) -> TrackerFrame {
        for event in self.input.drain() {
            match event {
                InputEvent::PointerMove { x, y, time_ms } => {
                    self.tracker.borrow_mut().pointer_moved(Vec2::new(x, y), time_ms);
                }
                InputEvent::Resize { width, height } => self.resize(Vec2::new(width, height)),
            }
        }

        let mut tracker = self.tracker.borrow_mut();
        tracker.tick(now_ms);
        TrackerFrame {
            cursor: tracker.cursor(),
            spotlight: tracker.spotlight(),
            cursor_opacity: tracker.cursor_opacity(),
            hover_active: tracker.hover_active(now_ms),
        }
    }

    /// Burst from the center of the surface. Returns true when the caller must
    /// start a particle loop (the engine was idle).
    pub fn explode(&mut self) -> bool {
        self.events.clear();
        let start_loop = self.engine.explode_centered();
        self.dispatch_events();
        start_loop
    }

    /// Run one particle frame.
    pub fn frame(&mut self) -> FrameOutcome {
        self.events.clear();
        let outcome = self.engine.frame(&mut self.surface);
        self.dispatch_events();
        outcome
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.surface.resize(viewport);
        self.engine.resize(viewport);
        self.tracker.borrow_mut().resize(viewport);
    }

    pub fn is_active(&self) -> bool {
        self.engine.is_active()
    }

    pub fn particle_count(&self) -> u32 {
        self.engine.particle_count() as u32
    }

    pub fn magnetic_pull(&self) -> f32 {
        self.tracker.borrow().config().magnetic_pull
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    // ---- Event accessors for raw-memory reads ----

    pub fn events(&self) -> &[FinaleEvent] {
        &self.events
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    fn dispatch_events(&mut self) {
        for event in self.engine.drain_events() {
            match event {
                EngineEvent::Activated { .. } => self.surface.set_active(true),
                EngineEvent::Deactivated => self.surface.set_active(false),
            }
            self.events.push(event.into());
        }
    }
}
