use bytemuck::{Pod, Zeroable};

/// Lifecycle of the particle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// No particles, no frame loop.
    #[default]
    Idle,
    /// At least one burst is still alive.
    Active,
}

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Particles remain; request another animation frame.
    Continue,
    /// Population hit zero (or the engine was idle); stop the loop.
    Finished,
}

/// Signals emitted by the engine for the host page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    /// A burst was appended; `population` is the new particle count.
    Activated { population: u32 },
    /// The last particle died. The host should drop its "active" marker.
    Deactivated,
}

impl EngineEvent {
    pub const KIND_ACTIVATED: f32 = 1.0;
    pub const KIND_DEACTIVATED: f32 = 2.0;
}

/// Flat event record for hosts that read events as raw floats.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FinaleEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl FinaleEvent {
    pub const FLOATS: usize = 4;
}

impl From<EngineEvent> for FinaleEvent {
    fn from(event: EngineEvent) -> Self {
        match event {
            EngineEvent::Activated { population } => FinaleEvent {
                kind: EngineEvent::KIND_ACTIVATED,
                a: population as f32,
                ..FinaleEvent::default()
            },
            EngineEvent::Deactivated => FinaleEvent {
                kind: EngineEvent::KIND_DEACTIVATED,
                ..FinaleEvent::default()
            },
        }
    }
}
