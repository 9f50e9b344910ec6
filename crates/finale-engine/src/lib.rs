pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{FinaleConfig, TrackerConfig};
pub use api::error::ConfigError;
pub use api::types::{EngineEvent, EngineState, FinaleEvent, FrameOutcome};
pub use crate::core::engine::ParticleEngine;
pub use input::pointer::{FixedPointer, PointerSource};
pub use input::queue::{InputEvent, InputQueue};
pub use input::tracker::PointerTracker;
pub use renderer::surface::{FillStyle, Surface, SurfaceGuard};
pub use renderer::recording::{DrawCommand, RecordingSurface};
pub use systems::effects::{EffectsState, Particle, ParticleColor, Rgba, Rng};

// Extensions — decoupled optional helpers
pub use extensions::{lerp, lerp_vec2, magnetic_offset, wander_point};
