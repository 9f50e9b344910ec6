pub mod surface;
pub mod recording;

pub use surface::{FillStyle, Surface, SurfaceGuard};
pub use recording::{DrawCommand, RecordingSurface};
