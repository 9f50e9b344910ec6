pub mod pointer;
pub mod queue;
pub mod tracker;

pub use pointer::{FixedPointer, PointerSource};
pub use queue::{InputEvent, InputQueue};
pub use tracker::PointerTracker;
