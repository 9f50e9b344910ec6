// extensions/mod.rs
//
// Optional helpers for the page effects around the particle engine.
// Decoupled from the engine itself: hosts opt in.

pub mod motion;

pub use motion::{lerp, lerp_vec2, magnetic_offset, wander_point};
