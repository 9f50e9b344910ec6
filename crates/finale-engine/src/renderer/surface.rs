//! Drawing surface contract.
//!
//! The engine never talks to a canvas directly. Hosts implement [`Surface`]
//! (the web bridge wraps `CanvasRenderingContext2d`; tests use
//! [`RecordingSurface`](super::recording::RecordingSurface)).

use std::ops::{Deref, DerefMut};

use glam::Vec2;

use crate::systems::effects::{ParticleColor, Rgba};

/// Fill style accepted by a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillStyle {
    Hsl(ParticleColor),
    Rgba(Rgba),
}

impl FillStyle {
    pub fn to_css(&self) -> String {
        match self {
            FillStyle::Hsl(c) => c.to_css(),
            FillStyle::Rgba(c) => c.to_css(),
        }
    }
}

/// Immediate-mode 2D drawing target with a save/restore state stack.
pub trait Surface {
    /// Current surface width in pixels.
    fn width(&self) -> f32;
    /// Current surface height in pixels.
    fn height(&self) -> f32;

    /// Push the current draw state (alpha, fill style).
    fn save(&mut self);
    /// Pop the draw state pushed by the matching `save`.
    fn restore(&mut self);

    fn set_global_alpha(&mut self, alpha: f32);
    fn set_fill_style(&mut self, style: FillStyle);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);

    fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }
}

/// Scoped draw state: `save` on creation, `restore` on drop.
pub struct SurfaceGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SurfaceGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
