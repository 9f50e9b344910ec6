//! In-memory surface that records draw calls.
//! Used by tests and headless hosts that want to inspect a frame.

use glam::Vec2;

use super::surface::{FillStyle, Surface};
use crate::systems::effects::Rgba;

/// A single recorded draw call, with the draw state in effect at the time.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { x: f32, y: f32, w: f32, h: f32, fill: FillStyle, alpha: f32 },
    Circle { center: Vec2, radius: f32, fill: FillStyle, alpha: f32 },
}

#[derive(Debug, Clone, Copy)]
struct DrawState {
    alpha: f32,
    fill: FillStyle,
}

impl Default for DrawState {
    fn default() -> Self {
        // Canvas 2D defaults: opaque black.
        Self { alpha: 1.0, fill: FillStyle::Rgba(Rgba::new(0, 0, 0, 1.0)) }
    }
}

/// Records every draw call; tracks the save/restore stack like a canvas would.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    state: DrawState,
    stack: Vec<DrawState>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            state: DrawState::default(),
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands (call between frames).
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current save/restore nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn global_alpha(&self) -> f32 {
        self.state.alpha
    }

    pub fn fill_style(&self) -> FillStyle {
        self.state.fill
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        // Unbalanced restore is ignored, same as Canvas 2D.
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha;
    }

    fn set_fill_style(&mut self, style: FillStyle) {
        self.state.fill = style;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            fill: self.state.fill,
            alpha: self.state.alpha,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: self.state.fill,
            alpha: self.state.alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::SurfaceGuard;

    #[test]
    fn guard_restores_state_on_drop() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        {
            let mut guard = SurfaceGuard::new(&mut surface);
            guard.set_global_alpha(0.25);
            guard.fill_circle(Vec2::ZERO, 2.0);
            assert_eq!(guard.depth(), 1);
        }
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.global_alpha(), 1.0);
        match &surface.commands()[0] {
            DrawCommand::Circle { alpha, .. } => assert_eq!(*alpha, 0.25),
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.set_global_alpha(0.5);
        surface.restore();
        assert_eq!(surface.global_alpha(), 0.5);
    }
}
