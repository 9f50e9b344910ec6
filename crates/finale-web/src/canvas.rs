//! Canvas 2D implementation of the engine's `Surface`.

use finale_engine::{FillStyle, Surface};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SetupError;
use crate::runner::HostSurface;

/// CSS class toggled on the canvas while a burst is alive.
pub const ACTIVE_CLASS: &str = "active";

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `canvas_id` and grab its 2d context.
    pub fn acquire(canvas_id: &str) -> Result<Self, SetupError> {
        let document = web_sys::window()
            .ok_or(SetupError::NoWindow)?
            .document()
            .ok_or(SetupError::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SetupError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SetupError::NotACanvas(canvas_id.to_string()))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(SetupError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_fill_style(&mut self, style: FillStyle) {
        self.ctx.set_fill_style_str(&style.to_css());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        if let Err(err) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc rejected: {:?}", err);
            return;
        }
        self.ctx.fill();
    }
}

impl HostSurface for CanvasSurface {
    fn resize(&mut self, size: Vec2) {
        self.canvas.set_width(size.x.max(0.0) as u32);
        self.canvas.set_height(size.y.max(0.0) as u32);
    }

    fn set_active(&mut self, active: bool) {
        let classes = self.canvas.class_list();
        let result = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if let Err(err) = result {
            log::warn!("could not toggle `{}` class: {:?}", ACTIVE_CLASS, err);
        }
    }
}
