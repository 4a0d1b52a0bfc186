//! Canvas 2D drawing surface

use std::f64::consts::TAU;

use game_core::Surface;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::ClientError;

/// Create a detached canvas of the given size and grab its 2D context
pub fn create_canvas(
    document: &Document,
    width: u32,
    height: u32,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), ClientError> {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| ClientError::Js("`canvas` element is not an HtmlCanvasElement".to_string()))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context = canvas
        .get_context("2d")?
        .ok_or(ClientError::NoCanvasContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ClientError::NoCanvasContext)?;

    Ok((canvas, context))
}

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.context.set_fill_style_str(color);
        self.context
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &str, stroke: &str) {
        self.context.begin_path();
        if let Err(err) =
            self.context
                .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("Failed to trace circle at {center} r {radius}: {err:?}");
            return;
        }
        self.context.set_fill_style_str(fill);
        self.context.fill();
        self.context.set_stroke_style_str(stroke);
        self.context.stroke();
    }
}
