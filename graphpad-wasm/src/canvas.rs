use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use graphpad::geometry::math::Point;
use graphpad::render::{Surface, TextBaseline};

/// `Surface` over an HTML canvas 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasSurface, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn set_stroke(&self, color: &str, width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_segment(&mut self, a: Point, b: Point, color: &str, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.set_stroke(color, width);
        self.ctx.stroke();
    }

    fn stroke_quadratic(&mut self, a: Point, ctrl: Point, b: Point, color: &str, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx
            .quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, b.x as f64, b.y as f64);
        self.set_stroke(color, width);
        self.ctx.stroke();
    }

    fn stroke_polyline(&mut self, points: &[Point], color: &str, width: f32) {
        if points.len() < 2 {
            return;
        }
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x as f64, points[0].y as f64);
        for p in &points[1..] {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.set_stroke(color, width);
        self.ctx.set_line_cap("round");
        self.ctx.stroke();
        self.ctx.set_line_cap("butt");
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: &str, width: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.set_stroke(color, width);
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, points: &[Point], color: &str) {
        if points.is_empty() {
            return;
        }
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x as f64, points[0].y as f64);
        for p in &points[1..] {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn fill_rect(&mut self, origin: Point, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, w as f64, h as f64);
    }

    fn stroke_rect(&mut self, origin: Point, w: f32, h: f32, color: &str, width: f32) {
        self.set_stroke(color, width);
        self.ctx
            .stroke_rect(origin.x as f64, origin.y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, at: Point, font: &str, color: &str, baseline: TextBaseline) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline(match baseline {
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "bottom",
        });
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }

    fn measure_text(&mut self, text: &str, font: &str) -> f32 {
        self.ctx.set_font(font);
        self.ctx
            .measure_text(text)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }
}
