#![allow(dead_code)]

use graphpad::geometry::math::Point;
use graphpad::model::{Effect, Mode, Notice};
use graphpad::render::{Surface, TextBaseline};
use graphpad::session::ComputeRequest;
use graphpad::Editor;

/// Editor with vertices at the given positions, created through the
/// add-vertex gesture so labels and history behave as in real use.
pub fn editor_with_vertices(positions: &[(f32, f32)]) -> Editor {
    let mut ed = Editor::new();
    ed.set_mode(Mode::AddVertex);
    for &(x, y) in positions {
        ed.pointer_down(x, y);
    }
    ed
}

/// Connect two vertices by clicking their centers in add-edge mode.
pub fn connect(ed: &mut Editor, a: (f32, f32), b: (f32, f32)) {
    ed.set_mode(Mode::AddEdge);
    ed.pointer_down(a.0, a.1);
    ed.pointer_down(b.0, b.1);
}

/// Three vertices at (0,0), (100,0), (50,100) with edges 0-1 and 1-2.
pub fn triangle_editor() -> Editor {
    let mut ed = editor_with_vertices(&[(0.0, 0.0), (100.0, 0.0), (50.0, 100.0)]);
    connect(&mut ed, (0.0, 0.0), (100.0, 0.0));
    connect(&mut ed, (100.0, 0.0), (50.0, 100.0));
    ed
}

pub fn notices(effects: &[Effect]) -> Vec<&Notice> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Notify(n) => Some(n),
            _ => None,
        })
        .collect()
}

pub fn compute_request(effects: &[Effect]) -> Option<&ComputeRequest> {
    effects.iter().find_map(|e| match e {
        Effect::Compute(req) => Some(req),
        _ => None,
    })
}

/// Recording implementation of the drawing surface for frame assertions.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Segment { color: String, width: f32 },
    Quadratic { color: String, width: f32 },
    Polyline { color: String, width: f32, points: usize },
    FillCircle { at: Point, radius: f32, color: String },
    StrokeCircle { at: Point, radius: f32, color: String, width: f32 },
    Polygon { color: String },
    FillRect { color: String },
    StrokeRect { color: String },
    Text { text: String, color: String },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new() -> RecordingSurface {
        RecordingSurface::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn fill_colors(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillCircle { color, .. } => Some(color.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn stroke_segment(&mut self, _a: Point, _b: Point, color: &str, width: f32) {
        self.ops.push(Op::Segment { color: color.into(), width });
    }

    fn stroke_quadratic(&mut self, _a: Point, _ctrl: Point, _b: Point, color: &str, width: f32) {
        self.ops.push(Op::Quadratic { color: color.into(), width });
    }

    fn stroke_polyline(&mut self, points: &[Point], color: &str, width: f32) {
        self.ops.push(Op::Polyline {
            color: color.into(),
            width,
            points: points.len(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: &str) {
        self.ops.push(Op::FillCircle {
            at: center,
            radius,
            color: color.into(),
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: &str, width: f32) {
        self.ops.push(Op::StrokeCircle {
            at: center,
            radius,
            color: color.into(),
            width,
        });
    }

    fn fill_polygon(&mut self, _points: &[Point], color: &str) {
        self.ops.push(Op::Polygon { color: color.into() });
    }

    fn fill_rect(&mut self, _origin: Point, _w: f32, _h: f32, color: &str) {
        self.ops.push(Op::FillRect { color: color.into() });
    }

    fn stroke_rect(&mut self, _origin: Point, _w: f32, _h: f32, color: &str, _width: f32) {
        self.ops.push(Op::StrokeRect { color: color.into() });
    }

    fn fill_text(
        &mut self,
        text: &str,
        _at: Point,
        _font: &str,
        color: &str,
        _baseline: TextBaseline,
    ) {
        self.ops.push(Op::Text {
            text: text.into(),
            color: color.into(),
        });
    }

    fn measure_text(&mut self, text: &str, _font: &str) -> f32 {
        text.len() as f32 * 7.0
    }
}
