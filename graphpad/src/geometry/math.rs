//! Pure geometry over vertex positions: edge paths, control points, arrow
//! placement. No store access, no state.

pub const VERTEX_RADIUS: f32 = 20.0;
/// Normal offset separating the two arcs of a bidirectional pair.
pub const CURVE_OFFSET: f32 = 35.0;
pub const EDGE_HIT_TOL: f32 = 8.0;
pub const CURVE_HIT_TOL: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

pub fn distance(a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Squared distance from `p` to segment `a`-`b`, with the clamped parameter.
pub fn seg_distance_sq(p: Point, a: Point, b: Point) -> (f32, f32) {
    let vx = b.x - a.x;
    let vy = b.y - a.y;
    let wx = p.x - a.x;
    let wy = p.y - a.y;
    let vv = vx * vx + vy * vy;
    let mut t = if vv > 0.0 { (wx * vx + wy * vy) / vv } else { 0.0 };
    if t < 0.0 {
        t = 0.0;
    } else if t > 1.0 {
        t = 1.0;
    }
    let dx = p.x - (a.x + t * vx);
    let dy = p.y - (a.y + t * vy);
    (dx * dx + dy * dy, t)
}

pub fn lerp(a: Point, b: Point, t: f32) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Quadratic Bezier point for endpoints `a`, `b` and control point `c`.
pub fn quad_point(t: f32, a: Point, c: Point, b: Point) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * a.x + 2.0 * u * t * c.x + t * t * b.x,
        u * u * a.y + 2.0 * u * t * c.y + t * t * b.y,
    )
}

/// Control point for the curved arc of a bidirectional pair: the segment
/// midpoint pushed along the unit normal of `u -> v`.
pub fn control_point(u: Point, v: Point) -> Point {
    let mid = lerp(u, v, 0.5);
    let d = distance(u, v);
    if d <= f32::EPSILON {
        return mid;
    }
    let nx = -(v.y - u.y) / d;
    let ny = (v.x - u.x) / d;
    Point::new(mid.x + nx * CURVE_OFFSET, mid.y + ny * CURVE_OFFSET)
}

pub fn angle_of(from: Point, to: Point) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Walk `dist` from `p` along `angle`.
pub fn offset_along(p: Point, angle: f32, dist: f32) -> Point {
    Point::new(p.x + dist * angle.cos(), p.y + dist * angle.sin())
}

/// Filled triangle for an arrowhead whose tip sits at `tip`, pointing along
/// `angle`. Head length grows slightly with stroke width.
pub fn arrow_head(tip: Point, angle: f32, width: f32) -> [Point; 3] {
    let len = 12.0 + width * 0.5;
    let spread = std::f32::consts::PI / 6.0;
    [
        tip,
        Point::new(
            tip.x - len * (angle - spread).cos(),
            tip.y - len * (angle - spread).sin(),
        ),
        Point::new(
            tip.x - len * (angle + spread).cos(),
            tip.y - len * (angle + spread).sin(),
        ),
    ]
}

/// Corners of a square of side `size` centered at `c`, rotated by `angle`.
pub fn rotated_square(c: Point, size: f32, angle: f32) -> [Point; 4] {
    let h = size / 2.0;
    let (sin, cos) = angle.sin_cos();
    let rot = |x: f32, y: f32| Point::new(c.x + x * cos - y * sin, c.y + x * sin + y * cos);
    [rot(-h, -h), rot(h, -h), rot(h, h), rot(-h, h)]
}
