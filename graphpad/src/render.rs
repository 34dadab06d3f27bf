//! Frame rendering. Stateless per frame: reads the store, the algorithm
//! result, and the animation state, and paints through a `Surface`. Nothing
//! here mutates editor state, and no failure escapes the render boundary.

use std::collections::HashSet;

use crate::animate::Timeline;
use crate::geometry::hit;
use crate::geometry::math::{
    self, Point, VERTEX_RADIUS,
};
use crate::model::{Edge, Vertex, VertexId};
use crate::session::{Algorithm, FlowEdge, Outcome};
use crate::store::GraphStore;
use crate::theme;
use crate::Editor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Middle,
    Bottom,
}

/// Capability object over the host's 2-D drawing surface. Text is always
/// horizontally centered on the anchor point.
pub trait Surface {
    fn clear(&mut self);
    fn stroke_segment(&mut self, a: Point, b: Point, color: &str, width: f32);
    fn stroke_quadratic(&mut self, a: Point, ctrl: Point, b: Point, color: &str, width: f32);
    /// Round-capped polyline; used for growing animation strokes.
    fn stroke_polyline(&mut self, points: &[Point], color: &str, width: f32);
    fn fill_circle(&mut self, center: Point, radius: f32, color: &str);
    fn stroke_circle(&mut self, center: Point, radius: f32, color: &str, width: f32);
    fn fill_polygon(&mut self, points: &[Point], color: &str);
    fn fill_rect(&mut self, origin: Point, w: f32, h: f32, color: &str);
    fn stroke_rect(&mut self, origin: Point, w: f32, h: f32, color: &str, width: f32);
    fn fill_text(&mut self, text: &str, at: Point, font: &str, color: &str, baseline: TextBaseline);
    fn measure_text(&mut self, text: &str, font: &str) -> f32;
}

/// Paint one frame. A fault inside the frame (an overlay referencing a
/// vertex that no longer exists) abandons the frame instead of propagating.
pub fn draw(editor: &Editor, surface: &mut dyn Surface) {
    surface.clear();
    if draw_frame(editor, surface).is_none() {
        log::warn!("frame abandoned: overlay references a missing vertex");
    }
}

fn draw_frame(ed: &Editor, s: &mut dyn Surface) -> Option<()> {
    let store = &ed.store;

    if ed.session.algo == Some(Algorithm::MaxFlow) {
        if let Some(Outcome::MaxFlow { edges, .. }) = ed.session.result.as_ref() {
            draw_flow_overlay(ed, s, edges);
            return Some(());
        }
    }

    for (i, edge) in store.edges().iter().enumerate() {
        // Dangling endpoints cannot survive a correct cascade; skip anyway.
        let Some((u, v)) = endpoints(store, edge) else { continue };
        let curved = hit::is_bidirectional_pair(store.edges(), i);
        draw_edge(s, u, v, edge, curved, theme::EDGE, 2.0, None);
    }

    if ed.session.result.is_some() {
        draw_overlays(ed, s)?;
    }
    draw_vertices(ed, s);
    if let Some(Outcome::Traversal { order, .. }) = ed.session.result.as_ref() {
        draw_visit_badges(ed, s, order);
    }
    draw_agent(ed, s);
    Some(())
}

fn endpoints(store: &GraphStore, edge: &Edge) -> Option<(Point, Point)> {
    let u = store.vertex(edge.source)?;
    let v = store.vertex(edge.target)?;
    Some((Point::new(u.x, u.y), Point::new(v.x, v.y)))
}

fn vertex_point(store: &GraphStore, id: VertexId) -> Option<Point> {
    store.vertex(id).map(|v| Point::new(v.x, v.y))
}

/// Completed/growing strokes for the active result: path segments, the
/// traversal reveal, or the finished spanning tree.
fn draw_overlays(ed: &Editor, s: &mut dyn Surface) -> Option<()> {
    let store = &ed.store;
    let active = ed.anim.is_active();
    match ed.anim.timeline() {
        Some(Timeline::Path(path)) => {
            for i in 0..path.len().saturating_sub(1) {
                let u = vertex_point(store, path[i])?;
                let v = vertex_point(store, path[i + 1])?;
                let Some(ei) = store.edge_between(path[i], path[i + 1]) else { continue };
                let edge = &store.edges()[ei];
                let curved = hit::is_bidirectional_pair(store.edges(), ei);
                if !active || i < ed.anim.segment() {
                    draw_edge(s, u, v, edge, curved, theme::ANIM_EDGE_DONE, 6.0, None);
                } else if i == ed.anim.segment() {
                    draw_growing_edge(
                        s,
                        u,
                        v,
                        curved,
                        theme::ANIM_EDGE_GROWING,
                        6.0,
                        ed.anim.progress(),
                    );
                }
            }
        }
        Some(Timeline::Edges(visits)) => {
            let limit = if active { ed.anim.segment() + 1 } else { visits.len() };
            // Travel direction is inferred: an edge recorded as (u, v) is
            // drawn v -> u when only v was reached before it.
            let mut traversed: HashSet<VertexId> = HashSet::new();
            if let Some(src) = ed.session.source {
                traversed.insert(src);
            }
            for (i, visit) in visits.iter().take(limit).enumerate() {
                let u = vertex_point(store, visit.u)?;
                let v = vertex_point(store, visit.v)?;
                let Some(ei) = store.edge_between(visit.u, visit.v) else { continue };
                let edge = &store.edges()[ei];
                let curved = hit::is_bidirectional_pair(store.edges(), ei);
                let (mut a, mut b) = (u, v);
                if traversed.contains(&visit.v) && !traversed.contains(&visit.u) {
                    std::mem::swap(&mut a, &mut b);
                }
                traversed.insert(visit.u);
                traversed.insert(visit.v);
                if active && i == ed.anim.segment() {
                    draw_growing_edge(
                        s,
                        a,
                        b,
                        curved,
                        theme::ANIM_EDGE_GROWING,
                        6.0,
                        ed.anim.progress(),
                    );
                } else {
                    draw_edge(s, a, b, edge, curved, theme::ANIM_EDGE_DONE, 6.0, None);
                }
            }
        }
        None => {
            if let Some(Outcome::Mst { edges }) = ed.session.result.as_ref() {
                for visit in edges {
                    let u = vertex_point(store, visit.u)?;
                    let v = vertex_point(store, visit.v)?;
                    let Some(ei) = store.edge_between(visit.u, visit.v) else { continue };
                    let edge = &store.edges()[ei];
                    let curved = hit::is_bidirectional_pair(store.edges(), ei);
                    draw_edge(s, u, v, edge, curved, theme::ANIM_EDGE_DONE, 5.0, None);
                }
            }
        }
    }
    Some(())
}

fn draw_vertices(ed: &Editor, s: &mut dyn Surface) {
    for node in ed.store.nodes() {
        let mut color = node.color.unwrap_or(theme::DEFAULT);
        let mut border = theme::BORDER;
        let mut width = 1.0;

        if ed.session.source == Some(node.id) {
            color = theme::SOURCE;
            width = 3.0;
        }
        if ed.session.target == Some(node.id) {
            color = theme::TARGET;
            width = 3.0;
        }
        if ed.interact.pending_source == Some(node.id) {
            border = theme::SELECTED;
            width = 3.0;
        }

        match ed.session.result.as_ref() {
            Some(Outcome::Bipartite { bipartite: true, classes })
                if ed.session.algo == Some(Algorithm::Bipartite) =>
            {
                match classes.get(&node.id) {
                    Some(0) => color = theme::BIPARTITE_A,
                    Some(1) => color = theme::BIPARTITE_B,
                    _ => {}
                }
            }
            Some(_) => {
                // Path vertices light up once the marker has finished.
                if let Some(Timeline::Path(path)) = ed.anim.timeline() {
                    if !ed.anim.is_active() && path.contains(&node.id) {
                        color = theme::NODE_ACTIVE_BG;
                        border = theme::NODE_ACTIVE_BORDER;
                        width = 3.0;
                    }
                }
            }
            None => {}
        }

        draw_vertex_circle(s, node, color, border, width, None);
    }
}

fn draw_vertex_circle(
    s: &mut dyn Surface,
    node: &Vertex,
    color: &str,
    border: &str,
    width: f32,
    label_above: Option<&str>,
) {
    let c = Point::new(node.x, node.y);
    s.fill_circle(c, VERTEX_RADIUS, color);
    s.stroke_circle(c, VERTEX_RADIUS, border, width);
    s.fill_text(&node.label, c, theme::NODE_FONT, theme::TEXT, TextBaseline::Middle);
    if let Some(text) = label_above {
        s.fill_text(
            text,
            Point::new(c.x, c.y - VERTEX_RADIUS - 8.0),
            theme::NODE_FONT,
            color,
            TextBaseline::Bottom,
        );
    }
}

/// Numbered visit-order badges for traversal results, revealed in step with
/// the edge animation.
fn draw_visit_badges(ed: &Editor, s: &mut dyn Surface, order: &[VertexId]) {
    let limit = if ed.anim.is_active() { ed.anim.segment() + 1 } else { order.len() };
    for (index, id) in order.iter().take(limit).enumerate() {
        let Some(node) = ed.store.vertex(*id) else { continue };
        let at = Point::new(
            node.x + VERTEX_RADIUS * 0.8,
            node.y - VERTEX_RADIUS * 0.8,
        );
        s.fill_circle(at, 10.0, theme::BADGE_BG);
        s.stroke_circle(at, 10.0, theme::BADGE_BORDER, 2.0);
        s.fill_text(
            &(index + 1).to_string(),
            at,
            theme::BADGE_FONT,
            theme::BADGE_TEXT,
            TextBaseline::Middle,
        );
    }
}

/// The moving marker of a path animation: a small square spinning once per
/// segment as it travels.
fn draw_agent(ed: &Editor, s: &mut dyn Surface) {
    if !ed.anim.is_active() {
        return;
    }
    let Some(Timeline::Path(path)) = ed.anim.timeline() else { return };
    let idx = ed.anim.segment();
    if idx + 1 >= path.len() {
        return;
    }
    let (Some(u), Some(v)) = (
        vertex_point(&ed.store, path[idx]),
        vertex_point(&ed.store, path[idx + 1]),
    ) else {
        return;
    };
    let progress = ed.anim.progress();
    let pos = math::lerp(u, v, progress);
    let corners = math::rotated_square(pos, 16.0, progress * std::f32::consts::TAU);
    s.fill_polygon(&corners, theme::ANIM_AGENT);
}

/// Dedicated max-flow view: every edge labeled `flow / capacity`, saturated
/// edges emphasized, source/sink captioned.
fn draw_flow_overlay(ed: &Editor, s: &mut dyn Surface, flows: &[FlowEdge]) {
    let store = &ed.store;
    for (i, edge) in store.edges().iter().enumerate() {
        let Some((u, v)) = endpoints(store, edge) else { continue };
        let flow = flows
            .iter()
            .find(|f| f.u == edge.source && f.v == edge.target)
            .map_or(0, |f| f.flow);
        let (color, width) = if flow > 0 {
            (theme::FLOW_EDGE, 4.0)
        } else {
            (theme::EMPTY_EDGE, 2.0)
        };
        let label = format!("{} / {}", flow, edge.weight);
        let curved = hit::is_bidirectional_pair(store.edges(), i);
        draw_edge(s, u, v, edge, curved, color, width, Some(&label));
    }
    for node in store.nodes() {
        let (color, border, caption) = if ed.session.source == Some(node.id) {
            (theme::SOURCE, theme::SOURCE_BORDER, Some("Source"))
        } else if ed.session.target == Some(node.id) {
            (theme::TARGET, theme::TARGET_BORDER, Some("Sink"))
        } else {
            (theme::DEFAULT, theme::BORDER, None)
        };
        draw_vertex_circle(s, node, color, border, 2.0, caption);
    }
}

/// Draw one edge: a quadratic arc for bidirectional pairs, a radius-trimmed
/// segment otherwise, with arrowhead and weight/flow label.
fn draw_edge(
    s: &mut dyn Surface,
    u: Point,
    v: Point,
    edge: &Edge,
    curved: bool,
    color: &str,
    width: f32,
    flow_label: Option<&str>,
) {
    if curved {
        let cp = math::control_point(u, v);
        s.stroke_quadratic(u, cp, v, color, width);
        if edge.is_directed {
            let angle = math::angle_of(cp, v);
            let tip = math::offset_along(v, angle, -VERTEX_RADIUS);
            s.fill_polygon(&math::arrow_head(tip, angle, width), color);
        }
        let at = math::quad_point(0.5, u, cp, v);
        draw_edge_label(s, at, edge, flow_label);
    } else {
        let angle = math::angle_of(u, v);
        let start = math::offset_along(u, angle, VERTEX_RADIUS);
        let end = math::offset_along(v, angle, -VERTEX_RADIUS);
        s.stroke_segment(start, end, color, width);
        if edge.is_directed {
            s.fill_polygon(&math::arrow_head(end, angle, width), color);
        }
        draw_edge_label(s, math::lerp(u, v, 0.5), edge, flow_label);
    }
}

fn draw_edge_label(s: &mut dyn Surface, at: Point, edge: &Edge, flow_label: Option<&str>) {
    match flow_label {
        Some(text) => draw_label_box(s, at, text, true),
        None if edge.show_weight => {
            draw_label_box(s, at, &edge.weight.to_string(), false);
        }
        None => {}
    }
}

fn draw_label_box(s: &mut dyn Surface, at: Point, text: &str, flow: bool) {
    let w = s.measure_text(text, theme::WEIGHT_FONT) + 10.0;
    let h = 20.0;
    let origin = Point::new(at.x - w / 2.0, at.y - h / 2.0);
    let (bg, border, fg, border_width) = if flow {
        (theme::FLOW_BG, theme::FLOW_TEXT, theme::FLOW_TEXT, 2.0)
    } else {
        (theme::LABEL_BG, theme::LABEL_BORDER, theme::LABEL_TEXT, 1.0)
    };
    s.fill_rect(origin, w, h, bg);
    s.stroke_rect(origin, w, h, border, border_width);
    s.fill_text(text, at, theme::WEIGHT_FONT, fg, TextBaseline::Middle);
}

fn draw_growing_edge(
    s: &mut dyn Surface,
    a: Point,
    b: Point,
    curved: bool,
    color: &str,
    width: f32,
    progress: f32,
) {
    if curved {
        let cp = math::control_point(a, b);
        let mut points = vec![a];
        let mut t = 0.0;
        while t <= progress {
            points.push(math::quad_point(t, a, cp, b));
            t += 0.02;
        }
        s.stroke_polyline(&points, color, width);
    } else {
        s.stroke_polyline(&[a, math::lerp(a, b, progress)], color, width);
    }
}
