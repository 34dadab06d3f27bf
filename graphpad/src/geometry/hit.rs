//! Hit-testing against the live store.

use super::math::{
    self, Point, CURVE_HIT_TOL, EDGE_HIT_TOL, VERTEX_RADIUS,
};
use crate::model::{Edge, VertexId};
use crate::store::GraphStore;

/// Topmost vertex under the point: reverse insertion order so later-drawn
/// vertices win on overlap.
pub fn vertex_at(store: &GraphStore, p: Point) -> Option<VertexId> {
    store
        .nodes()
        .iter()
        .rev()
        .find(|n| math::distance(p, Point::new(n.x, n.y)) <= VERTEX_RADIUS)
        .map(|n| n.id)
}

/// True when the edge at `index` is one half of a bidirectional pair: it is
/// directed and some other edge runs the opposite way between the same pair.
pub fn is_bidirectional_pair(edges: &[Edge], index: usize) -> bool {
    let edge = &edges[index];
    if !edge.is_directed {
        return false;
    }
    edges
        .iter()
        .enumerate()
        .any(|(i, e)| i != index && e.source == edge.target && e.target == edge.source)
}

/// First edge under the point, in insertion order. Curved halves of a
/// bidirectional pair are tested near the arc midpoint; straight edges by
/// squared distance to the clamped segment.
pub fn edge_at(store: &GraphStore, p: Point) -> Option<usize> {
    let edges = store.edges();
    for (i, edge) in edges.iter().enumerate() {
        let (u, v) = match (store.vertex(edge.source), store.vertex(edge.target)) {
            (Some(u), Some(v)) => (Point::new(u.x, u.y), Point::new(v.x, v.y)),
            _ => continue,
        };
        if is_bidirectional_pair(edges, i) {
            let cp = math::control_point(u, v);
            let mid = math::quad_point(0.5, u, cp, v);
            if math::distance(p, mid) < CURVE_HIT_TOL {
                return Some(i);
            }
        } else {
            let (d2, _) = math::seg_distance_sq(p, u, v);
            if d2 <= EDGE_HIT_TOL * EDGE_HIT_TOL {
                return Some(i);
            }
        }
    }
    None
}
