use crate::model::{Edge, GraphSnapshot, Vertex, VertexId};

/// Canonical node/edge collections plus identity allocation. Insertion order
/// is meaningful: rendering walks edges front-to-back and hit-testing walks
/// vertices back-to-front so later-drawn vertices win on overlap.
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: Vec<Vertex>,
    edges: Vec<Edge>,
    next_id: VertexId,
    directed: bool,
}

impl GraphStore {
    pub fn new() -> GraphStore {
        GraphStore::default()
    }

    pub fn nodes(&self) -> &[Vertex] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn next_id(&self) -> VertexId {
        self.next_id
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn add_vertex(&mut self, x: f32, y: f32, label: String) -> VertexId {
        let id = self.next_id;
        self.nodes.push(Vertex { id, x, y, label, color: None });
        self.next_id += 1;
        id
    }

    pub fn move_vertex(&mut self, id: VertexId, x: f32, y: f32) -> bool {
        match self.vertex_mut(id) {
            Some(v) => {
                v.x = x;
                v.y = y;
                true
            }
            None => false,
        }
    }

    /// Whether an existing edge on the same unordered pair survives an
    /// insert of `u -> v`. Only an opposite-direction directed edge does,
    /// and only while the global flag is directed (bidirectional pair).
    fn survives_insert(directed_now: bool, existing: &Edge, u: VertexId, v: VertexId) -> bool {
        directed_now && existing.is_directed && existing.source == v && existing.target == u
    }

    /// Insert an edge, applying the replace-on-duplicate policy: any prior
    /// edge connecting the same unordered pair is removed first unless it
    /// forms a bidirectional pair with the new one.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: u32, show_weight: bool) -> bool {
        if u == v || self.vertex(u).is_none() || self.vertex(v).is_none() {
            return false;
        }
        let directed = self.directed;
        self.edges
            .retain(|e| !e.connects(u, v) || Self::survives_insert(directed, e, u, v));
        self.edges.push(Edge {
            source: u,
            target: v,
            weight: weight.max(1),
            is_directed: directed,
            show_weight,
        });
        true
    }

    /// Delete the vertex and cascade to every incident edge.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        true
    }

    pub fn remove_edge_at(&mut self, index: usize) -> bool {
        if index < self.edges.len() {
            self.edges.remove(index);
            true
        } else {
            false
        }
    }

    /// First edge connecting `u` and `v` in either direction (the edge an
    /// algorithm overlay is drawn over).
    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(u, v))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.next_id = 0;
    }

    pub fn reset_color_overrides(&mut self) {
        for n in &mut self.nodes {
            n.color = None;
        }
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            next_id: self.next_id,
            directed: self.directed,
        }
    }

    pub fn restore(&mut self, snap: GraphSnapshot) {
        self.nodes = snap.nodes;
        self.edges = snap.edges;
        self.next_id = snap.next_id;
        self.directed = snap.directed;
    }
}
