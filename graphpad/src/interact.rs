//! Pointer-driven interaction: interprets pointer events against the
//! current mode, mutating the store and history.

use crate::geometry::hit;
use crate::geometry::math::Point;
use crate::model::{Effect, Mode, Notice, VertexId};
use crate::Editor;

/// Mutable interaction state: active mode, live drag, pending edge source,
/// and the endpoints parked while the weight prompt is open.
#[derive(Debug, Default)]
pub struct InteractionState {
    pub(crate) mode: Mode,
    pub(crate) drag: Option<VertexId>,
    pub(crate) pending_source: Option<VertexId>,
    pub(crate) pending_weight: Option<(VertexId, VertexId)>,
}

impl InteractionState {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn dragging(&self) -> Option<VertexId> {
        self.drag
    }

    pub fn pending_source(&self) -> Option<VertexId> {
        self.pending_source
    }

    pub fn pending_weight(&self) -> Option<(VertexId, VertexId)> {
        self.pending_weight
    }
}

impl Editor {
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Vec<Effect> {
        let p = Point::new(x, y);
        let hit_vertex = hit::vertex_at(&self.store, p);

        if self.interact.mode == Mode::AlgoInput {
            return match hit_vertex {
                Some(id) => self.algo_vertex_click(id),
                None => Vec::new(),
            };
        }
        self.anim.stop();

        match self.interact.mode {
            Mode::AddVertex => {
                // Clicking an existing vertex is a no-op; no stacked vertices.
                if hit_vertex.is_some() {
                    return vec![Effect::Redraw];
                }
                self.record_history();
                let label = self.naming.label(self.store.next_id());
                self.store.add_vertex(x, y, label);
                self.invalidate_results();
                vec![Effect::Redraw]
            }
            Mode::Move => {
                self.interact.drag = hit_vertex;
                vec![Effect::Redraw]
            }
            Mode::AddEdge => self.edge_click(hit_vertex),
            Mode::Remove => {
                if let Some(id) = hit_vertex {
                    self.record_history();
                    self.store.remove_vertex(id);
                    self.invalidate_results();
                    vec![Effect::Redraw]
                } else if let Some(index) = hit::edge_at(&self.store, p) {
                    self.record_history();
                    self.store.remove_edge_at(index);
                    self.invalidate_results();
                    vec![Effect::Redraw]
                } else {
                    vec![Effect::Redraw]
                }
            }
            Mode::AlgoInput => unreachable!("handled above"),
        }
    }

    /// Live drag: positions are not discrete edits, so no snapshot.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Vec<Effect> {
        if self.interact.mode == Mode::Move {
            if let Some(id) = self.interact.drag {
                self.store.move_vertex(id, x, y);
                return vec![Effect::Redraw];
            }
        }
        Vec::new()
    }

    pub fn pointer_up(&mut self) -> Vec<Effect> {
        self.interact.drag = None;
        Vec::new()
    }

    fn edge_click(&mut self, hit_vertex: Option<VertexId>) -> Vec<Effect> {
        let Some(id) = hit_vertex else {
            // Empty space deselects without touching the graph.
            self.interact.pending_source = None;
            return vec![Effect::Redraw];
        };
        match self.interact.pending_source {
            None => {
                self.interact.pending_source = Some(id);
                let label = self.label(id);
                vec![
                    Effect::Notify(Notice::info(format!(
                        "Source: {}. Select Target.",
                        label
                    ))),
                    Effect::Redraw,
                ]
            }
            Some(source) if source != id => {
                if self.weighted_input {
                    self.interact.pending_weight = Some((source, id));
                    vec![Effect::PromptWeight { source, target: id }]
                } else {
                    self.record_history();
                    self.store.add_edge(source, id, 1, false);
                    self.invalidate_results();
                    self.interact.pending_source = None;
                    vec![
                        Effect::Notify(Notice::success("Edge created. Select new Source.")),
                        Effect::Redraw,
                    ]
                }
            }
            Some(_) => {
                // Second click on the same vertex deselects it.
                self.interact.pending_source = None;
                vec![
                    Effect::Notify(Notice::info("Select Source Vertex.")),
                    Effect::Redraw,
                ]
            }
        }
    }

    /// Confirm the weight prompt: the snapshot and the insert happen here,
    /// not when the prompt opened.
    pub fn confirm_weight(&mut self, weight: u32) -> Vec<Effect> {
        let Some((source, target)) = self.interact.pending_weight.take() else {
            return Vec::new();
        };
        if self.store.vertex(source).is_none() || self.store.vertex(target).is_none() {
            self.interact.pending_source = None;
            return vec![Effect::Redraw];
        }
        self.record_history();
        self.store.add_edge(source, target, weight.max(1), true);
        self.invalidate_results();
        self.interact.pending_source = None;
        vec![
            Effect::Notify(Notice::success("Edge created. Select new Source.")),
            Effect::Redraw,
        ]
    }

    /// Dismiss the weight prompt without mutating anything.
    pub fn cancel_weight(&mut self) -> Vec<Effect> {
        self.interact.pending_weight = None;
        self.interact.pending_source = None;
        vec![Effect::Redraw]
    }

    fn label(&self, id: VertexId) -> String {
        self.store
            .vertex(id)
            .map(|v| v.label.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
