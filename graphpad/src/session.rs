//! Broker between the editor and the external compute service: request
//! payloads, endpoint routing, session-id tagging, and translation of
//! responses into overlays, animations, and notifications.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::animate::{EdgeVisit, Timeline};
use crate::model::{Edge, Effect, Notice, Vertex, VertexId};
use crate::store::GraphStore;
use crate::Editor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
    Kruskal,
    Fleury,
    Hierholzer,
    MaxFlow,
    Bipartite,
}

/// Which vertex input an algorithm needs before it can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputShape {
    /// A single start vertex (traversal family).
    StartOnly,
    /// A source plus a target/sink.
    SourceSink,
    /// No vertex input; fires on selection.
    Immediate,
}

impl Algorithm {
    pub fn parse(s: &str) -> Option<Algorithm> {
        Some(match s {
            "bfs" => Algorithm::Bfs,
            "dfs" => Algorithm::Dfs,
            "dijkstra" => Algorithm::Dijkstra,
            "prim" => Algorithm::Prim,
            "kruskal" => Algorithm::Kruskal,
            "fleury" => Algorithm::Fleury,
            "hierholzer" => Algorithm::Hierholzer,
            "max_flow" => Algorithm::MaxFlow,
            "bipartite" => Algorithm::Bipartite,
            _ => return None,
        })
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Fleury => "fleury",
            Algorithm::Hierholzer => "hierholzer",
            Algorithm::MaxFlow => "max_flow",
            Algorithm::Bipartite => "bipartite",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Prim => "Prim MST",
            Algorithm::Kruskal => "Kruskal MST",
            Algorithm::Fleury => "Fleury",
            Algorithm::Hierholzer => "Hierholzer",
            Algorithm::MaxFlow => "Max Flow",
            Algorithm::Bipartite => "Bipartite",
        }
    }

    /// MST and Euler variants share grouped endpoints; the rest post to
    /// their own route.
    pub fn endpoint(self) -> &'static str {
        match self {
            Algorithm::Prim | Algorithm::Kruskal => "/api/mst",
            Algorithm::Fleury | Algorithm::Hierholzer => "/api/euler",
            Algorithm::Bfs => "/api/bfs",
            Algorithm::Dfs => "/api/dfs",
            Algorithm::Dijkstra => "/api/dijkstra",
            Algorithm::MaxFlow => "/api/max_flow",
            Algorithm::Bipartite => "/api/bipartite",
        }
    }

    pub fn input(self) -> InputShape {
        match self {
            Algorithm::Bfs
            | Algorithm::Dfs
            | Algorithm::Prim
            | Algorithm::Fleury
            | Algorithm::Hierholzer => InputShape::StartOnly,
            Algorithm::Dijkstra | Algorithm::MaxFlow => InputShape::SourceSink,
            Algorithm::Kruskal | Algorithm::Bipartite => InputShape::Immediate,
        }
    }
}

/// Textual graph representation produced by the conversion endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReprMode {
    Matrix,
    AdjList,
    EdgeList,
}

impl ReprMode {
    pub fn parse(s: &str) -> Option<ReprMode> {
        Some(match s {
            "matrix" => ReprMode::Matrix,
            "adj_list" => ReprMode::AdjList,
            "edge_list" => ReprMode::EdgeList,
            _ => return None,
        })
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            ReprMode::Matrix => "matrix",
            ReprMode::AdjList => "adj_list",
            ReprMode::EdgeList => "edge_list",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowEdge {
    pub u: VertexId,
    pub v: VertexId,
    pub flow: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EulerKind {
    Path,
    Circuit,
}

/// Decoded compute result, one variant per algorithm family. The engine
/// routes these to the right overlay/animation without interpreting their
/// graph-theoretic meaning.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Traversal { order: Vec<VertexId>, visited: Vec<EdgeVisit> },
    ShortestPath { path: Vec<VertexId>, distance: f64 },
    Mst { edges: Vec<EdgeVisit> },
    MaxFlow { total: i64, edges: Vec<FlowEdge> },
    Bipartite { bipartite: bool, classes: HashMap<VertexId, u8> },
    Euler { path: Vec<VertexId>, kind: EulerKind },
}

/// An outgoing request: the host adapter POSTs `body` to `endpoint` and
/// feeds the reply back through `Editor::apply_response` with the same
/// session id.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputeRequest {
    pub session: u64,
    pub endpoint: &'static str,
    pub body: Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PendingKind {
    Algo(Algorithm),
    Convert,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Pending {
    pub id: u64,
    pub kind: PendingKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Idle,
    AwaitStart,
    AwaitTarget,
}

/// Per-editor algorithm state: the chosen algorithm, its vertex inputs, the
/// last result, and the single in-flight request.
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) algo: Option<Algorithm>,
    pub(crate) source: Option<VertexId>,
    pub(crate) target: Option<VertexId>,
    pub(crate) step: Step,
    pub(crate) result: Option<Outcome>,
    pub(crate) pending: Option<Pending>,
    counter: u64,
}

impl Session {
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algo
    }

    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    pub fn target(&self) -> Option<VertexId> {
        self.target
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn result(&self) -> Option<&Outcome> {
        self.result.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn issue(&mut self, kind: PendingKind) -> u64 {
        self.counter += 1;
        self.pending = Some(Pending { id: self.counter, kind });
        self.counter
    }

    /// Drop the result and any in-flight request; a response that still
    /// arrives carries a superseded id and is discarded.
    pub(crate) fn invalidate(&mut self) {
        self.result = None;
        self.pending = None;
    }

    /// Clear vertex inputs alongside the result (history restore: the ids
    /// may no longer exist).
    pub(crate) fn clear_selection(&mut self) {
        self.source = None;
        self.target = None;
        self.result = None;
        self.step = Step::Idle;
        self.pending = None;
    }

    /// Full reset when the editor leaves algorithm mode.
    pub(crate) fn cancel(&mut self) {
        self.algo = None;
        self.clear_selection();
    }
}

// --- wire shapes -----------------------------------------------------------

#[derive(Serialize)]
struct WireGraph<'a> {
    nodes: &'a [Vertex],
    edges: &'a [Edge],
    directed: bool,
}

impl<'a> WireGraph<'a> {
    fn of(store: &'a GraphStore) -> WireGraph<'a> {
        WireGraph {
            nodes: store.nodes(),
            edges: store.edges(),
            directed: store.directed(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AlgoPayload<'a> {
    graph: WireGraph<'a>,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_id: Option<VertexId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_id: Option<VertexId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_id: Option<VertexId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sink_id: Option<VertexId>,
}

#[derive(Serialize)]
struct ConvertPayload<'a> {
    mode: &'static str,
    graph: WireGraph<'a>,
}

#[derive(Deserialize)]
struct TraversalWire {
    #[serde(default)]
    path: Vec<VertexId>,
    #[serde(default)]
    visited_edges: Vec<EdgeVisit>,
}

#[derive(Deserialize)]
struct DijkstraWire {
    path: Vec<VertexId>,
    #[serde(default)]
    distance: f64,
}

#[derive(Deserialize)]
struct MstWire {
    mst_edges: Vec<EdgeVisit>,
}

#[derive(Deserialize)]
struct FlowEdgeWire {
    u: VertexId,
    v: VertexId,
    flow: i64,
}

#[derive(Deserialize)]
struct FlowWire {
    max_flow: i64,
    flow_edges: Vec<FlowEdgeWire>,
}

#[derive(Deserialize)]
struct BipartiteWire {
    is_bipartite: bool,
    // JSON object keys are strings even though the ids are numeric.
    #[serde(default)]
    colors: HashMap<String, u8>,
}

#[derive(Deserialize)]
struct EulerWire {
    path: Vec<VertexId>,
    #[serde(default)]
    euler_type: Option<String>,
}

#[derive(Deserialize)]
struct ConvertWire {
    text: String,
}

fn parse_outcome(algo: Algorithm, body: &Value) -> Result<Outcome, serde_json::Error> {
    let body = body.clone();
    Ok(match algo {
        Algorithm::Bfs | Algorithm::Dfs => {
            let w: TraversalWire = serde_json::from_value(body)?;
            Outcome::Traversal { order: w.path, visited: w.visited_edges }
        }
        Algorithm::Dijkstra => {
            let w: DijkstraWire = serde_json::from_value(body)?;
            Outcome::ShortestPath { path: w.path, distance: w.distance }
        }
        Algorithm::Prim | Algorithm::Kruskal => {
            let w: MstWire = serde_json::from_value(body)?;
            Outcome::Mst { edges: w.mst_edges }
        }
        Algorithm::MaxFlow => {
            let w: FlowWire = serde_json::from_value(body)?;
            Outcome::MaxFlow {
                total: w.max_flow,
                edges: w
                    .flow_edges
                    .into_iter()
                    .map(|e| FlowEdge { u: e.u, v: e.v, flow: e.flow })
                    .collect(),
            }
        }
        Algorithm::Bipartite => {
            let w: BipartiteWire = serde_json::from_value(body)?;
            let classes = w
                .colors
                .into_iter()
                .filter_map(|(k, c)| k.parse::<VertexId>().ok().map(|id| (id, c)))
                .collect();
            Outcome::Bipartite { bipartite: w.is_bipartite, classes }
        }
        Algorithm::Fleury | Algorithm::Hierholzer => {
            let w: EulerWire = serde_json::from_value(body)?;
            let kind = match w.euler_type.as_deref() {
                Some("Circuit") => EulerKind::Circuit,
                _ => EulerKind::Path,
            };
            Outcome::Euler { path: w.path, kind }
        }
    })
}

fn join_labels(store: &GraphStore, ids: &[VertexId]) -> String {
    ids.iter()
        .map(|id| {
            store
                .vertex(*id)
                .map(|v| v.label.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .collect::<Vec<_>>()
        .join(" \u{2192} ")
}

/// Human-readable result line for the notification banner.
fn summary(algo: Algorithm, outcome: &Outcome, store: &GraphStore) -> Notice {
    let name = algo.display_name();
    match outcome {
        Outcome::Traversal { order, .. } => {
            Notice::success(format!("{} Order: {}", name, join_labels(store, order)))
        }
        Outcome::ShortestPath { path, distance } => Notice::success(format!(
            "{}: {} (Dist: {})",
            name,
            join_labels(store, path),
            distance
        )),
        Outcome::Mst { edges } => {
            Notice::success(format!("{}: Found {} edges.", name, edges.len()))
        }
        Outcome::MaxFlow { total, .. } => Notice::result(format!("Max Flow: {}", total)),
        Outcome::Bipartite { bipartite, .. } => Notice::success(if *bipartite {
            "Graph IS Bipartite".to_string()
        } else {
            "Graph is NOT Bipartite".to_string()
        }),
        Outcome::Euler { path, kind } => {
            let kind = match kind {
                EulerKind::Path => "Path",
                EulerKind::Circuit => "Circuit",
            };
            Notice::result(format!("Euler {}: {}", kind, join_labels(store, path)))
        }
    }
}

// --- editor commands -------------------------------------------------------

impl Editor {
    /// Arm an algorithm. Traversal-family algorithms wait for a start
    /// vertex, two-endpoint ones for source then target/sink; the rest fire
    /// immediately.
    pub fn select_algorithm(&mut self, algo: Algorithm) -> Vec<Effect> {
        if self.session.is_pending() {
            return vec![Effect::Notify(Notice::info("Processing..."))];
        }
        self.anim.clear();
        self.interact.mode = crate::model::Mode::AlgoInput;
        self.interact.pending_source = None;
        self.session.algo = Some(algo);
        self.session.source = None;
        self.session.target = None;
        self.session.result = None;

        let mut effects = Vec::new();
        let name = algo.wire_name().to_uppercase();
        match algo.input() {
            InputShape::StartOnly => {
                self.session.step = Step::AwaitStart;
                effects.push(Effect::Notify(Notice::info(format!(
                    "Select START VERTEX for {}.",
                    name
                ))));
            }
            InputShape::SourceSink => {
                self.session.step = Step::AwaitStart;
                effects.push(Effect::Notify(Notice::info(format!(
                    "Select SOURCE VERTEX for {}.",
                    name
                ))));
            }
            InputShape::Immediate => {
                self.session.step = Step::Idle;
                effects.push(Effect::Notify(Notice::info("Running Algorithm...")));
                effects.push(Effect::Compute(self.begin_compute(algo)));
            }
        }
        effects.push(Effect::Redraw);
        effects
    }

    /// Drop the armed algorithm and fall back to move mode.
    pub fn cancel_algorithm(&mut self) -> Vec<Effect> {
        self.set_mode(crate::model::Mode::Move)
    }

    /// Vertex click routed from algorithm-input mode. Advances the
    /// awaiting-start/awaiting-target sub-steps and fires the compute
    /// request once the inputs are complete.
    pub(crate) fn algo_vertex_click(&mut self, id: VertexId) -> Vec<Effect> {
        let Some(algo) = self.session.algo else {
            return Vec::new();
        };
        // One request at a time; everything else stays interactive.
        if self.session.is_pending() {
            return Vec::new();
        }
        if self.session.result.is_some() || self.session.step == Step::Idle {
            self.anim.clear();
            self.session.result = None;
            self.session.source = None;
            self.session.target = None;
            self.session.step = Step::AwaitStart;
        }
        match self.session.step {
            Step::AwaitStart => match algo.input() {
                InputShape::Immediate => {
                    self.session.step = Step::Idle;
                    vec![
                        Effect::Notify(Notice::info("Running Algorithm...")),
                        Effect::Compute(self.begin_compute(algo)),
                        Effect::Redraw,
                    ]
                }
                InputShape::StartOnly => {
                    self.session.source = Some(id);
                    self.session.step = Step::Idle;
                    vec![
                        Effect::Notify(Notice::info("Processing...")),
                        Effect::Compute(self.begin_compute(algo)),
                        Effect::Redraw,
                    ]
                }
                InputShape::SourceSink => {
                    self.session.source = Some(id);
                    self.session.step = Step::AwaitTarget;
                    let label = self.label_of(id);
                    let slot = if algo == Algorithm::MaxFlow { "SINK" } else { "TARGET" };
                    vec![
                        Effect::Notify(Notice::info(format!(
                            "Start: {}. Click {}.",
                            label, slot
                        ))),
                        Effect::Redraw,
                    ]
                }
            },
            Step::AwaitTarget => {
                if self.session.source == Some(id) {
                    return vec![Effect::Notify(Notice::error(
                        "Source & Target cannot be same!",
                    ))];
                }
                self.session.target = Some(id);
                self.session.step = Step::Idle;
                vec![
                    Effect::Notify(Notice::info("Processing...")),
                    Effect::Compute(self.begin_compute(algo)),
                    Effect::Redraw,
                ]
            }
            Step::Idle => Vec::new(),
        }
    }

    /// Ask the conversion endpoint for a textual representation.
    pub fn request_representation(&mut self, mode: ReprMode) -> Vec<Effect> {
        if self.session.is_pending() {
            return vec![Effect::Notify(Notice::info("Processing..."))];
        }
        let body = serde_json::to_value(ConvertPayload {
            mode: mode.wire_name(),
            graph: WireGraph::of(&self.store),
        })
        .expect("convert payload serializes");
        let session = self.session.issue(PendingKind::Convert);
        vec![Effect::Compute(ComputeRequest {
            session,
            endpoint: "/api/convert",
            body,
        })]
    }

    fn begin_compute(&mut self, algo: Algorithm) -> ComputeRequest {
        let body = serde_json::to_value(AlgoPayload {
            graph: WireGraph::of(&self.store),
            kind: algo.wire_name(),
            start_id: self.session.source,
            source_id: self.session.source,
            end_id: self.session.target,
            sink_id: self.session.target,
        })
        .expect("compute payload serializes");
        let session = self.session.issue(PendingKind::Algo(algo));
        ComputeRequest { session, endpoint: algo.endpoint(), body }
    }

    /// Feed a service reply back in. Replies whose session id does not match
    /// the single pending request are stale (superseded by a mode switch,
    /// edit, or newer request) and are dropped without touching state.
    pub fn apply_response(&mut self, session: u64, body: Value) -> Vec<Effect> {
        let Some(pending) = self.session.pending.take() else {
            log::debug!("discarding compute response with no request outstanding");
            return Vec::new();
        };
        if pending.id != session {
            self.session.pending = Some(pending);
            log::debug!("discarding stale compute response (session {})", session);
            return Vec::new();
        }
        let kind = pending.kind;

        if body.get("status").and_then(Value::as_str) == Some("error") {
            let msg = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Server Error.")
                .to_string();
            self.session.result = None;
            return vec![Effect::Notify(Notice::error(msg)), Effect::Redraw];
        }

        match kind {
            PendingKind::Convert => match serde_json::from_value::<ConvertWire>(body) {
                Ok(w) => vec![Effect::ShowText(w.text)],
                Err(err) => {
                    log::warn!("malformed convert response: {}", err);
                    vec![Effect::Notify(Notice::error("Server Error."))]
                }
            },
            PendingKind::Algo(algo) => match parse_outcome(algo, &body) {
                Ok(outcome) => {
                    let notice = summary(algo, &outcome, &self.store);
                    match &outcome {
                        Outcome::Traversal { visited, .. } if !visited.is_empty() => {
                            self.anim.start(Timeline::Edges(visited.clone()));
                        }
                        Outcome::ShortestPath { path, .. } | Outcome::Euler { path, .. }
                            if path.len() > 1 =>
                        {
                            self.anim.start(Timeline::Path(path.clone()));
                        }
                        _ => {}
                    }
                    self.session.result = Some(outcome);
                    vec![Effect::Notify(notice), Effect::Redraw]
                }
                Err(err) => {
                    log::warn!("malformed {} response: {}", algo.wire_name(), err);
                    self.session.result = None;
                    vec![Effect::Notify(Notice::error("Server Error.")), Effect::Redraw]
                }
            },
        }
    }

    /// Network-level failure for an outstanding request.
    pub fn apply_failure(&mut self, session: u64) -> Vec<Effect> {
        let matches = self.session.pending.map_or(false, |p| p.id == session);
        if !matches {
            return Vec::new();
        }
        self.session.pending = None;
        vec![Effect::Notify(Notice::error("Server Error."))]
    }

    fn label_of(&self, id: VertexId) -> String {
        self.store
            .vertex(id)
            .map(|v| v.label.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
