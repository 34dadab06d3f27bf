use serde::Serialize;

pub type VertexId = u32;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Vertex {
    pub id: VertexId,
    pub x: f32,
    pub y: f32,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

/// Directedness is frozen per edge at creation time, so a graph can hold a
/// mix of directed and undirected edges after the global toggle flips.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: u32,
    pub is_directed: bool,
    pub show_weight: bool,
}

impl Edge {
    /// True when `self` connects the same unordered endpoint pair as (u, v).
    pub fn connects(&self, u: VertexId, v: VertexId) -> bool {
        (self.source == u && self.target == v) || (self.source == v && self.target == u)
    }
}

/// Undo/redo unit: a deep copy with no aliasing into the live store.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSnapshot {
    pub nodes: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub next_id: VertexId,
    pub directed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Move,
    AddVertex,
    AddEdge,
    Remove,
    AlgoInput,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Mode> {
        Some(match s {
            "MOVE" => Mode::Move,
            "ADD_VERTEX" => Mode::AddVertex,
            "ADD_EDGE" => Mode::AddEdge,
            "REMOVE" => Mode::Remove,
            "ALGO_INPUT" => Mode::AlgoInput,
            _ => return None,
        })
    }
}

/// Label scheme applied when a vertex is created; existing labels are stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NamingScheme {
    #[default]
    Index,
    Ordinal,
    Alpha,
}

impl NamingScheme {
    pub fn parse(s: &str) -> Option<NamingScheme> {
        Some(match s {
            "0, 1, 2..." | "index" => NamingScheme::Index,
            "1, 2, 3..." | "ordinal" => NamingScheme::Ordinal,
            "A, B, C..." | "alpha" => NamingScheme::Alpha,
            _ => return None,
        })
    }

    pub fn label(self, id: VertexId) -> String {
        match self {
            NamingScheme::Index => id.to_string(),
            NamingScheme::Ordinal => (id + 1).to_string(),
            NamingScheme::Alpha => {
                let letter = (b'A' + (id % 26) as u8) as char;
                if id < 26 {
                    letter.to_string()
                } else {
                    // Wraps as A1, B1, ... past the alphabet.
                    format!("{}{}", letter, id / 26)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
    Result,
}

/// Transient message for the host notification banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Notice {
        Notice { text: text.into(), kind: NoticeKind::Info }
    }
    pub fn success(text: impl Into<String>) -> Notice {
        Notice { text: text.into(), kind: NoticeKind::Success }
    }
    pub fn error(text: impl Into<String>) -> Notice {
        Notice { text: text.into(), kind: NoticeKind::Error }
    }
    pub fn result(text: impl Into<String>) -> Notice {
        Notice { text: text.into(), kind: NoticeKind::Result }
    }
}

/// Host-visible consequence of an editor command. The chrome interprets
/// these; the engine never touches the DOM or the network itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Notify(Notice),
    PromptWeight { source: VertexId, target: VertexId },
    Compute(crate::session::ComputeRequest),
    ShowText(String),
    SyncDirected(bool),
    Redraw,
}
