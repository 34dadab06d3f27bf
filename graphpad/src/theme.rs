//! Canvas color and font constants.

pub const DEFAULT: &str = "#3498db";
pub const BORDER: &str = "#2980b9";
pub const TEXT: &str = "#ffffff";

pub const SELECTED: &str = "#e74c3c";
pub const EDGE: &str = "#2c3e50";

pub const SOURCE: &str = "#e67e22";
pub const TARGET: &str = "#9b59b6";
pub const SOURCE_BORDER: &str = "#d35400";
pub const TARGET_BORDER: &str = "#8e44ad";

pub const FLOW_EDGE: &str = "#f39c12";
pub const FLOW_TEXT: &str = "#d35400";
pub const FLOW_BG: &str = "#ffffff";
pub const EMPTY_EDGE: &str = "#95a5a6";

pub const ANIM_EDGE_DONE: &str = "#e67e22";
pub const ANIM_EDGE_GROWING: &str = "#f39c12";

pub const NODE_ACTIVE_BG: &str = "#e67e22";
pub const NODE_ACTIVE_BORDER: &str = "#d35400";

pub const BIPARTITE_A: &str = "#e74c3c";
pub const BIPARTITE_B: &str = "#2ecc71";

pub const BADGE_BG: &str = "#ffffff";
pub const BADGE_TEXT: &str = "#d35400";
pub const BADGE_BORDER: &str = "#d35400";

pub const ANIM_AGENT: &str = "#c0392b";

pub const LABEL_BG: &str = "#ffffff";
pub const LABEL_BORDER: &str = "#cccccc";
pub const LABEL_TEXT: &str = "#ff0000";

pub const NODE_FONT: &str = "bold 14px Arial";
pub const WEIGHT_FONT: &str = "bold 12px Arial";
pub const BADGE_FONT: &str = "bold 11px Arial";
