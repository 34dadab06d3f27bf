use serde::Deserialize;

use crate::model::VertexId;

/// Per-frame progress increment at the display refresh rate.
pub const ANIM_SPEED: f32 = 0.015;

/// One recorded visitation hop from a traversal result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct EdgeVisit {
    pub u: VertexId,
    pub v: VertexId,
}

/// What the single active animation replays: a vertex-id path walked by a
/// moving marker, or an edge-visitation sequence revealed one hop at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum Timeline {
    Path(Vec<VertexId>),
    Edges(Vec<EdgeVisit>),
}

impl Timeline {
    /// Path timelines have one segment per consecutive vertex pair; edge
    /// timelines one per recorded visit.
    pub fn segment_count(&self) -> usize {
        match self {
            Timeline::Path(ids) => ids.len().saturating_sub(1),
            Timeline::Edges(visits) => visits.len(),
        }
    }
}

/// Single-timeline scheduler. The timeline outlives the run: once the last
/// segment completes the animation goes inactive but the timeline stays for
/// the final static frame, until the next invalidation clears it.
#[derive(Debug)]
pub struct Animation {
    timeline: Option<Timeline>,
    active: bool,
    segment: usize,
    progress: f32,
    speed: f32,
}

impl Default for Animation {
    fn default() -> Animation {
        Animation {
            timeline: None,
            active: false,
            segment: 0,
            progress: 0.0,
            speed: ANIM_SPEED,
        }
    }
}

impl Animation {
    pub fn new() -> Animation {
        Animation::default()
    }

    /// Begin replaying `timeline`, superseding any running animation
    /// synchronously. Empty timelines render statically instead of running.
    pub fn start(&mut self, timeline: Timeline) {
        self.segment = 0;
        self.progress = 0.0;
        self.active = timeline.segment_count() > 0;
        self.timeline = Some(timeline);
    }

    /// Freeze in place; the timeline is kept for the final static frame.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Stop and drop the timeline so no stale segment survives.
    pub fn clear(&mut self) {
        self.active = false;
        self.timeline = None;
        self.segment = 0;
        self.progress = 0.0;
    }

    /// Advance one frame. Returns false once inactive (terminal tick
    /// included, so the caller still renders the final frame).
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.progress += self.speed;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.segment += 1;
            let count = self.timeline.as_ref().map_or(0, Timeline::segment_count);
            if self.segment >= count {
                self.active = false;
            }
        }
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn segment(&self) -> usize {
        self.segment
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }
}
