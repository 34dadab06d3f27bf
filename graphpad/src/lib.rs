//! Interactive graph-drawing engine: an editable vertex/edge model with
//! direct-manipulation gestures, bounded undo/redo, and time-based replay of
//! remote algorithm results over the same canvas.
//!
//! The engine is host-agnostic. Commands on [`Editor`] return [`Effect`]s
//! describing what the surrounding chrome must do (notify, prompt, POST a
//! compute request, repaint); rendering goes through the
//! [`render::Surface`] capability trait.

pub mod animate;
pub mod geometry {
    pub mod hit;
    pub mod math;
}
pub mod history;
pub mod interact;
pub mod model;
pub mod render;
pub mod session;
pub mod store;
pub mod theme;

use animate::Animation;
use history::History;
use interact::InteractionState;
use model::{Effect, Mode, NamingScheme, Notice};
use session::Session;
use store::GraphStore;

/// The single owned editor session: every component lives here and is
/// mutated only through the command methods, so there is no shared or
/// ambient state anywhere in the engine.
#[derive(Default)]
pub struct Editor {
    pub(crate) store: GraphStore,
    pub(crate) history: History,
    pub(crate) interact: InteractionState,
    pub(crate) session: Session,
    pub(crate) anim: Animation,
    pub(crate) weighted_input: bool,
    pub(crate) naming: NamingScheme,
}

impl Editor {
    pub fn new() -> Editor {
        Editor::default()
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interact
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn animation(&self) -> &Animation {
        &self.anim
    }

    pub fn weighted_input(&self) -> bool {
        self.weighted_input
    }

    pub fn naming(&self) -> NamingScheme {
        self.naming
    }

    /// Snapshot the pre-mutation state. Every structural mutation calls this
    /// first.
    pub(crate) fn record_history(&mut self) {
        self.history.record(self.store.snapshot());
    }

    /// Structural mutations drop the displayed result, the running
    /// animation, and any in-flight request: stale overlays referencing
    /// removed ids are a correctness hazard.
    pub(crate) fn invalidate_results(&mut self) {
        self.session.invalidate();
        self.anim.clear();
    }

    /// Switch the interaction mode. Leaving algorithm-input mode tears down
    /// the armed algorithm, its result, the animation, and any transient
    /// color overrides.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Effect> {
        self.interact.pending_source = None;
        self.interact.drag = None;
        let mut effects = Vec::new();
        if mode != Mode::AlgoInput {
            self.session.cancel();
            self.anim.clear();
            self.store.reset_color_overrides();
            let hint = match mode {
                Mode::AddVertex => "Click to add vertex.",
                Mode::AddEdge => "Select Source Vertex.",
                Mode::Remove => "Click Node/Edge to delete instantly.",
                _ => "Welcome!",
            };
            effects.push(Effect::Notify(Notice::info(hint)));
        }
        self.interact.mode = mode;
        effects.push(Effect::Redraw);
        effects
    }

    pub fn undo(&mut self) -> Vec<Effect> {
        let Some(prev) = self.history.undo(self.store.snapshot()) else {
            return vec![Effect::Notify(Notice::info("Nothing to Undo."))];
        };
        self.store.restore(prev);
        // The restored graph may no longer contain the selected vertices.
        self.session.clear_selection();
        self.anim.clear();
        vec![
            Effect::SyncDirected(self.store.directed()),
            Effect::Notify(Notice::info("Undone.")),
            Effect::Redraw,
        ]
    }

    pub fn redo(&mut self) -> Vec<Effect> {
        let Some(next) = self.history.redo(self.store.snapshot()) else {
            return vec![Effect::Notify(Notice::info("Nothing to Redo."))];
        };
        self.store.restore(next);
        self.session.clear_selection();
        self.anim.clear();
        vec![
            Effect::SyncDirected(self.store.directed()),
            Effect::Notify(Notice::info("Redone.")),
            Effect::Redraw,
        ]
    }

    /// Empty both collections and reset id allocation. Undoable like any
    /// other structural mutation.
    pub fn clear_graph(&mut self) -> Vec<Effect> {
        self.record_history();
        self.anim.clear();
        self.store.clear();
        self.session.clear_selection();
        vec![
            Effect::Notify(Notice::info("Graph cleared.")),
            Effect::Redraw,
        ]
    }

    /// Applies to edges created from now on; existing edges keep the
    /// directedness they were born with.
    pub fn set_directed(&mut self, directed: bool) -> Vec<Effect> {
        self.store.set_directed(directed);
        Vec::new()
    }

    pub fn set_weighted_input(&mut self, on: bool) -> Vec<Effect> {
        self.weighted_input = on;
        Vec::new()
    }

    pub fn set_naming(&mut self, scheme: NamingScheme) -> Vec<Effect> {
        self.naming = scheme;
        Vec::new()
    }

    /// Advance the animation by one display frame. Returns true while the
    /// frame needs painting (the terminal static frame included).
    pub fn frame_tick(&mut self) -> bool {
        if !self.anim.is_active() {
            return false;
        }
        self.anim.tick();
        true
    }
}
