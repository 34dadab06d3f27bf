//! The host-facing editor surface. Synchronous commands return their
//! effects as a JS array; effects produced asynchronously (compute replies,
//! animation frames) are pushed through the optional `on_effect` callback.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use graphpad::model::{Effect, Mode, NamingScheme};
use graphpad::render;
use graphpad::session::{Algorithm, ReprMode};
use graphpad::Editor;

use crate::canvas::CanvasSurface;
use crate::{error, fetch, interop};

pub(crate) struct Core {
    pub editor: Editor,
    pub surface: CanvasSurface,
    pub on_effect: Option<Function>,
    pub base_url: String,
}

impl Core {
    pub fn draw(&mut self) {
        render::draw(&self.editor, &mut self.surface);
    }
}

/// Process a batch of effects: repaint and compute-dispatch are consumed
/// here, everything else is flattened for the chrome.
fn process(core: &Rc<RefCell<Core>>, effects: Vec<Effect>) -> js_sys::Array {
    let out = js_sys::Array::new();
    let mut redraw = false;
    for effect in effects {
        match effect {
            Effect::Redraw => redraw = true,
            Effect::Compute(req) => fetch::dispatch(core.clone(), req),
            other => {
                out.push(&interop::effect_to_js(&other));
            }
        }
    }
    if redraw {
        core.borrow_mut().draw();
    }
    out
}

/// Async delivery path: forward to the chrome callback.
pub(crate) fn deliver_async(core: &Rc<RefCell<Core>>, effects: Vec<Effect>) {
    let out = process(core, effects);
    let cb = core.borrow().on_effect.clone();
    if let Some(cb) = cb {
        if out.length() > 0 {
            let _ = cb.call1(&JsValue::NULL, &out);
        }
    }
}

#[wasm_bindgen]
pub struct GraphPad {
    core: Rc<RefCell<Core>>,
    // Keeps the frame-loop closure alive for the lifetime of the editor.
    _frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

#[wasm_bindgen]
impl GraphPad {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        on_effect: Option<Function>,
    ) -> Result<GraphPad, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        let core = Rc::new(RefCell::new(Core {
            editor: Editor::new(),
            surface,
            on_effect,
            base_url: String::new(),
        }));

        // Persistent frame loop: one callback in flight at a time, a no-op
        // unless an animation is running.
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let frame_inner = frame.clone();
        let core_frame = core.clone();
        *frame.borrow_mut() = Some(Closure::new(move || {
            {
                let core = &mut *core_frame.borrow_mut();
                if core.editor.frame_tick() {
                    core.draw();
                }
            }
            if let Some(cb) = frame_inner.borrow().as_ref() {
                if let Some(window) = web_sys::window() {
                    let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
                }
            }
        }));
        if let Some(cb) = frame.borrow().as_ref() {
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }

        core.borrow_mut().draw();
        Ok(GraphPad { core, _frame: frame })
    }

    /// Prefix for compute endpoints (empty = same origin).
    pub fn set_base_url(&self, url: String) {
        self.core.borrow_mut().base_url = url;
    }

    pub fn set_mode(&self, mode: &str) -> JsValue {
        let Some(mode) = Mode::parse(mode) else {
            return error::invalid_name("mode", mode);
        };
        let effects = self.core.borrow_mut().editor.set_mode(mode);
        process(&self.core, effects).into()
    }

    pub fn pointer_down(&self, x: f32, y: f32) -> JsValue {
        let effects = self.core.borrow_mut().editor.pointer_down(x, y);
        process(&self.core, effects).into()
    }

    pub fn pointer_move(&self, x: f32, y: f32) -> JsValue {
        let effects = self.core.borrow_mut().editor.pointer_move(x, y);
        process(&self.core, effects).into()
    }

    pub fn pointer_up(&self) -> JsValue {
        let effects = self.core.borrow_mut().editor.pointer_up();
        process(&self.core, effects).into()
    }

    pub fn select_algorithm(&self, name: &str) -> JsValue {
        let Some(algo) = Algorithm::parse(name) else {
            return error::invalid_name("algorithm", name);
        };
        let effects = self.core.borrow_mut().editor.select_algorithm(algo);
        process(&self.core, effects).into()
    }

    pub fn cancel_algorithm(&self) -> JsValue {
        let effects = self.core.borrow_mut().editor.cancel_algorithm();
        process(&self.core, effects).into()
    }

    pub fn confirm_weight(&self, weight: u32) -> JsValue {
        let effects = self.core.borrow_mut().editor.confirm_weight(weight);
        process(&self.core, effects).into()
    }

    pub fn cancel_weight(&self) -> JsValue {
        let effects = self.core.borrow_mut().editor.cancel_weight();
        process(&self.core, effects).into()
    }

    pub fn set_directed(&self, directed: bool) -> JsValue {
        let effects = self.core.borrow_mut().editor.set_directed(directed);
        process(&self.core, effects).into()
    }

    pub fn set_weighted(&self, on: bool) -> JsValue {
        let effects = self.core.borrow_mut().editor.set_weighted_input(on);
        process(&self.core, effects).into()
    }

    pub fn set_naming(&self, scheme: &str) -> JsValue {
        let Some(scheme) = NamingScheme::parse(scheme) else {
            return error::invalid_name("naming scheme", scheme);
        };
        let effects = self.core.borrow_mut().editor.set_naming(scheme);
        process(&self.core, effects).into()
    }

    pub fn undo(&self) -> JsValue {
        let effects = self.core.borrow_mut().editor.undo();
        process(&self.core, effects).into()
    }

    pub fn redo(&self) -> JsValue {
        let effects = self.core.borrow_mut().editor.redo();
        process(&self.core, effects).into()
    }

    pub fn clear_graph(&self) -> JsValue {
        let effects = self.core.borrow_mut().editor.clear_graph();
        process(&self.core, effects).into()
    }

    /// Ask the conversion endpoint for a textual representation; the text
    /// arrives as a `show_text` effect.
    pub fn representation(&self, mode: &str) -> JsValue {
        let Some(mode) = ReprMode::parse(mode) else {
            return error::invalid_name("representation mode", mode);
        };
        let effects = self.core.borrow_mut().editor.request_representation(mode);
        process(&self.core, effects).into()
    }

    /// Repaint on demand (e.g. after the host resizes the canvas).
    pub fn draw(&self) {
        self.core.borrow_mut().draw();
    }

    /// One-shot export of the current frame.
    pub fn to_png_data_url(&self) -> Result<String, JsValue> {
        self.core.borrow().surface.canvas().to_data_url()
    }

    pub fn node_count(&self) -> u32 {
        self.core.borrow().editor.store().nodes().len() as u32
    }

    pub fn edge_count(&self) -> u32 {
        self.core.borrow().editor.store().edges().len() as u32
    }
}
