use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

use graphpad::model::{Effect, NoticeKind};

pub fn new_obj() -> Object {
    Object::new()
}

pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

fn set_str(obj: &Object, k: &str, v: &str) {
    set_kv(obj, k, &JsValue::from_str(v));
}

fn level_str(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "default",
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
        NoticeKind::Result => "result",
    }
}

/// Flatten an effect to `{ kind, ... }` for the host chrome.
pub fn effect_to_js(effect: &Effect) -> JsValue {
    let obj = new_obj();
    match effect {
        Effect::Notify(notice) => {
            set_str(&obj, "kind", "notify");
            set_str(&obj, "text", &notice.text);
            set_str(&obj, "level", level_str(notice.kind));
        }
        Effect::PromptWeight { source, target } => {
            set_str(&obj, "kind", "prompt_weight");
            set_kv(&obj, "source", &JsValue::from_f64(*source as f64));
            set_kv(&obj, "target", &JsValue::from_f64(*target as f64));
        }
        Effect::ShowText(text) => {
            set_str(&obj, "kind", "show_text");
            set_str(&obj, "text", text);
        }
        Effect::SyncDirected(directed) => {
            set_str(&obj, "kind", "sync_directed");
            set_kv(&obj, "directed", &JsValue::from_bool(*directed));
        }
        // Consumed internally; kept for totality.
        Effect::Compute(_) => set_str(&obj, "kind", "compute"),
        Effect::Redraw => set_str(&obj, "kind", "redraw"),
    }
    obj.into()
}
