//! Compute-service dispatch: POSTs a request body and feeds the reply back
//! into the editor under the session id it was issued with.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Request, RequestInit, Response};

use graphpad::session::ComputeRequest;

use crate::api::{deliver_async, Core};

pub(crate) fn dispatch(core: Rc<RefCell<Core>>, req: ComputeRequest) {
    let url = format!("{}{}", core.borrow().base_url, req.endpoint);
    let body = req.body.to_string();
    let session = req.session;
    spawn_local(async move {
        let effects = match post_json(&url, &body).await {
            Ok(value) => core.borrow_mut().editor.apply_response(session, value),
            Err(err) => {
                log::warn!("compute request to {} failed: {:?}", url, err);
                core.borrow_mut().editor.apply_failure(session)
            }
        };
        deliver_async(&core, effects);
    });
}

async fn post_json(url: &str, body: &str) -> Result<serde_json::Value, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let json = JsFuture::from(resp.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}
