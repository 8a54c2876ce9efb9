//! Host document adapter for chart insertion
//!
//! The extension passes an object whose `selectionAcceptsChildren`,
//! `appendToSelection` and `notify` methods wrap the designer API. Each may
//! return a promise; plain values are treated as already resolved.

use chartflow_embed::{EmbedError, ElementSpec, HostDocument, InsertOutcome, Notice};
use js_sys::Promise;
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::{embed_error, to_js_error, to_json};

#[wasm_bindgen]
extern "C" {
    pub type HostBridge;

    #[wasm_bindgen(method, catch, js_name = selectionAcceptsChildren)]
    fn selection_accepts_children(this: &HostBridge) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = appendToSelection)]
    fn append_to_selection(this: &HostBridge, element: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn notify(this: &HostBridge, notice: JsValue) -> Result<JsValue, JsValue>;
}

fn host_error(value: JsValue) -> EmbedError {
    EmbedError::Host {
        message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}

/// Wait for whatever a host method returned, promise or not
async fn settle(returned: Result<JsValue, JsValue>) -> Result<JsValue, JsValue> {
    JsFuture::from(Promise::resolve(&returned?)).await
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

struct JsHost(HostBridge);

impl HostDocument for JsHost {
    async fn selection_accepts_children(&mut self) -> chartflow_embed::Result<bool> {
        let accepts = settle(self.0.selection_accepts_children())
            .await
            .map_err(host_error)?;
        Ok(accepts.as_bool().unwrap_or(false))
    }

    async fn append_to_selection(&mut self, element: &ElementSpec) -> chartflow_embed::Result<()> {
        let element = to_js(element).map_err(|e| EmbedError::Host {
            message: e.to_string(),
        })?;
        settle(self.0.append_to_selection(element))
            .await
            .map(|_| ())
            .map_err(host_error)
    }

    async fn notify(&mut self, notice: Notice) {
        let value = match to_js(&notice) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Could not deliver notice {:?}: {e}", notice.message);
                return;
            }
        };
        if let Err(e) = settle(self.0.notify(value)).await {
            log::error!("Host rejected notice {:?}: {}", notice.message, host_error(e));
        }
    }
}

/// Insert the chart described by `config_json` at the host's selection.
///
/// Resolves to `{"inserted": true, "instanceId": ...}` or
/// `{"inserted": false}` when nothing suitable is selected.
#[wasm_bindgen]
pub async fn insert_chart(host: HostBridge, config_json: String) -> Result<String, JsValue> {
    let config = chartflow_embed::decode_config_attribute(&config_json)
        .map_err(|e| to_js_error(embed_error(e), "insert_chart"))?;

    let outcome = chartflow_embed::insert_chart(&mut JsHost(host), &config)
        .await
        .map_err(|e| to_js_error(embed_error(e), "insert_chart"))?;

    let result = match outcome {
        InsertOutcome::Inserted { instance_id } => {
            json!({ "inserted": true, "instanceId": instance_id })
        }
        InsertOutcome::NoSelection => json!({ "inserted": false }),
    };
    to_json(&result).map_err(|e| to_js_error(e, "insert_chart"))
}
