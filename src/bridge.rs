//! Host bridge adapter.
//!
//! The widget runs inside an iframe owned by a Streamlit-style component
//! host. Configuration arrives as `streamlit:render` message events; the only
//! outbound signal is the widget's rendered height, posted fire-and-forget to
//! the parent window so the host can resize the iframe. No acknowledgment,
//! no retry, and nothing is ever propagated back to the host as an error.
//!
//! Message types live here unconditionally so their wire shapes are tested
//! natively; the transport functions are wasm-only.

use serde::Serialize;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use crate::types::RenderConfig;

/// Inbound event type carrying one [`RenderConfig`] snapshot in `args`.
pub const RENDER_EVENT_TYPE: &str = "streamlit:render";

const READY_MESSAGE_TYPE: &str = "streamlit:componentReady";
const FRAME_HEIGHT_MESSAGE_TYPE: &str = "streamlit:setFrameHeight";

/// Protocol version spoken by this widget.
pub const API_VERSION: u32 = 1;

/// Announces the widget is mounted and ready to receive render events.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReady {
    pub is_streamlit_message: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub api_version: u32,
}

impl Default for ComponentReady {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentReady {
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_streamlit_message: true,
            kind: READY_MESSAGE_TYPE,
            api_version: API_VERSION,
        }
    }
}

/// Reports the widget's current rendered height, in CSS pixels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFrameHeight {
    pub is_streamlit_message: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub height: f64,
}

impl SetFrameHeight {
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            is_streamlit_message: true,
            kind: FRAME_HEIGHT_MESSAGE_TYPE,
            height,
        }
    }
}

/// Post the ready handshake to the host. Best-effort.
#[cfg(target_arch = "wasm32")]
pub fn post_component_ready() {
    post(&ComponentReady::new());
}

/// Post the current rendered height to the host. Idempotent, best-effort;
/// callers must ensure layout has settled first so the height is not stale.
#[cfg(target_arch = "wasm32")]
pub fn post_frame_height(height: f64) {
    post(&SetFrameHeight::new(height));
}

#[cfg(target_arch = "wasm32")]
fn post<T: Serialize>(message: &T) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(parent)) = window.parent() else {
        return;
    };
    let Ok(value) = serde_wasm_bindgen::to_value(message) else {
        return;
    };
    let _ = parent.post_message(&value, "*");
}

/// Extract a [`RenderConfig`] from a message event's data, if the event is a
/// render event at all. Malformed `args` are logged to the console and
/// dropped rather than surfaced to the host.
#[cfg(target_arch = "wasm32")]
pub fn parse_render_event(data: &JsValue) -> Option<RenderConfig> {
    let kind = js_sys::Reflect::get(data, &JsValue::from_str("type")).ok()?;
    if kind.as_string().as_deref() != Some(RENDER_EVENT_TYPE) {
        return None;
    }
    let args = js_sys::Reflect::get(data, &JsValue::from_str("args")).ok()?;
    match serde_wasm_bindgen::from_value::<RenderConfig>(args) {
        Ok(config) => Some(config),
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "tableview: ignoring malformed render payload: {e}"
            )));
            None
        }
    }
}
