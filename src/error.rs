//! Structured error types for tableview.

/// All errors that can occur while mounting or configuring the widget.
///
/// Per the widget's input contract, almost nothing is reported as an error:
/// malformed datasets degrade to empty tables and out-of-range requests are
/// clamped. What remains is mount-time wiring (missing DOM nodes) and payload
/// deserialization.
#[derive(Debug, thiserror::Error)]
pub enum TableViewError {
    /// The mount target element was not found in the document.
    #[error("Mount target not found: {0}")]
    MountTarget(String),

    /// A required DOM node could not be created or attached.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Render payload from the host could not be deserialized.
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TableViewError>;

impl From<String> for TableViewError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for TableViewError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<TableViewError> for wasm_bindgen::JsValue {
    fn from(e: TableViewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
