//! tableview - paginated data-table widget for the web
//!
//! Renders host-supplied records as a sortable, paginated, column-resizable
//! table in the browser via WebAssembly:
//! - Columns derived from the dataset's first record
//! - Stable single-column sorting (none → ascending → descending → none)
//! - Client-side pagination with a configurable page-size selector
//! - Drag-resizable columns with scoped document listeners
//! - Rendered height reported to the embedding host after every
//!   layout-affecting change
//!
//! The core table state is plain Rust and tested natively; only the DOM
//! rendering and the host message bridge are wasm-specific.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { mount } from 'tableview';
//! await init();
//! const widget = mount("root");
//! // host render events drive everything from here
//! ```

// Core state modules (native + wasm)
pub mod bridge;
pub mod error;
pub mod table;
pub mod types;

// Widget module (DOM + events, wasm32 only)
pub mod viewer;

#[cfg(target_arch = "wasm32")]
pub use viewer::{mount, TableView};

use wasm_bindgen::prelude::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
