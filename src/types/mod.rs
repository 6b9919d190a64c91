//! Data types for the table widget.

mod column;
mod config;
mod value;

pub use column::*;
pub use config::*;
pub use value::*;

/// One row of tabular input data: a flat, insertion-ordered key → value map.
///
/// All records in a dataset are assumed to share the key set of the first
/// record; this is inherited from the data producer and not validated.
pub type Record = serde_json::Map<String, serde_json::Value>;
