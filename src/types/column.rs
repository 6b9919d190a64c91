//! Column derivation from dataset shape.

use serde::{Deserialize, Serialize};

use super::Record;

/// A display column, derived 1:1 from a key of the dataset's first record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column identity (the record key).
    pub key: String,
    /// Display header; currently the key itself.
    pub header: String,
}

impl Column {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let header = key.clone();
        Self { key, header }
    }
}

/// Derive the column set for a dataset.
///
/// The key set of the *first* record defines the columns for the entire
/// dataset, in that record's key iteration order. Keys appearing only in
/// later records are silently dropped from display.
#[must_use]
pub fn derive_columns(data: &[Record]) -> Vec<Column> {
    data.first()
        .map(|record| record.keys().map(Column::new).collect())
        .unwrap_or_default()
}
