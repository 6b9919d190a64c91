//! Column width tracking.
//!
//! Widths are initialized lazily, once per widget lifetime: the first
//! non-empty dataset seeds a default width per column, and later datasets
//! never re-trigger initialization while the map is non-empty. Columns that
//! appear after that point render at [`RENDER_FALLBACK_WIDTH`] instead.

use std::collections::HashMap;

use crate::types::Column;

/// Minimum width a drag-resize can commit, in pixels.
pub const MIN_COLUMN_WIDTH: f64 = 50.0;

/// Width used at render time for columns with no tracked width.
pub const RENDER_FALLBACK_WIDTH: f64 = 100.0;

/// Minimum table width when no column widths are tracked at all.
pub const FALLBACK_TABLE_WIDTH: f64 = 800.0;

const INIT_MIN_WIDTH: f64 = 80.0;
const INIT_WIDTH_PER_CHAR: f64 = 12.0;

/// Default width for a freshly initialized column.
#[must_use]
pub fn default_column_width(header: &str) -> f64 {
    let by_length = header.chars().count() as f64 * INIT_WIDTH_PER_CHAR;
    by_length.max(INIT_MIN_WIDTH)
}

/// Pixel widths per column key, mutable and independently tracked.
#[derive(Debug, Clone, Default)]
pub struct ColumnWidths {
    widths: HashMap<String, f64>,
}

impl ColumnWidths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Seed default widths for the given columns, but only while the map is
    /// empty. A non-empty map (from a prior dataset) is left untouched.
    pub fn initialize(&mut self, columns: &[Column]) {
        if !self.widths.is_empty() {
            return;
        }
        for col in columns {
            self.widths
                .insert(col.key.clone(), default_column_width(&col.header));
        }
    }

    /// Tracked width for a column, or the render-time fallback.
    #[must_use]
    pub fn get(&self, key: &str) -> f64 {
        self.widths
            .get(key)
            .copied()
            .unwrap_or(RENDER_FALLBACK_WIDTH)
    }

    /// Commit a width; values below [`MIN_COLUMN_WIDTH`] are clamped up.
    pub fn set(&mut self, key: &str, width: f64) {
        self.widths
            .insert(key.to_string(), width.max(MIN_COLUMN_WIDTH));
    }

    /// Sum of all tracked widths, or [`FALLBACK_TABLE_WIDTH`] when none are
    /// tracked. Used as the table's minimum width.
    #[must_use]
    pub fn total(&self) -> f64 {
        if self.widths.is_empty() {
            return FALLBACK_TABLE_WIDTH;
        }
        self.widths.values().sum()
    }

    /// Explicit external clear; the only way a later dataset re-triggers
    /// initialization.
    pub fn clear(&mut self) {
        self.widths.clear();
    }
}
