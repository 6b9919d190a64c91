//! Drag-resize gesture arithmetic.
//!
//! The gesture itself is pure state: a column, the pointer's starting x, and
//! the column's width at gesture start. The wasm viewer owns the transient
//! document-level listeners for the gesture's lifetime; this module stays
//! testable without a DOM.

use super::widths::MIN_COLUMN_WIDTH;

/// An in-progress column resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    column: String,
    start_x: f64,
    start_width: f64,
}

impl ResizeGesture {
    /// Begin a gesture on `column`, anchored at pointer position `start_x`.
    #[must_use]
    pub fn begin(column: impl Into<String>, start_x: f64, start_width: f64) -> Self {
        Self {
            column: column.into(),
            start_x,
            start_width,
        }
    }

    /// Column being resized.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Width implied by the pointer reaching `x`, clamped to the minimum.
    ///
    /// Applied continuously during the drag; the last value is what gets
    /// committed when the gesture ends.
    #[must_use]
    pub fn width_at(&self, x: f64) -> f64 {
        let delta = x - self.start_x;
        (self.start_width + delta).max(MIN_COLUMN_WIDTH)
    }
}
