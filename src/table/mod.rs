//! Root table state: the single source of truth for sort, pagination and
//! column-width state, synchronized with host data pushes.
//!
//! All state here is plain Rust with no DOM types; the wasm viewer holds one
//! `TableState` behind `Rc<RefCell<..>>` and derives everything it renders
//! from it.

mod gesture;
mod widths;

pub use gesture::ResizeGesture;
pub use widths::{
    default_column_width, ColumnWidths, FALLBACK_TABLE_WIDTH, MIN_COLUMN_WIDTH,
    RENDER_FALLBACK_WIDTH,
};

use crate::types::{derive_columns, CellValue, Column, Labels, Record, RenderConfig};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The active sort: a single column and direction. `None` on the state means
/// unsorted (original order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub key: String,
    pub direction: SortDirection,
}

/// Owns raw data, derived columns, sort state, page index/size and column
/// widths for one widget instance.
#[derive(Debug, Default)]
pub struct TableState {
    data: Vec<Record>,
    columns: Vec<Column>,
    widths: ColumnWidths,
    sort: Option<Sort>,
    page_index: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    labels: Labels,
    /// Last `pageSize` seen from the host; a *changed* host value resets the
    /// page, a repeated one leaves interaction-owned state alone.
    host_page_size: Option<usize>,
}

impl TableState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page_size: crate::types::DEFAULT_PAGE_SIZE,
            page_size_options: crate::types::DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            ..Self::default()
        }
    }

    /// Apply one configuration snapshot pushed by the host.
    ///
    /// Replaces the dataset, re-derives columns from the new first record and
    /// seeds column widths if they were never initialized. Sort state, page
    /// index and committed widths are interaction-owned and survive the push;
    /// only a changed host `pageSize` resets the page.
    pub fn apply_config(&mut self, config: RenderConfig) {
        self.data = config.data;
        self.columns = derive_columns(&self.data);
        if !self.data.is_empty() {
            self.widths.initialize(&self.columns);
        }

        if self.host_page_size != Some(config.page_size) {
            self.set_page_size(config.page_size);
            self.host_page_size = Some(config.page_size);
        }
        self.page_size_options = config.page_size_options;
        self.labels = config.labels;
    }

    // --- derived views ---------------------------------------------------

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    #[must_use]
    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    #[must_use]
    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// Tracked width for a column, with the render-time fallback applied.
    #[must_use]
    pub fn column_width(&self, key: &str) -> f64 {
        self.widths.get(key)
    }

    /// Minimum table width: sum of tracked widths, or the fixed fallback.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.widths.total()
    }

    /// All rows in display order: stable sort by the active column, original
    /// order when unsorted. Missing keys sort as null.
    #[must_use]
    pub fn sorted_rows(&self) -> Vec<&Record> {
        let mut rows: Vec<&Record> = self.data.iter().collect();
        if let Some(sort) = &self.sort {
            rows.sort_by(|a, b| {
                let av = CellValue::classify(a.get(&sort.key));
                let bv = CellValue::classify(b.get(&sort.key));
                let ord = av.total_order(&bv);
                match sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        rows
    }

    /// The contiguous slice of sorted rows currently visible.
    ///
    /// An out-of-range page index yields an empty window rather than an error.
    #[must_use]
    pub fn page_window(&self) -> Vec<&Record> {
        let rows = self.sorted_rows();
        let start = self
            .page_index
            .saturating_mul(self.page_size)
            .min(rows.len());
        let end = start.saturating_add(self.page_size).min(rows.len());
        rows.get(start..end).map(<[_]>::to_vec).unwrap_or_default()
    }

    /// `ceil(len / page_size)`; zero for an empty dataset.
    #[must_use]
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.data.len().div_ceil(self.page_size)
    }

    /// Page count as displayed: an empty dataset still shows one page.
    #[must_use]
    pub fn display_page_count(&self) -> usize {
        self.page_count().max(1)
    }

    /// The "current / total" indicator text.
    #[must_use]
    pub fn page_indicator(&self) -> String {
        format!("{} / {}", self.page_index + 1, self.display_page_count())
    }

    /// Whether first/prev navigation is meaningful.
    #[must_use]
    pub fn can_page_back(&self) -> bool {
        self.page_index > 0
    }

    /// Whether next/last navigation is meaningful.
    #[must_use]
    pub fn can_page_forward(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    // --- state transitions ------------------------------------------------

    /// Clamp `target` into the valid page range and commit it. Accepts any
    /// integer; negative and absurd values are silently clamped, never
    /// surfaced as errors.
    pub fn goto_page(&mut self, target: i64) {
        let max_index = self.page_count().saturating_sub(1);
        let max_index = i64::try_from(max_index).unwrap_or(i64::MAX);
        let clamped = target.clamp(0, max_index);
        self.page_index = usize::try_from(clamped).unwrap_or(0);
    }

    /// Set rows-per-page and reset to the first page. A page-size change
    /// never leaves the view on an out-of-range page. Zero is ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.page_size = size;
        self.page_index = 0;
    }

    /// Cycle the sort on `key`: none → ascending → descending → none.
    /// Clicking a different column restarts at ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some(sort) if sort.key == key => match sort.direction {
                SortDirection::Ascending => Some(Sort {
                    key: sort.key,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(Sort {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Commit a column width, clamped to the minimum. Called continuously
    /// while a resize gesture is in progress.
    pub fn resize_column(&mut self, key: &str, width: f64) {
        self.widths.set(key, width);
    }

    /// Explicitly clear tracked widths so the next dataset re-seeds defaults.
    /// Never called automatically; preserves the inherited one-shot behavior.
    pub fn reset_column_widths(&mut self) {
        self.widths.clear();
    }
}
