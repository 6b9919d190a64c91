//! Inbound render configuration from the host.

use serde::{Deserialize, Serialize};

use super::Record;

/// Default rows-per-page when the host omits `pageSize`.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default selectable page sizes when the host omits `pageSizeOptions`.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 50];

/// Navigation and caption labels, each independently defaulted if absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub first: String,
    pub prev: String,
    pub next: String,
    pub last: String,
    pub displayed_record: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            first: "first".to_string(),
            prev: "prev".to_string(),
            next: "next".to_string(),
            last: "last".to_string(),
            displayed_record: "Displayed Record".to_string(),
        }
    }
}

/// One configuration payload per render cycle, pushed by the host.
///
/// Field names are camelCase on the wire to match the host's argument map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Dataset to display.
    pub data: Vec<Record>,
    /// Initial rows-per-page.
    pub page_size: usize,
    /// Selectable page sizes. Not enforced against `page_size`.
    pub page_size_options: Vec<usize>,
    pub labels: Labels,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            labels: Labels::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_takes_all_defaults() {
        let cfg: RenderConfig = serde_json::from_str("{}").unwrap_or_default();
        assert!(cfg.data.is_empty());
        assert_eq!(cfg.page_size, 10);
        assert_eq!(cfg.page_size_options, vec![10, 20, 50]);
        assert_eq!(cfg.labels.first, "first");
        assert_eq!(cfg.labels.displayed_record, "Displayed Record");
    }

    #[test]
    fn labels_default_independently() {
        let cfg: RenderConfig =
            serde_json::from_str(r#"{"labels": {"first": "<<"}}"#).unwrap_or_default();
        assert_eq!(cfg.labels.first, "<<");
        assert_eq!(cfg.labels.prev, "prev");
        assert_eq!(cfg.labels.last, "last");
    }

    #[test]
    fn camel_case_field_names() {
        let cfg: RenderConfig =
            serde_json::from_str(r#"{"pageSize": 20, "pageSizeOptions": [5, 20]}"#)
                .unwrap_or_default();
        assert_eq!(cfg.page_size, 20);
        assert_eq!(cfg.page_size_options, vec![5, 20]);
    }
}
