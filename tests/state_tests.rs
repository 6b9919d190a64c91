//! End-to-end state tests for tableview
//!
//! Scenario tests exercising the full root-state surface the way the widget
//! drives it: host config pushes interleaved with user interactions.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::float_cmp
)]

use serde_json::{json, Value};
use tableview::table::TableState;
use tableview::types::{CellValue, Labels, Record, RenderConfig};

fn person(name: &str, age: i64) -> Record {
    let mut record = Record::new();
    record.insert("Name".to_string(), json!(name));
    record.insert("Age".to_string(), json!(age));
    record
}

fn roster(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| person(&format!("person{i}"), i64::try_from(i).unwrap()))
        .collect()
}

#[test]
fn twenty_five_records_at_page_size_ten() {
    let mut state = TableState::new();
    state.apply_config(RenderConfig {
        data: roster(25),
        page_size: 10,
        ..RenderConfig::default()
    });

    assert_eq!(state.page_count(), 3);

    state.goto_page(2);
    assert_eq!(state.page_window().len(), 5);

    state.goto_page(5);
    assert_eq!(state.page_index(), 2);
}

#[test]
fn empty_dataset_degrades_gracefully() {
    let mut state = TableState::new();
    state.apply_config(RenderConfig::default());

    assert!(state.columns().is_empty());
    assert_eq!(state.row_count(), 0);
    assert!(state.page_window().is_empty());
    assert_eq!(state.page_indicator(), "1 / 1");
    assert!(!state.can_page_back());
    assert!(!state.can_page_forward());
}

#[test]
fn age_header_click_cycle_returns_to_original_order() {
    let data = vec![person("Carol", 35), person("Bob", 25), person("Alice", 30)];
    let mut state = TableState::new();
    state.apply_config(RenderConfig {
        data,
        ..RenderConfig::default()
    });

    let ages = |state: &TableState| -> Vec<i64> {
        state
            .sorted_rows()
            .iter()
            .filter_map(|r| r.get("Age").and_then(Value::as_i64))
            .collect()
    };

    state.toggle_sort("Age");
    assert_eq!(ages(&state), [25, 30, 35]);

    state.toggle_sort("Age");
    assert_eq!(ages(&state), [35, 30, 25]);

    state.toggle_sort("Age");
    assert_eq!(ages(&state), [35, 25, 30]);
    assert!(state.sort().is_none());
}

#[test]
fn columns_come_from_the_first_record_in_order() {
    let mut state = TableState::new();
    state.apply_config(RenderConfig {
        data: roster(3),
        ..RenderConfig::default()
    });

    let keys: Vec<&str> = state.columns().iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, ["Name", "Age"]);
    assert_eq!(state.columns()[0].header, "Name");
}

#[test]
fn heterogeneous_records_drop_unknown_keys_from_display() {
    let mut extra = person("Eve", 41);
    extra.insert("Salary".to_string(), json!(1000));
    let mut state = TableState::new();
    state.apply_config(RenderConfig {
        data: vec![person("Adam", 40), extra],
        ..RenderConfig::default()
    });

    // Column set is defined by the first record alone
    let keys: Vec<&str> = state.columns().iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, ["Name", "Age"]);
}

#[test]
fn missing_cells_render_as_the_empty_value() {
    let mut sparse = Record::new();
    sparse.insert("Name".to_string(), json!("OnlyName"));
    let mut state = TableState::new();
    state.apply_config(RenderConfig {
        data: vec![person("Adam", 40), sparse],
        ..RenderConfig::default()
    });

    let window = state.page_window();
    let missing = CellValue::classify(window[1].get("Age"));
    assert_eq!(missing.display(), "");
    assert!(!missing.is_numeric());
}

#[test]
fn cell_alignment_is_per_value_not_per_column() {
    let mut mixed = Record::new();
    mixed.insert("Age".to_string(), json!("unknown"));
    let mut state = TableState::new();
    state.apply_config(RenderConfig {
        data: vec![
            {
                let mut r = Record::new();
                r.insert("Age".to_string(), json!(30));
                r
            },
            mixed,
        ],
        ..RenderConfig::default()
    });

    let window = state.page_window();
    assert!(CellValue::classify(window[0].get("Age")).is_numeric());
    assert!(!CellValue::classify(window[1].get("Age")).is_numeric());
}

#[test]
fn labels_flow_through_from_the_host() {
    let mut state = TableState::new();
    state.apply_config(RenderConfig {
        data: roster(1),
        labels: Labels {
            first: "<<".to_string(),
            prev: "<".to_string(),
            next: ">".to_string(),
            last: ">>".to_string(),
            displayed_record: "Rows per page".to_string(),
        },
        ..RenderConfig::default()
    });

    assert_eq!(state.labels().first, "<<");
    assert_eq!(state.labels().displayed_record, "Rows per page");
}

#[test]
fn page_size_options_default_and_override() {
    let mut state = TableState::new();
    state.apply_config(RenderConfig::default());
    assert_eq!(state.page_size_options(), [10, 20, 50]);

    state.apply_config(RenderConfig {
        page_size_options: vec![5, 100],
        ..RenderConfig::default()
    });
    assert_eq!(state.page_size_options(), [5, 100]);
}

#[test]
fn interactions_then_data_push_keep_the_view_settings() {
    let mut state = TableState::new();
    state.apply_config(RenderConfig {
        data: roster(25),
        ..RenderConfig::default()
    });

    state.toggle_sort("Age");
    state.goto_page(1);
    state.resize_column("Age", 150.0);

    // Host pushes fresh data with unchanged settings
    state.apply_config(RenderConfig {
        data: roster(30),
        ..RenderConfig::default()
    });

    assert!(state.sort().is_some());
    assert_eq!(state.page_index(), 1);
    assert_eq!(state.column_width("Age"), 150.0);
    assert_eq!(state.page_count(), 3);
}

#[test]
fn sorted_pagination_windows_are_windows_of_the_sorted_order() {
    let mut state = TableState::new();
    state.apply_config(RenderConfig {
        data: roster(25),
        ..RenderConfig::default()
    });

    state.toggle_sort("Age");
    state.toggle_sort("Age"); // descending
    state.goto_page(0);

    let ages: Vec<i64> = state
        .page_window()
        .iter()
        .filter_map(|r| r.get("Age").and_then(Value::as_i64))
        .collect();
    assert_eq!(ages, [24, 23, 22, 21, 20, 19, 18, 17, 16, 15]);
}
