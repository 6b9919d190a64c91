//! DOM construction for the widget.
//!
//! The table, pagination bar and page-size row are rebuilt wholesale from
//! `TableState` on every render; listeners live on the root element (event
//! delegation), so nothing here wires callbacks. Rendering is best-effort:
//! a missing document or a failed node creation degrades to a partial or
//! empty widget, never an error to the host.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, HtmlElement, HtmlSelectElement};

#[cfg(target_arch = "wasm32")]
use super::SharedState;
#[cfg(target_arch = "wasm32")]
use crate::bridge;
#[cfg(target_arch = "wasm32")]
use crate::error::TableViewError;
#[cfg(target_arch = "wasm32")]
use crate::table::{SortDirection, TableState};
#[cfg(target_arch = "wasm32")]
use crate::types::CellValue;

#[cfg(target_arch = "wasm32")]
const STYLE_ID: &str = "tableview-style";

#[cfg(target_arch = "wasm32")]
const WIDGET_CSS: &str = "\
.tv-container { font-family: 'Source Sans Pro', -apple-system, sans-serif; font-size: 14px; color: #262730; }\n\
.tv-scroll-wrapper { overflow-x: auto; }\n\
.tv-table { border-collapse: collapse; table-layout: fixed; }\n\
.tv-th { position: relative; padding: 6px 8px; text-align: left; font-weight: 600; \
border-bottom: 2px solid #e6e6e6; cursor: pointer; user-select: none; \
overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }\n\
.tv-resize-handle { position: absolute; top: 0; right: 0; width: 6px; height: 100%; cursor: col-resize; }\n\
.tv-td { padding: 6px 8px; border-bottom: 1px solid #f0f2f6; \
overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }\n\
.tv-td-right { text-align: right; }\n\
.tv-td-left { text-align: left; }\n\
.tv-pagination { margin-top: 10px; display: flex; align-items: center; gap: 6px; }\n\
.tv-pagination-btn { padding: 2px 10px; }\n\
.tv-pagination-btn:disabled { opacity: 0.5; cursor: default; }\n\
.tv-page-indicator { font-weight: 600; }\n\
.tv-page-size-row { margin-top: 10px; }\n\
.tv-size-label { font-weight: 600; }\n";

/// Install the widget stylesheet once per document.
#[cfg(target_arch = "wasm32")]
pub(crate) fn inject_stylesheet() -> Result<(), TableViewError> {
    let document = document().ok_or_else(|| TableViewError::Dom("no document".to_string()))?;
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document
        .create_element("style")
        .map_err(|_| TableViewError::Dom("create <style>".to_string()))?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(WIDGET_CSS));
    let body = document
        .body()
        .ok_or_else(|| TableViewError::Dom("no body".to_string()))?;
    body.append_child(&style)
        .map_err(|_| TableViewError::Dom("attach <style>".to_string()))?;
    Ok(())
}

/// Build the static skeleton inside `root`: scroll wrapper, pagination bar,
/// page-size row. Returns the three hosts the render pass fills in.
#[cfg(target_arch = "wasm32")]
pub(crate) fn build_skeleton(
    root: &HtmlElement,
) -> Result<(HtmlElement, HtmlElement, HtmlElement), TableViewError> {
    let document = document().ok_or_else(|| TableViewError::Dom("no document".to_string()))?;
    root.set_inner_html("");
    root.set_class_name("tv-container");

    let dom_err = |what: &str| TableViewError::Dom(what.to_string());
    let scroll = create(&document, "div", "tv-scroll-wrapper")
        .ok_or_else(|| dom_err("create scroll wrapper"))?;
    let pagination =
        create(&document, "div", "tv-pagination").ok_or_else(|| dom_err("create pagination"))?;
    let size_row = create(&document, "div", "tv-page-size-row")
        .ok_or_else(|| dom_err("create page-size row"))?;

    root.append_child(&scroll)
        .and_then(|_| root.append_child(&pagination))
        .and_then(|_| root.append_child(&size_row))
        .map_err(|_| dom_err("attach skeleton"))?;
    Ok((scroll, pagination, size_row))
}

/// Rebuild everything from current state, then report the settled height to
/// the host. The height read must come after the DOM writes or the host
/// resizes the iframe to a stale height.
#[cfg(target_arch = "wasm32")]
pub(crate) fn render(state: &Rc<RefCell<SharedState>>) {
    {
        let s = state.borrow();
        let Some(document) = document() else {
            return;
        };
        let _ = rebuild_table(&document, &s);
        let _ = rebuild_pagination(&document, &s);
        let _ = rebuild_size_selector(&document, &s);
    }
    bridge::post_frame_height(measured_height());
}

#[cfg(target_arch = "wasm32")]
fn rebuild_table(document: &Document, s: &SharedState) -> Option<()> {
    s.table_host.set_inner_html("");
    let table = create(document, "table", "tv-table")?;
    table
        .style()
        .set_property("min-width", &px(s.table.total_width()))
        .ok();

    let thead = create(document, "thead", "")?;
    let header_row = create(document, "tr", "")?;
    for col in s.table.columns() {
        let th = create(document, "th", "tv-th")?;
        th.set_attribute("data-tv-sort", &col.key).ok();
        let width = px(s.table.column_width(&col.key));
        for prop in ["width", "min-width", "max-width"] {
            th.style().set_property(prop, &width).ok();
        }
        th.set_text_content(Some(&header_text(&s.table, col.key.as_str(), &col.header)));

        let handle = create(document, "div", "tv-resize-handle")?;
        handle.set_attribute("data-tv-resize", &col.key).ok();
        th.append_child(&handle).ok();
        header_row.append_child(&th).ok();
    }
    thead.append_child(&header_row).ok();
    table.append_child(&thead).ok();

    let tbody = create(document, "tbody", "")?;
    for record in s.table.page_window() {
        let tr = create(document, "tr", "tv-tr")?;
        for col in s.table.columns() {
            let value = CellValue::classify(record.get(&col.key));
            let class = if value.is_numeric() {
                "tv-td tv-td-right"
            } else {
                "tv-td tv-td-left"
            };
            let td = create(document, "td", class)?;
            let text = value.display();
            // Tooltip carries the full value so truncated cells stay
            // inspectable.
            td.set_attribute("title", &text).ok();
            td.set_text_content(Some(&text));
            tr.append_child(&td).ok();
        }
        tbody.append_child(&tr).ok();
    }
    table.append_child(&tbody).ok();

    s.table_host.append_child(&table).ok();
    Some(())
}

#[cfg(target_arch = "wasm32")]
fn header_text(table: &TableState, key: &str, header: &str) -> String {
    let mut text = header.to_string();
    if let Some(sort) = table.sort() {
        if sort.key == key {
            text.push_str(match sort.direction {
                SortDirection::Ascending => " \u{2191}",
                SortDirection::Descending => " \u{2193}",
            });
        }
    }
    text
}

#[cfg(target_arch = "wasm32")]
fn rebuild_pagination(document: &Document, s: &SharedState) -> Option<()> {
    s.pagination_host.set_inner_html("");
    let labels = s.table.labels();
    let back = s.table.can_page_back();
    let forward = s.table.can_page_forward();

    for (action, label, enabled) in [
        ("first", labels.first.as_str(), back),
        ("prev", labels.prev.as_str(), back),
    ] {
        let button = nav_button(document, action, label, enabled)?;
        s.pagination_host.append_child(&button).ok();
    }

    let indicator = create(document, "span", "tv-page-indicator")?;
    indicator.set_text_content(Some(&s.table.page_indicator()));
    s.pagination_host.append_child(&indicator).ok();

    for (action, label, enabled) in [
        ("next", labels.next.as_str(), forward),
        ("last", labels.last.as_str(), forward),
    ] {
        let button = nav_button(document, action, label, enabled)?;
        s.pagination_host.append_child(&button).ok();
    }
    Some(())
}

#[cfg(target_arch = "wasm32")]
fn nav_button(document: &Document, action: &str, label: &str, enabled: bool) -> Option<HtmlElement> {
    let button = create(document, "button", "tv-pagination-btn")?;
    button.set_attribute("type", "button").ok();
    button.set_attribute("data-tv-nav", action).ok();
    button.set_text_content(Some(label));
    if !enabled {
        button.set_attribute("disabled", "").ok();
    }
    Some(button)
}

#[cfg(target_arch = "wasm32")]
fn rebuild_size_selector(document: &Document, s: &SharedState) -> Option<()> {
    s.size_host.set_inner_html("");

    let caption = create(document, "label", "tv-size-label")?;
    caption.set_text_content(Some(&format!(
        "{}\u{a0}",
        s.table.labels().displayed_record
    )));
    s.size_host.append_child(&caption).ok();

    let select = create(document, "select", "tv-page-size-select")?;
    select.set_attribute("data-tv-size", "").ok();
    for size in s.table.page_size_options() {
        let option = create(document, "option", "")?;
        let text = size.to_string();
        option.set_attribute("value", &text).ok();
        option.set_text_content(Some(&text));
        select.append_child(&option).ok();
    }
    s.size_host.append_child(&select).ok();
    if let Some(select) = select.dyn_ref::<HtmlSelectElement>() {
        select.set_value(&s.table.page_size().to_string());
    }
    Some(())
}

#[cfg(target_arch = "wasm32")]
fn measured_height() -> f64 {
    document()
        .and_then(|d| d.body())
        .map_or(0.0, |body| f64::from(body.scroll_height()))
}

#[cfg(target_arch = "wasm32")]
fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(target_arch = "wasm32")]
fn create(document: &Document, tag: &str, class: &str) -> Option<HtmlElement> {
    let element = document.create_element(tag).ok()?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element.dyn_into::<HtmlElement>().ok()
}

#[cfg(target_arch = "wasm32")]
fn px(value: f64) -> String {
    format!("{value}px")
}
