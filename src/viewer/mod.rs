//! Main `TableView` struct - the wasm-exported entry point for the widget.
//!
//! This module provides the `TableView` struct that handles:
//! - Building the widget skeleton (scroll wrapper, table, pagination bar,
//!   page-size row) inside a host-supplied root element
//! - Subscribing to host render events and re-deriving all state from each
//!   configuration snapshot
//! - Handling user interactions (sort clicks, page navigation, page-size
//!   selection, column drag-resize)
//! - Reporting the rendered height back to the host after every
//!   layout-affecting change
//!
//! Event handlers are registered when the viewer is created - no manual
//! JavaScript wiring required beyond calling `mount`.

mod dom;
mod events;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Event, HtmlElement, MessageEvent, MouseEvent};

#[cfg(target_arch = "wasm32")]
use crate::bridge;
#[cfg(target_arch = "wasm32")]
use crate::error::TableViewError;
#[cfg(target_arch = "wasm32")]
use crate::table::TableState;
#[cfg(target_arch = "wasm32")]
use events::ActiveGesture;

/// Shared state that can be accessed by event handlers (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) table: TableState,
    /// Scroll wrapper the table is rebuilt into.
    pub(crate) table_host: HtmlElement,
    pub(crate) pagination_host: HtmlElement,
    pub(crate) size_host: HtmlElement,
    /// In-progress column resize, if any. Holds the document-level listener
    /// guard for the gesture's lifetime.
    pub(crate) gesture: Option<ActiveGesture>,
    /// Set when a drag just ended so the click that follows the release does
    /// not also toggle a sort.
    pub(crate) suppress_next_click: bool,
    /// Detached listener guards from finished gestures. Their closures must
    /// not be dropped mid-dispatch, so they are parked here and freed at the
    /// next gesture start.
    pub(crate) spent_listeners: Vec<events::GestureListeners>,
}

/// The widget exported to JavaScript.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct TableView {
    state: Rc<RefCell<SharedState>>,
    // Delegated listeners on the root element; kept alive for the widget's
    // lifetime.
    #[allow(dead_code)]
    mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[allow(dead_code)]
    change_closure: Closure<dyn FnMut(Event)>,
    #[allow(dead_code)]
    message_closure: Closure<dyn FnMut(MessageEvent)>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl TableView {
    /// Build the widget inside `root`, wire all listeners, subscribe to host
    /// render events and post the ready handshake.
    #[wasm_bindgen(constructor)]
    pub fn new(root: HtmlElement) -> Result<TableView, JsValue> {
        console_error_panic_hook::set_once();

        dom::inject_stylesheet().map_err(JsValue::from)?;
        let (table_host, pagination_host, size_host) =
            dom::build_skeleton(&root).map_err(JsValue::from)?;

        let state = Rc::new(RefCell::new(SharedState {
            table: TableState::new(),
            table_host,
            pagination_host,
            size_host,
            gesture: None,
            suppress_next_click: false,
            spent_listeners: Vec::new(),
        }));

        // Sort and navigation clicks are delegated through the root element,
        // so rebuilding the table DOM never re-wires listeners.
        let mut mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();
        {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                Self::internal_click(&state, &event);
            }) as Box<dyn FnMut(MouseEvent)>);
            root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .ok();
            mouse_closures.push(closure);
        }

        // Resize-handle mousedown starts a drag gesture.
        {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                Self::internal_mouse_down(&state, &event);
            }) as Box<dyn FnMut(MouseEvent)>);
            root.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .ok();
            mouse_closures.push(closure);
        }

        // Page-size selection.
        let change_closure = {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |event: Event| {
                Self::internal_change(&state, &event);
            }) as Box<dyn FnMut(Event)>);
            root.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                .ok();
            closure
        };

        // Host render events arrive as window message events.
        let message_closure = {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
                Self::internal_render_message(&state, &event.data());
            }) as Box<dyn FnMut(MessageEvent)>);
            if let Some(window) = web_sys::window() {
                window
                    .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
                    .ok();
            }
            closure
        };

        // Initial empty render so the host gets a height immediately, then
        // tell it we are ready for data.
        dom::render(&state);
        bridge::post_component_ready();

        Ok(TableView {
            state,
            mouse_closures,
            change_closure,
            message_closure,
        })
    }

    /// Force a re-render from current state (and a height report).
    pub fn render(&self) {
        dom::render(&self.state);
    }

    /// Clear tracked column widths so the next dataset re-seeds defaults.
    /// This is the explicit external reset; nothing calls it automatically.
    #[wasm_bindgen(js_name = "resetColumnWidths")]
    pub fn reset_column_widths(&self) {
        self.state.borrow_mut().table.reset_column_widths();
        dom::render(&self.state);
    }
}

/// Mount the widget into the element with the given id.
///
/// # Errors
/// Returns an error if no such element exists or the skeleton cannot be
/// built.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<TableView, JsValue> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(root_id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| JsValue::from(TableViewError::MountTarget(root_id.to_string())))?;
    TableView::new(root)
}
