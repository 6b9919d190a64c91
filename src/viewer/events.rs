//! Click, change, and drag-resize event handlers for `TableView`.
//!
//! All methods here are `pub(crate)` helpers called from closures wired up in
//! `mod.rs`. They work over the shared state and re-render (which includes
//! the height report to the host) whenever a transition changed anything
//! visible.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, Event, HtmlSelectElement, MouseEvent};

#[cfg(target_arch = "wasm32")]
use super::{dom, SharedState, TableView};
#[cfg(target_arch = "wasm32")]
use crate::table::ResizeGesture;

/// An in-progress drag-resize: the pure gesture plus the listener guard that
/// keeps it fed with pointer events.
#[cfg(target_arch = "wasm32")]
pub(crate) struct ActiveGesture {
    pub(crate) gesture: ResizeGesture,
    pub(crate) listeners: GestureListeners,
}

/// Document-level listeners acquired for one gesture and released
/// unconditionally when it ends - on mouseup, on window blur (the terminating
/// mouseup may never fire after focus loss), or on drop.
#[cfg(target_arch = "wasm32")]
pub(crate) struct GestureListeners {
    mousemove: Closure<dyn FnMut(MouseEvent)>,
    mouseup: Closure<dyn FnMut(MouseEvent)>,
    blur: Closure<dyn FnMut(Event)>,
    attached: bool,
}

#[cfg(target_arch = "wasm32")]
impl GestureListeners {
    pub(crate) fn attach(state: &Rc<RefCell<SharedState>>) -> Self {
        let mousemove = {
            let state = state.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                TableView::internal_gesture_move(&state, f64::from(event.client_x()));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let mouseup = {
            let state = state.clone();
            Closure::wrap(Box::new(move |_event: MouseEvent| {
                TableView::internal_gesture_end(&state, true);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let blur = {
            let state = state.clone();
            Closure::wrap(Box::new(move |_event: Event| {
                TableView::internal_gesture_end(&state, false);
            }) as Box<dyn FnMut(Event)>)
        };

        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                document
                    .add_event_listener_with_callback(
                        "mousemove",
                        mousemove.as_ref().unchecked_ref(),
                    )
                    .ok();
                document
                    .add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())
                    .ok();
            }
            window
                .add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())
                .ok();
        }

        Self {
            mousemove,
            mouseup,
            blur,
            attached: true,
        }
    }

    /// Deregister from the document/window. Idempotent; does not drop the
    /// closures, which may still be mid-dispatch.
    pub(crate) fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(document) = window.document() {
            let _ = document.remove_event_listener_with_callback(
                "mousemove",
                self.mousemove.as_ref().unchecked_ref(),
            );
            let _ = document.remove_event_listener_with_callback(
                "mouseup",
                self.mouseup.as_ref().unchecked_ref(),
            );
        }
        let _ =
            window.remove_event_listener_with_callback("blur", self.blur.as_ref().unchecked_ref());
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for GestureListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(target_arch = "wasm32")]
impl TableView {
    /// Delegated click handler: sort toggles and page navigation.
    pub(crate) fn internal_click(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
        {
            let mut s = state.borrow_mut();
            if s.suppress_next_click {
                // The release of a resize drag also fires a click on the
                // header; it must not toggle the sort.
                s.suppress_next_click = false;
                return;
            }
        }

        let Some(target) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return;
        };
        if target.closest("[data-tv-resize]").ok().flatten().is_some() {
            return;
        }

        if let Some(button) = target.closest("[data-tv-nav]").ok().flatten() {
            let Some(action) = button.get_attribute("data-tv-nav") else {
                return;
            };
            {
                let mut s = state.borrow_mut();
                let index = i64::try_from(s.table.page_index()).unwrap_or(0);
                let count = i64::try_from(s.table.page_count()).unwrap_or(i64::MAX);
                match action.as_str() {
                    "first" => s.table.goto_page(0),
                    "prev" => s.table.goto_page(index - 1),
                    "next" => s.table.goto_page(index + 1),
                    "last" => s.table.goto_page(count - 1),
                    _ => return,
                }
            }
            dom::render(state);
            return;
        }

        if let Some(header) = target.closest("[data-tv-sort]").ok().flatten() {
            let Some(key) = header.get_attribute("data-tv-sort") else {
                return;
            };
            state.borrow_mut().table.toggle_sort(&key);
            dom::render(state);
        }
    }

    /// Delegated change handler: page-size selection.
    pub(crate) fn internal_change(state: &Rc<RefCell<SharedState>>, event: &Event) {
        let Some(select) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        if !select.matches("[data-tv-size]").unwrap_or(false) {
            return;
        }
        let Ok(size) = select.value().parse::<usize>() else {
            return;
        };
        state.borrow_mut().table.set_page_size(size);
        dom::render(state);
    }

    /// Delegated mousedown handler: starts a drag-resize when the press lands
    /// on a resize handle.
    pub(crate) fn internal_mouse_down(state: &Rc<RefCell<SharedState>>, event: &MouseEvent) {
        let Some(target) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return;
        };
        let Some(handle) = target.closest("[data-tv-resize]").ok().flatten() else {
            return;
        };
        let Some(key) = handle.get_attribute("data-tv-resize") else {
            return;
        };
        event.prevent_default();

        let start_x = f64::from(event.client_x());
        let start_width = state.borrow().table.column_width(&key);
        let listeners = GestureListeners::attach(state);

        let mut s = state.borrow_mut();
        // Closures from the previous gesture are safe to free now.
        s.spent_listeners.clear();
        s.gesture = Some(ActiveGesture {
            gesture: ResizeGesture::begin(key, start_x, start_width),
            listeners,
        });
    }

    /// Pointer moved during a drag: apply the implied width continuously.
    pub(crate) fn internal_gesture_move(state: &Rc<RefCell<SharedState>>, x: f64) {
        let update = {
            let s = state.borrow();
            s.gesture
                .as_ref()
                .map(|active| (active.gesture.column().to_string(), active.gesture.width_at(x)))
        };
        let Some((key, width)) = update else {
            return;
        };
        state.borrow_mut().table.resize_column(&key, width);
        dom::render(state);
    }

    /// Gesture over: release the document listeners. `from_pointer` is true
    /// for a mouseup release, which is followed by a click that must be
    /// swallowed; a blur release has no trailing click.
    pub(crate) fn internal_gesture_end(state: &Rc<RefCell<SharedState>>, from_pointer: bool) {
        let mut s = state.borrow_mut();
        let Some(mut active) = s.gesture.take() else {
            return;
        };
        active.listeners.detach();
        s.spent_listeners.push(active.listeners);
        if from_pointer {
            s.suppress_next_click = true;
        }
    }

    /// A message event arrived from the host; apply it if it is a render
    /// event. The widget re-derives everything from the snapshot and reports
    /// its new height.
    pub(crate) fn internal_render_message(
        state: &Rc<RefCell<SharedState>>,
        data: &wasm_bindgen::JsValue,
    ) {
        let Some(config) = crate::bridge::parse_render_event(data) else {
            return;
        };
        state.borrow_mut().table.apply_config(config);
        dom::render(state);
    }
}
