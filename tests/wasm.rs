//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use tableview::bridge::{self, RENDER_EVENT_TYPE};

fn message(kind: &str, args: JsValue) -> JsValue {
    let data = js_sys::Object::new();
    js_sys::Reflect::set(&data, &"type".into(), &kind.into()).unwrap();
    js_sys::Reflect::set(&data, &"args".into(), &args).unwrap();
    data.into()
}

#[wasm_bindgen_test]
fn render_event_parses_config_from_args() {
    let args = js_sys::Object::new();
    js_sys::Reflect::set(&args, &"pageSize".into(), &20.into()).unwrap();
    let config = bridge::parse_render_event(&message(RENDER_EVENT_TYPE, args.into()))
        .expect("render event should parse");
    assert_eq!(config.page_size, 20);
    assert!(config.data.is_empty());
}

#[wasm_bindgen_test]
fn non_render_events_are_ignored() {
    let args = js_sys::Object::new();
    let event = message("some:otherEvent", args.into());
    assert!(bridge::parse_render_event(&event).is_none());
}

#[wasm_bindgen_test]
fn malformed_args_are_dropped() {
    let event = message(RENDER_EVENT_TYPE, JsValue::from_str("not an object"));
    assert!(bridge::parse_render_event(&event).is_none());
}

#[wasm_bindgen_test]
fn mount_builds_the_widget_skeleton() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_id("tv-test-root");
    document.body().unwrap().append_child(&root).unwrap();

    let _widget = tableview::mount("tv-test-root").expect("mount");

    assert!(root.query_selector(".tv-scroll-wrapper").unwrap().is_some());
    assert!(root.query_selector(".tv-pagination").unwrap().is_some());
    assert!(root.query_selector("[data-tv-size]").unwrap().is_some());

    document.body().unwrap().remove_child(&root).unwrap();
}
