// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for landing-page component tests.
//
// Mount/cleanup helpers plus synthetic-event constructors so individual
// test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Find an element by selector and click it like a user would.
pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

// ---------------------------------------------------------------------------
// Synthetic events
// ---------------------------------------------------------------------------

/// Type text into an `<input>` the way a user would: set the value, then
/// dispatch an `input` event so the controlled component sees the change.
/// Yew's delegated listeners run in the capture phase, so the synthetic
/// event reaches them without bubbling.
pub fn type_into(input: &web_sys::HtmlInputElement, value: &str) {
    input.set_value(value);
    let event = web_sys::InputEvent::new("input").unwrap();
    input.dispatch_event(&event).unwrap();
}

/// Dispatch a synthetic `submit` event directly on a form element. Unlike
/// clicking the submit button, this bypasses native `type="email"` and
/// `required` validation, so it exercises the component's own email check.
pub fn submit_form(form: &web_sys::HtmlFormElement) {
    let event = web_sys::Event::new("submit").unwrap();
    form.dispatch_event(&event).unwrap();
}
