// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the FAQ Disclosure row.
//
// Each row starts closed, toggles on click, and toggles independently of
// its siblings.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, click, create_mount_point};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use vanishauth_landing::components::disclosure::Disclosure;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Single)]
fn single() -> Html {
    html! { <Disclosure question={"Is it fast?"} answer={"Under two seconds."} /> }
}

#[function_component(Pair)]
fn pair() -> Html {
    html! {
        <>
            <Disclosure question={"First question?"} answer={"First answer."} />
            <Disclosure question={"Second question?"} answer={"Second answer."} />
        </>
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn starts_closed() {
    let mount = create_mount_point();
    yew::Renderer::<Single>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Is it fast?"), "question should be visible");
    assert!(
        !text.contains("Under two seconds."),
        "answer should be hidden initially"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn click_toggles_open_and_closed() {
    let mount = create_mount_point();
    yew::Renderer::<Single>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    click(&mount, "button");
    sleep(Duration::ZERO).await;
    assert!(
        mount
            .text_content()
            .unwrap_or_default()
            .contains("Under two seconds."),
        "answer should be visible after opening"
    );

    click(&mount, "button");
    sleep(Duration::ZERO).await;
    assert!(
        !mount
            .text_content()
            .unwrap_or_default()
            .contains("Under two seconds."),
        "answer should be hidden again after closing"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn rows_toggle_independently() {
    let mount = create_mount_point();
    yew::Renderer::<Pair>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let buttons = mount.query_selector_all("button").unwrap();
    assert_eq!(buttons.length(), 2);

    let first: web_sys::HtmlElement = buttons.item(0).unwrap().dyn_into().unwrap();
    first.click();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(
        text.contains("First answer."),
        "toggled row should show its answer"
    );
    assert!(
        !text.contains("Second answer."),
        "sibling row should stay closed"
    );

    cleanup(&mount);
}
