// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration test for the landing page.
//
// Rather than asserting on every single DOM node, we check a handful of
// landmarks that uniquely identify each section, the way a human would
// glance at the screen and say "yep, that's the landing page."

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use vanishauth_landing::pages::home::Home;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn landing_page_renders_every_section() {
    let mount = create_mount_point();
    yew::Renderer::<Home>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let text = mount.text_content().unwrap_or_default();

    // Header and hero.
    assert!(text.contains("VanishAuth"), "brand missing");
    assert!(text.contains("Auth that disappears."), "headline missing");
    assert!(text.contains("Get early access"), "waitlist CTA missing");
    assert!(text.contains("SDK overhead"), "stats row missing");

    // Trust grid and testimonial.
    assert!(text.contains("Security by default"), "trust card missing");
    assert!(text.contains("One line, infinite scale"), "trust card missing");
    assert!(text.contains("Trust that compounds"), "trust card missing");
    assert!(
        text.contains("Sign-in success jumped 18%"),
        "testimonial missing"
    );

    // Docs CTA and FAQ.
    assert!(
        text.contains("From zero to biometric in seconds"),
        "docs heading missing"
    );
    assert!(
        text.contains("Frequently asked questions"),
        "FAQ heading missing"
    );
    for question in [
        "How is this different from magic links or OTPs?",
        "Which platforms are supported?",
        "Can we migrate off later?",
        "What about compliance?",
    ] {
        assert!(text.contains(question), "FAQ question missing: {question}");
    }

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn anchor_targets_and_widgets_are_present() {
    let mount = create_mount_point();
    yew::Renderer::<Home>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    // The nav links point at these in-page anchors.
    for id in ["#security", "#docs", "#faqs", "#waitlist"] {
        assert!(
            mount.query_selector(id).unwrap().is_some(),
            "anchor target {id} missing"
        );
    }

    // The interactive widgets the page is built around.
    assert!(
        mount
            .query_selector("input[type='email']")
            .unwrap()
            .is_some(),
        "waitlist email input missing"
    );
    assert_eq!(
        mount.query_selector_all("[data-tab]").unwrap().length(),
        4,
        "code tab strip missing tabs"
    );
    assert!(
        mount.query_selector("#consent").unwrap().is_some(),
        "consent checkbox missing"
    );

    cleanup(&mount);
}
