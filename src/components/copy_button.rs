/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Clipboard copy affordance shown next to install commands and snippets.

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use crate::constants::COPY_FEEDBACK_MS;

#[derive(Properties, Debug, PartialEq)]
pub struct CopyButtonProps {
    /// The exact text written to the clipboard on activation.
    pub text: String,
    /// Compact variant used inside the code-tab header rows.
    #[prop_or_default]
    pub small: bool,
}

/// Writes `text` to the system clipboard and flashes a "Copied" label for a
/// short while. A rejected clipboard write is logged and leaves the label
/// untouched; copying is a convenience action with no user-facing error
/// surface. The button stays enabled during the write, so rapid clicks may
/// overlap; each success arms its own reset timer.
#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);

    let onclick = {
        let copied = copied.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) {
                let copied = copied.clone();
                let text = text.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match JsFuture::from(clipboard.write_text(&text)).await {
                        Ok(_) => {
                            copied.set(true);
                            // One-shot reset; not cancelled if the component
                            // unmounts first.
                            Timeout::new(COPY_FEEDBACK_MS, move || copied.set(false)).forget();
                        }
                        Err(e) => log::error!("Copy failed: {e:?}"),
                    }
                });
            }
        })
    };

    let class = classes!(
        "inline-flex",
        "items-center",
        "gap-2",
        "rounded-md",
        "border",
        "border-white/10",
        "bg-white/5",
        "hover:bg-white/10",
        "focus:outline-none",
        "focus:ring-2",
        "focus:ring-cyan-400/50",
        "transition",
        "px-2.5",
        if props.small { "py-1 text-xs" } else { "py-2 text-sm" },
    );

    html! {
        <button {onclick} {class} aria-label="Copy to clipboard">
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" class="opacity-90">
                <path d="M9 9.75A2.25 2.25 0 0 1 11.25 7.5h6A2.25 2.25 0 0 1 19.5 9.75v6a2.25 2.25 0 0 1-2.25 2.25h-6A2.25 2.25 0 0 1 9 15.75v-6Z" stroke="currentColor" stroke-width="1.5"/>
                <path d="M6 14.25A2.25 2.25 0 0 1 3.75 12v-6A2.25 2.25 0 0 1 6 3.75h6A2.25 2.25 0 0 1 14.25 6" stroke="currentColor" stroke-width="1.5"/>
            </svg>
            { if *copied { "Copied" } else { "Copy" } }
        </button>
    }
}
