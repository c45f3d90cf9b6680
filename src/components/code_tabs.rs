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

//! Tab strip of install commands and usage snippets, one per supported
//! integration.

use yew::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::constants::{sample_by_key, CODE_SAMPLES};

/// Fixed set of code samples behind a shared active-tab selector.
///
/// Exactly one tab is active at a time; the displayed install command and
/// snippet are pure lookups against the static sample list, so there is no
/// per-tab state to keep consistent. Re-selecting the active tab is a no-op.
#[function_component(CodeTabs)]
pub fn code_tabs() -> Html {
    let active = use_state_eq(|| CODE_SAMPLES[0].key);
    let current = sample_by_key(*active);

    let tabs = CODE_SAMPLES
        .iter()
        .map(|sample| {
            let class = if sample.key == *active {
                "px-3 py-1.5 rounded-md text-sm transition border bg-cyan-500/20 text-cyan-300 border-cyan-400/30"
            } else {
                "px-3 py-1.5 rounded-md text-sm transition border bg-white/5 text-white/70 border-white/10 hover:bg-white/10"
            };
            let onclick = {
                let active = active.clone();
                let key = sample.key;
                Callback::from(move |_: MouseEvent| active.set(key))
            };
            html! {
                <button key={sample.key} data-tab={sample.key} {class} {onclick}>
                    { sample.label }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="w-full rounded-2xl border border-white/10 bg-gradient-to-b from-white/5 to-transparent p-4 sm:p-6 backdrop-blur">
            <div class="flex flex-wrap items-center justify-between gap-3">
                <div class="flex flex-wrap items-center gap-2">
                    { tabs }
                </div>
                <div class="flex items-center gap-2">
                    <span class="text-xs text-white/60 select-all hidden sm:inline">{ current.install }</span>
                    <CopyButton text={current.install} small={true} />
                </div>
            </div>
            <div class="mt-4 rounded-lg border border-white/10 bg-black/60">
                <div class="flex items-center justify-between px-3 py-2 border-b border-white/10 text-xs text-white/60">
                    <span>{ "Snippet" }</span>
                    <CopyButton text={current.code} small={true} />
                </div>
                <pre class="overflow-auto p-4 text-sm leading-relaxed text-white/90">
                    <code>{ current.code }</code>
                </pre>
            </div>
        </div>
    }
}
