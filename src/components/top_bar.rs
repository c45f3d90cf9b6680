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

//! Navigation header: brand mark plus in-page anchor links.

use yew::prelude::*;

use crate::components::icons::fingerprint::FingerprintIcon;

#[function_component(TopBar)]
pub fn top_bar() -> Html {
    html! {
        <header class="relative z-10">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-5 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="h-8 w-8 rounded-lg bg-gradient-to-br from-cyan-400 to-indigo-500 flex items-center justify-center">
                        <FingerprintIcon class="h-5 w-5 text-black/90" />
                    </div>
                    <span class="font-semibold tracking-tight">{ "VanishAuth" }</span>
                </div>
                <div class="hidden sm:flex items-center gap-4 text-sm text-white/70">
                    <a href="#security" class="hover:text-white">{ "Security" }</a>
                    <a href="#docs" class="hover:text-white">{ "Docs" }</a>
                    <a href="#faqs" class="hover:text-white">{ "FAQ" }</a>
                    <a href="#waitlist" class="rounded-md bg-white/10 px-3 py-1.5 hover:bg-white/20 border border-white/10">{ "Join waitlist" }</a>
                </div>
            </div>
        </header>
    }
}
