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

//! Footer: copyright line, anchor nav, and social links.

use yew::prelude::*;

use crate::components::icons::social::{SocialIcon, SocialKind};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="border-t border-white/10">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-10 flex flex-col sm:flex-row items-center justify-between gap-6">
                <div class="flex items-center gap-3">
                    <div class="h-7 w-7 rounded bg-gradient-to-br from-cyan-400 to-indigo-500"></div>
                    <div class="text-white/70 text-sm">{ format!("© {year} VanishAuth") }</div>
                </div>
                <div class="flex items-center gap-4 text-white/60 text-sm">
                    <a href="#security" class="hover:text-white">{ "Security" }</a>
                    <a href="#docs" class="hover:text-white">{ "Docs" }</a>
                    <a href="#faqs" class="hover:text-white">{ "FAQ" }</a>
                    <a href="#waitlist" class="hover:text-white">{ "Join waitlist" }</a>
                </div>
                <div class="flex items-center gap-3 text-white/60">
                    <SocialIcon kind={SocialKind::X} />
                    <SocialIcon kind={SocialKind::GitHub} />
                    <SocialIcon kind={SocialKind::LinkedIn} />
                </div>
            </div>
        </footer>
    }
}
