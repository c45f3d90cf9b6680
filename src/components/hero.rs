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

//! Hero section: badge, headline, waitlist form, stats row, and the code
//! sample tabs.

use yew::prelude::*;

use crate::components::code_tabs::CodeTabs;
use crate::components::stat::Stat;
use crate::components::waitlist_form::WaitlistForm;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="relative">
            <div class="absolute inset-0 -z-10 opacity-30 pointer-events-none">
                <div class="absolute left-1/2 top-10 -translate-x-1/2 h-[480px] w-[900px] [filter:blur(60px)] bg-gradient-to-r from-cyan-400/20 via-indigo-400/20 to-fuchsia-400/20 rounded-full"></div>
            </div>
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 pt-10 pb-12 sm:pt-16 sm:pb-16">
                <div class="grid lg:grid-cols-2 gap-10 items-center">
                    <div>
                        <div class="inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-3 py-1 text-xs text-white/70">
                            <span class="inline-flex h-2 w-2 rounded-full bg-emerald-400"></span>
                            { "WebAuthn-native • Passkeys • Edge ready" }
                        </div>
                        <h1 class="mt-4 text-4xl sm:text-6xl font-semibold leading-tight">
                            { "Auth that disappears." }
                        </h1>
                        <p class="mt-4 text-white/70 text-lg max-w-xl">
                            { "Passwordless, biometric logins for developers. Drop in a single line and let users sign in with Face ID, Touch ID, or their device passkey." }
                        </p>
                        <WaitlistForm />
                        <div class="mt-8 grid grid-cols-3 gap-6 sm:max-w-md">
                            <Stat value="< 1 ms" label="SDK overhead" />
                            <Stat value=">99.99%" label="Uptime target" />
                            <Stat value="SOC 2" label="In progress" />
                        </div>
                    </div>
                    <div class="lg:pl-6">
                        <CodeTabs />
                    </div>
                </div>
            </div>
        </section>
    }
}
