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

//! Documentation call-to-action with the one-liner example.

use yew::prelude::*;

use crate::components::copy_button::CopyButton;

const ONE_LINER: &str = "app.use(withBiometrics());";

#[function_component(DocsCta)]
pub fn docs_cta() -> Html {
    html! {
        <section id="docs" class="border-t border-white/10">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-12 sm:py-16">
                <div class="grid lg:grid-cols-2 gap-8 items-center">
                    <div class="space-y-4">
                        <h2 class="text-2xl sm:text-3xl font-semibold">{ "From zero to biometric in seconds" }</h2>
                        <p class="text-white/70 max-w-xl">{ "Initialize the SDK, wrap a route or provider, and you’re live. No password resets. No bot farms. No vendor lock-in—export your public keys anytime." }</p>
                        <div class="flex flex-wrap gap-2 text-sm">
                            <span class="rounded-full border border-white/10 bg-white/5 px-3 py-1 text-white/70">{ "TypeScript first" }</span>
                            <span class="rounded-full border border-white/10 bg-white/5 px-3 py-1 text-white/70">{ "Edge compatible" }</span>
                            <span class="rounded-full border border-white/10 bg-white/5 px-3 py-1 text-white/70">{ "Open standards" }</span>
                        </div>
                    </div>
                    <div class="rounded-2xl border border-white/10 bg-white/5 p-6">
                        <div class="text-sm text-white/70">{ "One-liner example" }</div>
                        <pre class="mt-3 rounded-lg border border-white/10 bg-black/60 p-4 text-sm text-white/90 overflow-auto">
                            <code>{ format!("// Protect everything in one go\n{ONE_LINER}") }</code>
                        </pre>
                        <div class="mt-3"><CopyButton text={ONE_LINER} /></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
