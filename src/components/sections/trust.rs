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

//! Trust section: three feature cards plus the testimonial block.

use yew::prelude::*;

use crate::components::icons::check::CheckIcon;
use crate::components::icons::lightning::LightningIcon;
use crate::components::icons::lock::LockIcon;
use crate::components::icons::shield::ShieldIcon;

fn check_line(text: &'static str) -> Html {
    html! {
        <li class="flex items-center gap-2">
            <CheckIcon class="h-4 w-4 text-emerald-400" />
            { text }
        </li>
    }
}

#[function_component(TrustSection)]
pub fn trust_section() -> Html {
    html! {
        <section id="security" class="border-t border-white/10">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-12 sm:py-16">
                <div class="grid lg:grid-cols-3 gap-8">
                    <div class="rounded-2xl border border-white/10 p-6 bg-white/5">
                        <div class="flex items-center gap-3">
                            <ShieldIcon class="h-6 w-6 text-cyan-300" />
                            <h3 class="font-semibold">{ "Security by default" }</h3>
                        </div>
                        <p class="mt-2 text-sm text-white/70">{ "FIDO2/WebAuthn-based passkeys. Phishing-resistant. No passwords to leak, no SMS to intercept." }</p>
                        <ul class="mt-3 space-y-2 text-sm text-white/70">
                            { check_line("End-to-end challenge signing") }
                            { check_line("Hardware-backed keys when available") }
                            { check_line("Encrypted at rest and in transit") }
                        </ul>
                    </div>
                    <div class="rounded-2xl border border-white/10 p-6 bg-white/5">
                        <div class="flex items-center gap-3">
                            <LightningIcon class="h-6 w-6 text-indigo-300" />
                            <h3 class="font-semibold">{ "One line, infinite scale" }</h3>
                        </div>
                        <p class="mt-2 text-sm text-white/70">{ "Drop-in middleware for servers and edge runtimes. Add auth without detours or boilerplate." }</p>
                        <ul class="mt-3 space-y-2 text-sm text-white/70">
                            { check_line("Works with Express, Next.js, SvelteKit") }
                            { check_line("Zero state machines or OAuth dances") }
                            { check_line("Edge-first global PoP") }
                        </ul>
                    </div>
                    <div class="rounded-2xl border border-white/10 p-6 bg-white/5">
                        <div class="flex items-center gap-3">
                            <LockIcon class="h-6 w-6 text-fuchsia-300" />
                            <h3 class="font-semibold">{ "Trust that compounds" }</h3>
                        </div>
                        <p class="mt-2 text-sm text-white/70">{ "Built for compliance from day one: audit trails, SSO for teams, and regional data residency." }</p>
                        <ul class="mt-3 space-y-2 text-sm text-white/70">
                            { check_line("SOC 2 Type II (in progress)") }
                            { check_line("GDPR and CCPA aligned") }
                            { check_line("No PII monetization") }
                        </ul>
                    </div>
                </div>
                <div class="mt-12 rounded-2xl border border-white/10 p-6 sm:p-8 bg-gradient-to-br from-white/5 to-transparent">
                    <div class="grid md:grid-cols-[2fr_1fr] gap-8 items-center">
                        <div>
                            <blockquote class="text-lg text-white/80">{ "“We replaced our patchwork of magic links and social OAuth with a single line. Sign-in success jumped 18% overnight.”" }</blockquote>
                            <div class="mt-4 text-sm text-white/60">{ "— Staff Engineer, Series B fintech" }</div>
                        </div>
                        <div class="flex items-center justify-center gap-6 opacity-80">
                            <div class="text-white/60 text-xs">{ "Backed by" }</div>
                            <div class="h-7 w-24 rounded bg-white/10"></div>
                            <div class="h-7 w-24 rounded bg-white/10"></div>
                            <div class="h-7 w-24 rounded bg-white/10"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
