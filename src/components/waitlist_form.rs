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

//! Email capture form for the early-access waitlist.
//!
//! Submission is simulated entirely client-side with a fixed delay; nothing
//! leaves the page.

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::icons::check::CheckIcon;
use crate::constants::{is_valid_email, WAITLIST_SUBMIT_DELAY_MS};

/// Controlled email input plus a submit button that walks
/// idle → subscribing → joined.
///
/// An address failing the email check is ignored without feedback beyond the
/// browser-native hinting already on the input. Joined is terminal for the
/// session: the button stays disabled and there is no reset path. The
/// consent checkbox is independent state and never gates submission.
#[function_component(WaitlistForm)]
pub fn waitlist_form() -> Html {
    let email = use_state(String::new);
    let loading = use_state(|| false);
    let submitted = use_state(|| false);
    let consent = use_state(|| true);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let loading = loading.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !is_valid_email(&email) {
                return;
            }
            loading.set(true);
            let loading = loading.clone();
            let submitted = submitted.clone();
            Timeout::new(WAITLIST_SUBMIT_DELAY_MS, move || {
                loading.set(false);
                submitted.set(true);
            })
            .forget();
        })
    };

    let on_consent_toggle = {
        let consent = consent.clone();
        Callback::from(move |_: Event| consent.set(!*consent))
    };

    html! {
        <>
            <form {onsubmit} id="waitlist" class="mt-8 flex flex-col sm:flex-row gap-3 max-w-xl">
                <input
                    type="email"
                    required={true}
                    value={(*email).clone()}
                    {oninput}
                    placeholder="you@company.com"
                    class="flex-1 rounded-md bg-white/5 border border-white/10 px-4 py-3 text-white placeholder-white/40 focus:outline-none focus:ring-2 focus:ring-cyan-400/50"
                />
                <button
                    type="submit"
                    disabled={*loading || *submitted}
                    class="inline-flex items-center justify-center gap-2 rounded-md bg-gradient-to-r from-cyan-400 to-indigo-500 px-5 py-3 font-medium text-black hover:opacity-95 disabled:opacity-60"
                >
                    {
                        if *submitted {
                            html! { <><CheckIcon class="h-5 w-5" />{ "Joined" }</> }
                        } else if *loading {
                            html! {
                                <>
                                    <span class="h-4 w-4 animate-spin rounded-full border-2 border-black/50 border-t-transparent"></span>
                                    { "Subscribing…" }
                                </>
                            }
                        } else {
                            html! { { "Get early access" } }
                        }
                    }
                </button>
            </form>
            <div class="mt-3 flex items-start gap-3 text-xs text-white/50">
                <input
                    id="consent"
                    type="checkbox"
                    checked={*consent}
                    onchange={on_consent_toggle}
                    class="mt-0.5 h-4 w-4 rounded border-white/20 bg-white/5"
                />
                <label for="consent">{ "I agree to receive occasional product updates. We’ll never sell your data." }</label>
            </div>
        </>
    }
}
