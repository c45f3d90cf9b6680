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

//! Single FAQ accordion row.

use yew::prelude::*;

use crate::components::icons::chevron::ChevronIcon;

#[derive(Properties, Debug, PartialEq)]
pub struct DisclosureProps {
    pub question: String,
    pub answer: String,
}

/// Collapsible question/answer row. Starts closed; clicking the header
/// toggles it. Rows are independent of each other, there is no
/// single-open-at-a-time constraint.
#[function_component(Disclosure)]
pub fn disclosure(props: &DisclosureProps) -> Html {
    let open = use_state(|| false);

    let onclick = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="bg-white/[0.03]">
            <button {onclick} class="w-full flex items-center justify-between px-4 py-4 sm:px-6 text-left">
                <span class="font-medium">{ &props.question }</span>
                <ChevronIcon class={if *open { "h-5 w-5 transition rotate-180" } else { "h-5 w-5 transition" }} />
            </button>
            if *open {
                <div class="px-4 sm:px-6 pb-4 -mt-2 text-white/70 text-sm">{ &props.answer }</div>
            }
        </div>
    }
}
