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

//! FAQ accordion over the static question list.

use yew::prelude::*;

use crate::components::disclosure::Disclosure;
use crate::constants::FAQ_ITEMS;

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section id="faqs" class="border-t border-white/10">
            <div class="mx-auto max-w-5xl px-4 sm:px-6 lg:px-8 py-12 sm:py-16">
                <h2 class="text-2xl sm:text-3xl font-semibold">{ "Frequently asked questions" }</h2>
                <div class="mt-6 divide-y divide-white/10 rounded-2xl border border-white/10 overflow-hidden">
                    {
                        FAQ_ITEMS
                            .iter()
                            .map(|item| html! {
                                <Disclosure
                                    key={item.question}
                                    question={item.question}
                                    answer={item.answer}
                                />
                            })
                            .collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
