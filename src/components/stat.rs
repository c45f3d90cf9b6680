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

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct StatProps {
    pub value: String,
    pub label: String,
}

/// Value/label pair in the hero stats row.
#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    html! {
        <div class="flex flex-col items-start">
            <div class="text-2xl sm:text-3xl font-semibold text-white">{ &props.value }</div>
            <div class="text-xs sm:text-sm text-white/60">{ &props.label }</div>
        </div>
    }
}
