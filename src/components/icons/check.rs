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
pub struct CheckIconProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Check mark used in trust-card bullet lists and on the joined waitlist
/// button.
#[function_component(CheckIcon)]
pub fn check_icon(props: &CheckIconProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" aria-hidden="true" class={props.class.clone()}>
            <path d="M20 7L9 18l-5-5" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"/>
        </svg>
    }
}
