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
pub struct LightningIconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LightningIcon)]
pub fn lightning_icon(props: &LightningIconProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" aria-hidden="true" class={props.class.clone()}>
            <path d="M13 2L3 14h7l-1 8 11-14h-7l1-6Z" stroke="currentColor" stroke-width="1.5" stroke-linejoin="round"/>
        </svg>
    }
}
