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
pub struct ShieldIconProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Outline shield with a check mark, used on the security trust card.
#[function_component(ShieldIcon)]
pub fn shield_icon(props: &ShieldIconProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" aria-hidden="true" class={props.class.clone()}>
            <path d="M12 3l7 3v5c0 5.25-3.438 8.625-7 10-3.562-1.375-7-4.75-7-10V6l7-3Z" stroke="currentColor" stroke-width="1.5"/>
            <path d="M8.5 12.5l2.5 2.5 4.5-5" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>
        </svg>
    }
}
