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
pub struct ChevronIconProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Downward chevron; the accordion rotates it via a class while open.
#[function_component(ChevronIcon)]
pub fn chevron_icon(props: &ChevronIconProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" aria-hidden="true" class={props.class.clone()}>
            <path d="M6 9l6 6 6-6" stroke="currentColor" stroke-width="1.5"/>
        </svg>
    }
}
