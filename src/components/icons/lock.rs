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
pub struct LockIconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LockIcon)]
pub fn lock_icon(props: &LockIconProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" aria-hidden="true" class={props.class.clone()}>
            <rect x="4" y="10" width="16" height="10" rx="2" stroke="currentColor" stroke-width="1.5"/>
            <path d="M8 10V7a4 4 0 0 1 8 0v3" stroke="currentColor" stroke-width="1.5"/>
        </svg>
    }
}
