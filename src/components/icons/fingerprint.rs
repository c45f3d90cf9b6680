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
pub struct FingerprintIconProps {
    #[prop_or_default]
    pub class: Classes,
}

/// The brand mark shown in the top bar.
#[function_component(FingerprintIcon)]
pub fn fingerprint_icon(props: &FingerprintIconProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" aria-hidden="true" class={props.class.clone()}>
            <path d="M12 3a7 7 0 0 0-7 7" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>
            <path d="M12 21c3 0 6-3 6-7a6 6 0 0 0-6-6 6 6 0 0 0-6 6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>
            <path d="M12 9a4 4 0 0 1 4 4c0 2.5-1 5-3 7" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>
            <path d="M12 9a4 4 0 0 0-4 4c0 1.7.6 3.4 1.8 5" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"/>
        </svg>
    }
}
