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

/// The social networks linked from the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    X,
    GitHub,
    LinkedIn,
}

impl SocialKind {
    fn label(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::GitHub => "gh",
            Self::LinkedIn => "li",
        }
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct SocialIconProps {
    pub kind: SocialKind,
}

/// Footer social link. The targets are placeholders until the accounts
/// exist.
#[function_component(SocialIcon)]
pub fn social_icon(props: &SocialIconProps) -> Html {
    let glyph = match props.kind {
        SocialKind::X => html! {
            <svg viewBox="0 0 24 24" class="h-5 w-5" fill="currentColor" aria-hidden="true">
                <path d="M18.146 3H21l-6.5 7.43L22 21h-5.938l-4.64-5.588L5.9 21H3l7.02-8.02L2 3h6.062l4.18 5.226L18.146 3Zm-2.08 16h1.155L8.013 5H6.79l9.276 14Z"/>
            </svg>
        },
        SocialKind::GitHub => html! {
            <svg viewBox="0 0 24 24" class="h-5 w-5" fill="currentColor" aria-hidden="true">
                <path fill-rule="evenodd" clip-rule="evenodd" d="M12 .5A11.5 11.5 0 0 0 .5 12.4c0 5.25 3.4 9.7 8.1 11.27.6.1.82-.27.82-.58v-2.1c-3.3.74-4-1.44-4-1.44-.55-1.43-1.34-1.81-1.34-1.81-1.1-.78.08-.76.08-.76 1.22.09 1.87 1.28 1.87 1.28 1.08 1.9 2.84 1.35 3.53 1.04.1-.8.43-1.35.78-1.66-2.64-.3-5.42-1.36-5.42-6.04 0-1.34.46-2.44 1.23-3.3-.12-.3-.54-1.52.12-3.17 0 0 1-.33 3.3 1.25a11.3 11.3 0 0 1 6 0C17 4.8 18 5.14 18 5.14c.66 1.65.24 2.87.12 3.17.77.86 1.23 1.96 1.23 3.3 0 4.7-2.79 5.73-5.45 6.03.44.38.84 1.12.84 2.27v3.36c0 .32.22.68.83.57A11.5 11.5 0 0 0 23.5 12.4C23.5 5.93 18.07.5 12 .5Z"/>
            </svg>
        },
        SocialKind::LinkedIn => html! {
            <svg viewBox="0 0 24 24" class="h-5 w-5" fill="currentColor" aria-hidden="true">
                <path d="M4.98 3.5C4.98 4.88 3.86 6 2.5 6S0 4.88 0 3.5 1.12 1 2.5 1s2.48 1.12 2.48 2.5zM0 8.98h5V24H0V8.98zM8.98 8.98H14v2.05h.08c.71-1.34 2.45-2.76 5.05-2.76 5.4 0 6.4 3.56 6.4 8.18V24h-5v-6.8c0-1.62-.03-3.7-2.25-3.7-2.25 0-2.6 1.76-2.6 3.58V24h-5V8.98z"/>
            </svg>
        },
    };

    html! {
        <a href="#" class="hover:text-white" aria-label={props.kind.label()}>
            { glyph }
        </a>
    }
}
