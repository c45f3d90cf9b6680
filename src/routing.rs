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
use yew_router::prelude::*;

use crate::pages::home::Home;

/// Routes served by the landing site. Everything lives on `/`; in-page
/// navigation is anchor-based (`#security`, `#docs`, `#faqs`, `#waitlist`).
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-neutral-950 text-white">
                <h1 class="text-4xl font-semibold">{ "404" }</h1>
            </div>
        },
    }
}
