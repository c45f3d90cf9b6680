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

//! The landing page: fixed sections composed top to bottom.

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::sections::docs_cta::DocsCta;
use crate::components::sections::faq::FaqSection;
use crate::components::sections::trust::TrustSection;
use crate::components::top_bar::TopBar;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="min-h-screen w-full bg-[radial-gradient(1200px_600px_at_50%_-10%,rgba(34,211,238,0.15),transparent),radial-gradient(800px_400px_at_10%_10%,rgba(99,102,241,0.12),transparent)] bg-neutral-950 text-white selection:bg-cyan-400/30">
            <TopBar />
            <Hero />
            <TrustSection />
            <DocsCta />
            <FaqSection />
            <Footer />
        </div>
    }
}
