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

pub mod code_tabs;
pub mod copy_button;
pub mod disclosure;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod sections;
pub mod stat;
pub mod top_bar;
pub mod waitlist_form;
