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

//! Inline SVG icon components. All of them are stateless: props in,
//! markup out.

pub mod check;
pub mod chevron;
pub mod fingerprint;
pub mod lightning;
pub mod lock;
pub mod shield;
pub mod social;
