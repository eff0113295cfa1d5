// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod hello;
pub mod hello_small;

pub use hello::*;
pub use hello_small::*;
