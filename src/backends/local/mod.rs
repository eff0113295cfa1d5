// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod greeters;
pub mod factory;

pub use greeters::*;
pub use factory::LocalGreeterFactory;
