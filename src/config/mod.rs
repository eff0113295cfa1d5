// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod registry;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_config, load_config, Config, GreetingStep, PlanFormat, Variant,
};
pub use registry::GreeterRegistry;
pub use validation::validate_plan;
