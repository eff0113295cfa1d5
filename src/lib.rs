// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // greeter backends
pub mod config;        // greeting plans + loader
pub mod engine;        // plan runner
pub mod errors;        // error handling
pub mod greeting;      // the greeting operations
pub mod observability;
pub mod traits;        // greeter abstraction
