// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while running a greeting plan.
#[derive(Error, Debug)]
pub enum RunError {
    /// A greeter failed to write its line
    #[error("step {step}: greeter '{greeter}' failed to write: {source}")]
    Write {
        step: usize,
        greeter: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// An aborting step resolved to a greeter with no abort path
    #[error("step {step}: greeter '{greeter}' cannot abort the process")]
    AbortNotSupported { step: usize, greeter: &'static str },
}
