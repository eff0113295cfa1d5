// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};

use crate::greeting::HelloLib;
use crate::traits::Greeter;

/// Small hello greeter - always writes `Hello Small World!`
pub struct HelloSmallGreeter {
    lib: HelloLib,
}

impl HelloSmallGreeter {
    pub fn new() -> Self {
        Self { lib: HelloLib::new() }
    }
}

impl Default for HelloSmallGreeter {
    fn default() -> Self {
        Self::new()
    }
}

impl Greeter for HelloSmallGreeter {
    // No abort path; the flag is ignored.
    fn emit(&self, out: &mut dyn Write, _abort: bool) -> io::Result<()> {
        self.lib.greet_small_to(out)
    }

    fn name(&self) -> &'static str {
        "hello_small"
    }
}
