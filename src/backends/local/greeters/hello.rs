// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};

use crate::greeting::HelloLib;
use crate::traits::Greeter;

/// Hello greeter - writes `Hello World!`, or aborts the process on request
pub struct HelloGreeter {
    lib: HelloLib,
}

impl HelloGreeter {
    pub fn new() -> Self {
        Self { lib: HelloLib::new() }
    }
}

impl Default for HelloGreeter {
    fn default() -> Self {
        Self::new()
    }
}

impl Greeter for HelloGreeter {
    fn emit(&self, out: &mut dyn Write, abort: bool) -> io::Result<()> {
        self.lib.greet_to(out, abort)
    }

    fn name(&self) -> &'static str {
        "hello"
    }

    fn supports_abort(&self) -> bool {
        true
    }
}
