// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};

use crate::traits::Greeter;

/// A greeter whose every write fails, for testing error propagation
pub struct FailingGreeter;

impl Greeter for FailingGreeter {
    fn emit(&self, _out: &mut dyn Write, _abort: bool) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
