// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};

/// A named source of greeting lines.
///
/// Implementations write exactly one line per `emit` call. Greeters that
/// support the abort path end the process instead of writing when `abort`
/// is set; the rest ignore the flag.
pub trait Greeter: Send + Sync {
    fn emit(&self, out: &mut dyn Write, abort: bool) -> io::Result<()>;

    fn name(&self) -> &'static str;

    fn supports_abort(&self) -> bool {
        false
    }
}
