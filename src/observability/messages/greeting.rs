// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for greeting emission and the abort path.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A greeter wrote and flushed its line(s).
///
/// # Log Level
/// `debug!` - Per-step detail
///
/// # Example
/// ```
/// use nxm_hello::observability::messages::greeting::GreetingEmitted;
///
/// let msg = GreetingEmitted {
///     greeter: "hello_small",
///     lines: 3,
/// };
///
/// assert_eq!(msg.to_string(), "Greeter 'hello_small' emitted 3 line(s)");
/// ```
pub struct GreetingEmitted<'a> {
    pub greeter: &'a str,
    pub lines: usize,
}

impl Display for GreetingEmitted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Greeter '{}' emitted {} line(s)", self.greeter, self.lines)
    }
}

impl StructuredLog for GreetingEmitted<'_> {
    fn log(&self) {
        tracing::debug!(
            greeter = self.greeter,
            lines = self.lines,
            "{}", self
        );
    }
}

/// The caller asked for the abort path; the process is about to end.
///
/// Logged by callers of the abort path, never by the greeting operation
/// itself.
///
/// # Log Level
/// `warn!` - Last line before abnormal termination
///
/// # Example
/// ```
/// use nxm_hello::observability::messages::greeting::AbortRequested;
///
/// let msg = AbortRequested { greeter: "hello" };
/// assert_eq!(
///     msg.to_string(),
///     "Abort requested by greeter 'hello', terminating process"
/// );
/// ```
pub struct AbortRequested<'a> {
    pub greeter: &'a str,
}

impl Display for AbortRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Abort requested by greeter '{}', terminating process",
            self.greeter
        )
    }
}

impl StructuredLog for AbortRequested<'_> {
    fn log(&self) {
        tracing::warn!(greeter = self.greeter, "{}", self);
    }
}

/// Writing a greeting to the console failed.
///
/// # Log Level
/// `warn!` - The stdout-facing operations report no errors, so this is the
/// only trace of the failure.
///
/// # Example
/// ```
/// use nxm_hello::observability::messages::greeting::GreetingWriteFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
/// let msg = GreetingWriteFailed {
///     greeting: "Hello World!",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct GreetingWriteFailed<'a> {
    pub greeting: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for GreetingWriteFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to write '{}': {}", self.greeting, self.error)
    }
}

impl StructuredLog for GreetingWriteFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            greeting = self.greeting,
            error = %self.error,
            "{}", self
        );
    }
}
