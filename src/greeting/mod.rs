// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The greeting operations.
//!
//! `HelloLib` is stateless. Its two operations write a fixed line to
//! standard output; `greet` additionally aborts the process when asked to.
//! Every operation has a `*_to` twin that writes into any `io::Write`, which
//! is what the stdout-facing versions delegate to.
//!
//! The success and abort paths emit no log events, so stdout carries the
//! greeting line only, whatever subscriber is installed. Callers log around
//! these calls.

use std::io::{self, Write};

use crate::observability::messages::{greeting::*, StructuredLog};

/// Line written by [`HelloLib::greet`].
pub const HELLO_WORLD: &str = "Hello World!";

/// Line written by [`HelloLib::greet_small`].
pub const HELLO_SMALL_WORLD: &str = "Hello Small World!";

/// Stateless greeting emitter.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelloLib;

impl HelloLib {
    pub fn new() -> Self {
        Self
    }

    /// Write `Hello World!` to stdout, or abort the process if `abort` is set.
    ///
    /// The abort path never returns and never touches stdout. Pending output
    /// is not flushed and no destructors run.
    ///
    /// A failed console write is logged and otherwise ignored.
    pub fn greet(&self, abort: bool) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(error) = self.greet_to(&mut out, abort) {
            GreetingWriteFailed {
                greeting: HELLO_WORLD,
                error: &error,
            }
            .log();
        }
    }

    /// Write `Hello Small World!` to stdout.
    ///
    /// A failed console write is logged and otherwise ignored.
    pub fn greet_small(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(error) = self.greet_small_to(&mut out) {
            GreetingWriteFailed {
                greeting: HELLO_SMALL_WORLD,
                error: &error,
            }
            .log();
        }
    }

    /// Writer-generic form of [`greet`](Self::greet).
    ///
    /// The abort check happens before a single byte is written.
    pub fn greet_to<W: Write + ?Sized>(&self, out: &mut W, abort: bool) -> io::Result<()> {
        if abort {
            std::process::abort();
        }

        write_line(out, HELLO_WORLD)
    }

    /// Writer-generic form of [`greet_small`](Self::greet_small).
    pub fn greet_small_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_line(out, HELLO_SMALL_WORLD)
    }
}

// One line, then flush, so each call is visible before it returns.
fn write_line<W: Write + ?Sized>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that fails every operation.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    /// Writer that records how often it was flushed.
    #[derive(Default)]
    struct CountingFlush {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for CountingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_greet_without_abort_writes_hello_world_once() {
        let mut out = Vec::new();
        HelloLib::new().greet_to(&mut out, false).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Hello World!\n");
    }

    #[test]
    fn test_greet_small_writes_small_line() {
        let mut out = Vec::new();
        HelloLib::new().greet_small_to(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Hello Small World!\n");
    }

    #[test]
    fn test_greet_small_three_times_repeats_in_order() {
        let lib = HelloLib::new();
        let mut out = Vec::new();
        for _ in 0..3 {
            lib.greet_small_to(&mut out).unwrap();
        }

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello Small World!\nHello Small World!\nHello Small World!\n"
        );
    }

    #[test]
    fn test_each_greeting_flushes() {
        let lib = HelloLib::new();
        let mut out = CountingFlush::default();
        lib.greet_to(&mut out, false).unwrap();
        lib.greet_small_to(&mut out).unwrap();

        assert_eq!(out.flushes, 2);
        assert_eq!(out.data, b"Hello World!\nHello Small World!\n");
    }

    #[test]
    fn test_write_failure_is_reported_by_writer_variant() {
        let err = HelloLib::new().greet_to(&mut BrokenPipe, false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err = HelloLib::new().greet_small_to(&mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_greetings_are_fixed_literals() {
        assert_eq!(HELLO_WORLD, "Hello World!");
        assert_eq!(HELLO_SMALL_WORLD, "Hello Small World!");
    }
}
