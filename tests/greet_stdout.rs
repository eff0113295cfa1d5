// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `HelloLib` under a stock `tracing_subscriber::fmt()` subscriber, which
//! logs to stdout.
//!
//! Each case runs in a child copy of this binary (no libtest harness, so the
//! child's stdout holds only what `HelloLib` and the subscriber write).

use std::process::{Command, Output};

use nxm_hello::greeting::HelloLib;

const CHILD_MODE_ENV: &str = "NXM_HELLO_GREET_CHILD";

fn main() {
    if let Ok(mode) = std::env::var(CHILD_MODE_ENV) {
        run_child(&mode);
        return;
    }

    test_abort_writes_nothing_to_stdout();
    test_greet_writes_only_its_line();
    test_greet_small_writes_only_its_line();
    println!("greet_stdout: 3 passed");
}

fn run_child(mode: &str) {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stdout)
        .init();

    let lib = HelloLib::new();
    match mode {
        "abort" => lib.greet(true),
        "greet" => lib.greet(false),
        "small" => lib.greet_small(),
        other => panic!("unknown child mode '{}'", other),
    }
}

fn spawn_child(mode: &str) -> Output {
    let exe = std::env::current_exe().expect("current test binary");
    Command::new(exe)
        .env(CHILD_MODE_ENV, mode)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn child")
}

fn test_abort_writes_nothing_to_stdout() {
    let output = spawn_child("abort");

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "",
        "greet(true) must leave stdout empty"
    );

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.signal(), Some(6), "expected SIGABRT");
    }
}

fn test_greet_writes_only_its_line() {
    let output = spawn_child("greet");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello World!\n");
}

fn test_greet_small_writes_only_its_line() {
    let output = spawn_child("small");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello Small World!\n");
}
