// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use nxm_hello::config::{load_and_validate_config, GreeterRegistry};
use nxm_hello::engine::run_plan;
use nxm_hello::greeting::HelloLib;
use nxm_hello::observability::messages::{greeting::*, StructuredLog};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

/// nxm-hello - the hello / hello-small greeting demo
#[derive(Parser, Debug)]
#[command(name = "nxm-hello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Subcommand to run (default: `hello` then `small`)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug-level log output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print "Hello World!", or abort the process
    Hello {
        /// Abort the process instead of greeting
        #[arg(long)]
        abort: bool,
    },

    /// Print "Hello Small World!"
    Small {
        /// How many times to greet
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },

    /// Run a greeting plan from a YAML or TOML file
    Run {
        /// Plan file (.yaml, .yml or .toml)
        plan: PathBuf,
    },
}

type FilterHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

/// Logs go to stderr; stdout carries greeting lines only.
fn init_tracing(verbose: bool) -> FilterHandle {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();

    handle
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter_handle = init_tracing(cli.verbose);
    let lib = HelloLib::new();

    match cli.command {
        None => {
            lib.greet(false);
            emitted("hello", 1);
            lib.greet_small();
            emitted("hello_small", 1);
        }
        Some(Commands::Hello { abort }) => {
            // Logged here, on stderr, since greet(true) never returns.
            if abort {
                AbortRequested { greeter: "hello" }.log();
            }
            lib.greet(abort);
            emitted("hello", 1);
        }
        Some(Commands::Small { count }) => {
            for _ in 0..count {
                lib.greet_small();
            }
            emitted("hello_small", count as usize);
        }
        Some(Commands::Run { plan }) => {
            run_plan_file(&plan, cli.verbose, &filter_handle)?;
        }
    }

    Ok(())
}

fn emitted(greeter: &str, lines: usize) {
    GreetingEmitted { greeter, lines }.log();
}

fn run_plan_file(plan: &Path, verbose: bool, filter_handle: &FilterHandle) -> anyhow::Result<()> {
    let config = load_and_validate_config(plan)
        .with_context(|| format!("Failed to load greeting plan '{}'", plan.display()))?;

    // RUST_LOG and --verbose win over the plan's own level.
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() && !verbose {
        let filter = EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("Invalid log_level '{}'", config.log_level))?;
        filter_handle
            .reload(filter)
            .context("Failed to apply plan log level")?;
    }

    let source = plan.display().to_string();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_plan(&source, &config, &GreeterRegistry::new(), &mut out)
        .with_context(|| format!("Greeting plan '{}' failed", source))?;

    tracing::debug!(steps = summary.steps, lines = summary.lines, "Plan summary");
    Ok(())
}
