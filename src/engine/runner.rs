// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sequential greeting plan runner.
//!
//! Steps run strictly in plan order on the calling thread. Each step writes
//! its greeter's line `repeat` times. An aborting step ends the process on
//! its first emission, so `run_plan` never returns for such a plan. An
//! aborting step whose greeter has no abort path fails the plan before
//! anything is written for that step.

use std::io::Write;
use std::time::Instant;

use crate::config::{Config, GreeterRegistry};
use crate::errors::RunError;
use crate::observability::messages::{engine::*, greeting::*, StructuredLog};

/// What a completed plan did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub steps: usize,
    pub lines: usize,
}

/// Run every step of `cfg` against `out`.
///
/// `source` names the plan in log output. The plan is expected to have
/// passed [`validate_plan`](crate::config::validate_plan). Since the
/// registry may serve any greeter for a variant, an `abort` step is checked
/// again against the greeter it resolves to and fails with
/// [`RunError::AbortNotSupported`] if that greeter cannot abort.
pub fn run_plan(
    source: &str,
    cfg: &Config,
    registry: &GreeterRegistry,
    out: &mut dyn Write,
) -> Result<RunSummary, RunError> {
    let started = PlanStarted {
        source,
        step_count: cfg.greetings.len(),
    };
    let span = started.span("run_plan");
    let _guard = span.enter();
    started.log();

    let start_time = Instant::now();
    let mut summary = RunSummary::default();

    for (index, step) in cfg.greetings.iter().enumerate() {
        let greeter = registry.get(step.variant);

        StepStarted {
            index,
            greeter: greeter.name(),
            repeat: step.repeat,
            abort: step.abort,
        }
        .log();

        if step.abort {
            if !greeter.supports_abort() {
                return Err(plan_failed(
                    source,
                    index,
                    RunError::AbortNotSupported {
                        step: index,
                        greeter: greeter.name(),
                    },
                ));
            }
            AbortRequested {
                greeter: greeter.name(),
            }
            .log();
        }

        for _ in 0..step.repeat {
            if let Err(source_err) = greeter.emit(out, step.abort) {
                return Err(plan_failed(
                    source,
                    index,
                    RunError::Write {
                        step: index,
                        greeter: greeter.name(),
                        source: source_err,
                    },
                ));
            }
            summary.lines += 1;
        }

        GreetingEmitted {
            greeter: greeter.name(),
            lines: step.repeat as usize,
        }
        .log();

        summary.steps += 1;
    }

    PlanCompleted {
        source,
        steps: summary.steps,
        lines: summary.lines,
        duration: start_time.elapsed(),
    }
    .log();

    Ok(summary)
}

fn plan_failed(source: &str, step: usize, err: RunError) -> RunError {
    PlanFailed {
        source,
        step,
        error: &err,
    }
    .log();
    err
}
