// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for greeting plan execution.
//!
//! This module contains message types for logging events related to:
//! * Plan start and completion
//! * Individual step execution

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Plan execution started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use nxm_hello::observability::messages::engine::PlanStarted;
///
/// let msg = PlanStarted {
///     source: "plan.yaml",
///     step_count: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PlanStarted<'a> {
    pub source: &'a str,
    pub step_count: usize,
}

impl Display for PlanStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running greeting plan '{}': {} steps",
            self.source, self.step_count
        )
    }
}

impl StructuredLog for PlanStarted<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            step_count = self.step_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "plan",
            span_name = name,
            source = self.source,
            step_count = self.step_count,
        )
    }
}

/// A single plan step is about to run.
///
/// # Log Level
/// `debug!` - Per-step detail
pub struct StepStarted<'a> {
    pub index: usize,
    pub greeter: &'a str,
    pub repeat: u32,
    pub abort: bool,
}

impl Display for StepStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Step {}: '{}' x{}{}",
            self.index,
            self.greeter,
            self.repeat,
            if self.abort { " (abort)" } else { "" }
        )
    }
}

impl StructuredLog for StepStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            index = self.index,
            greeter = self.greeter,
            repeat = self.repeat,
            abort = self.abort,
            "{}", self
        );
    }
}

/// Plan execution completed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use nxm_hello::observability::messages::engine::PlanCompleted;
/// use std::time::Duration;
///
/// let msg = PlanCompleted {
///     source: "plan.yaml",
///     steps: 2,
///     lines: 4,
///     duration: Duration::from_millis(1),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PlanCompleted<'a> {
    pub source: &'a str,
    pub steps: usize,
    pub lines: usize,
    pub duration: std::time::Duration,
}

impl Display for PlanCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Greeting plan '{}' completed: {} steps, {} lines in {:?}",
            self.source, self.steps, self.lines, self.duration
        )
    }
}

impl StructuredLog for PlanCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            steps = self.steps,
            lines = self.lines,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}

/// Plan execution stopped on an error.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PlanFailed<'a> {
    pub source: &'a str,
    pub step: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for PlanFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Greeting plan '{}' failed at step {}: {}",
            self.source, self.step, self.error
        )
    }
}

impl StructuredLog for PlanFailed<'_> {
    fn log(&self) {
        tracing::error!(
            source = self.source,
            step = self.step,
            error = %self.error,
            "{}", self
        );
    }
}
