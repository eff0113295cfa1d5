// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for greeting plan loading and validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A greeting plan was parsed from disk.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use nxm_hello::observability::messages::config::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     path: "plan.yaml",
///     format: "yaml",
///     step_count: 2,
/// };
///
/// assert_eq!(msg.to_string(), "Loaded yaml plan 'plan.yaml' with 2 steps");
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
    pub step_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} plan '{}' with {} steps",
            self.format, self.path, self.step_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            format = self.format,
            step_count = self.step_count,
            "{}", self
        );
    }
}

/// A greeting plan failed validation.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use nxm_hello::observability::messages::config::ConfigValidationFailed;
///
/// let problems = vec!["greeting plan has no steps".to_string()];
/// let msg = ConfigValidationFailed {
///     path: "plan.yaml",
///     problems: &problems,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ConfigValidationFailed<'a> {
    pub path: &'a str,
    pub problems: &'a [String],
}

impl Display for ConfigValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Plan '{}' failed validation with {} problem(s): {}",
            self.path,
            self.problems.len(),
            self.problems.join("; ")
        )
    }
}

impl StructuredLog for ConfigValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            path = self.path,
            problem_count = self.problems.len(),
            "{}", self
        );
    }
}
