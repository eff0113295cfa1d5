// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for greeting plan loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// A single rule a greeting plan violates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The plan lists no greeting steps
    #[error("greeting plan has no steps")]
    EmptyPlan,

    /// A step repeats zero times or more than the allowed maximum
    #[error("step {step}: repeat {repeat} is outside 1..={max}")]
    RepeatOutOfRange { step: usize, repeat: u32, max: u32 },

    /// `abort: true` on a greeter without an abort path
    #[error("step {step}: greeter '{greeter}' does not support abort")]
    AbortNotSupported { step: usize, greeter: String },

    /// Steps follow an aborting step and can never run
    #[error("step {abort_step} aborts the process, so steps after it can never run ({unreachable} unreachable)")]
    UnreachableSteps { abort_step: usize, unreachable: usize },
}

/// Errors raised while loading a greeting plan from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read plan '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in '{path}': {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid TOML in '{path}': {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Only `.yaml`, `.yml` and `.toml` plans are understood
    #[error("unsupported plan format for '{path}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("plan validation failed:\n{}", join_lines(.0))]
    Validation(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_problem() {
        let err = ConfigError::Validation(vec![
            ValidationError::EmptyPlan,
            ValidationError::RepeatOutOfRange {
                step: 0,
                repeat: 0,
                max: 1000,
            },
        ]);

        assert_eq!(
            err.to_string(),
            "plan validation failed:\n  - greeting plan has no steps\n  - step 0: repeat 0 is outside 1..=1000"
        );
    }

    #[test]
    fn test_unsupported_format_names_the_file() {
        let err = ConfigError::UnsupportedFormat {
            path: PathBuf::from("plan.json"),
        };
        assert!(err.to_string().contains("plan.json"));
    }
}
