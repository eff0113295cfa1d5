// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Greeting plan validation.
//!
//! Checks run over every step and all problems are collected, so a plan
//! author sees the complete list in one pass:
//!
//! 1. The plan has at least one step
//! 2. Each `repeat` lies in `1..=MAX_REPEAT`
//! 3. `abort` is only set on greeters that support it
//! 4. No step follows an aborting step
//!
//! # Example
//! ```rust
//! use nxm_hello::config::{validate_plan, Config, GreetingStep, Variant};
//!
//! let config = Config {
//!     log_level: "info".to_string(),
//!     greetings: vec![GreetingStep {
//!         variant: Variant::HelloSmall,
//!         abort: false,
//!         repeat: 3,
//!     }],
//! };
//!
//! assert!(validate_plan(&config).is_ok());
//! ```

use crate::config::consts::MAX_REPEAT;
use crate::config::{Config, Variant};
use crate::errors::ValidationError;

/// Validate a greeting plan, returning every problem found.
pub fn validate_plan(cfg: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if cfg.greetings.is_empty() {
        errors.push(ValidationError::EmptyPlan);
    }

    for (step, greeting) in cfg.greetings.iter().enumerate() {
        if greeting.repeat == 0 || greeting.repeat > MAX_REPEAT {
            errors.push(ValidationError::RepeatOutOfRange {
                step,
                repeat: greeting.repeat,
                max: MAX_REPEAT,
            });
        }

        if greeting.abort && greeting.variant != Variant::Hello {
            errors.push(ValidationError::AbortNotSupported {
                step,
                greeter: greeting.variant.as_str().to_string(),
            });
        }
    }

    // Anything after the first abort is dead.
    if let Some(abort_step) = cfg.greetings.iter().position(|g| g.abort) {
        let unreachable = cfg.greetings.len() - abort_step - 1;
        if unreachable > 0 {
            errors.push(ValidationError::UnreachableSteps {
                abort_step,
                unreachable,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GreetingStep;

    fn step(variant: Variant, abort: bool, repeat: u32) -> GreetingStep {
        GreetingStep {
            variant,
            abort,
            repeat,
        }
    }

    fn plan(greetings: Vec<GreetingStep>) -> Config {
        Config {
            log_level: "info".to_string(),
            greetings,
        }
    }

    #[test]
    fn test_valid_plan_passes() {
        let cfg = plan(vec![
            step(Variant::Hello, false, 1),
            step(Variant::HelloSmall, false, 3),
            step(Variant::Hello, true, 1),
        ]);
        assert!(validate_plan(&cfg).is_ok());
    }

    #[test]
    fn test_empty_plan() {
        let errors = validate_plan(&plan(vec![])).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyPlan]);
    }

    #[test]
    fn test_repeat_bounds() {
        let cfg = plan(vec![
            step(Variant::Hello, false, 0),
            step(Variant::HelloSmall, false, MAX_REPEAT),
            step(Variant::HelloSmall, false, MAX_REPEAT + 1),
        ]);

        let errors = validate_plan(&cfg).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::RepeatOutOfRange {
                    step: 0,
                    repeat: 0,
                    max: MAX_REPEAT
                },
                ValidationError::RepeatOutOfRange {
                    step: 2,
                    repeat: MAX_REPEAT + 1,
                    max: MAX_REPEAT
                },
            ]
        );
    }

    #[test]
    fn test_abort_only_on_hello() {
        let cfg = plan(vec![step(Variant::HelloSmall, true, 1)]);

        let errors = validate_plan(&cfg).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::AbortNotSupported {
                step: 0,
                greeter: "hello_small".to_string(),
            }]
        );
    }

    #[test]
    fn test_steps_after_abort_are_unreachable() {
        let cfg = plan(vec![
            step(Variant::Hello, true, 1),
            step(Variant::HelloSmall, false, 1),
            step(Variant::Hello, false, 1),
        ]);

        let errors = validate_plan(&cfg).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnreachableSteps {
                abort_step: 0,
                unreachable: 2,
            }]
        );
    }

    #[test]
    fn test_all_problems_are_collected() {
        let cfg = plan(vec![
            step(Variant::HelloSmall, true, 0),
            step(Variant::Hello, false, 1),
        ]);

        let errors = validate_plan(&cfg).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
