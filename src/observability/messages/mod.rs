// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its own level with structured fields.
//!
//! # Usage Pattern
//!
//! ```rust
//! use nxm_hello::observability::messages::engine::PlanStarted;
//!
//! let msg = PlanStarted {
//!     source: "plan.yaml",
//!     step_count: 2,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod config;
pub mod engine;
pub mod greeting;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span {
        tracing::info_span!("message", span_name = name)
    }
}
