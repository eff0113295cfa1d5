// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! All diagnostic and operational log lines in the crate are typed message
//! structs with a `Display` implementation, so no log text is scattered
//! through the code as magic strings.
//!
//! Log output goes to stderr (see `main.rs`). Standard output carries the
//! greeting lines and nothing else.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::greeting` - greeting emission and the abort path
//! * `messages::config` - plan loading and validation
//! * `messages::engine` - plan execution lifecycle
//!
//! # Usage
//!
//! ```rust
//! use nxm_hello::observability::messages::{greeting::GreetingEmitted, StructuredLog};
//!
//! GreetingEmitted {
//!     greeter: "hello",
//!     lines: 1,
//! }
//! .log();
//! ```

pub mod messages;
