// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Greeter backend implementations.
//!
//! Each backend implements the `Greeter` trait and is instantiated through a
//! factory keyed by the plan's `Variant`.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process greeters wrapping [`HelloLib`](crate::greeting::HelloLib):
//! - **hello**: `Hello World!`, with the abort path
//! - **hello_small**: `Hello Small World!`
//!
//! ## Stub Backend (Test-Only)
//! - **FailingGreeter**: every write fails, for error propagation tests
//! - **Note**: NOT available in production builds
//!
//! # Example
//! ```rust
//! use nxm_hello::backends::local::LocalGreeterFactory;
//! use nxm_hello::config::Variant;
//!
//! let greeter = LocalGreeterFactory::create_greeter(Variant::HelloSmall);
//! let mut out = Vec::new();
//! greeter.emit(&mut out, false)?;
//! assert_eq!(out, b"Hello Small World!\n");
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
