// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::local::LocalGreeterFactory;
use crate::config::Variant;
use crate::traits::Greeter;

/// Resolves plan variants into greeter instances.
///
/// Every variant always has a greeter, so lookups cannot miss.
#[derive(Clone)]
pub struct GreeterRegistry {
    hello: Arc<dyn Greeter>,
    hello_small: Arc<dyn Greeter>,
}

impl GreeterRegistry {
    /// Registry backed by the local greeters
    pub fn new() -> Self {
        Self {
            hello: LocalGreeterFactory::create_greeter(Variant::Hello),
            hello_small: LocalGreeterFactory::create_greeter(Variant::HelloSmall),
        }
    }

    /// Replace the greeter serving `variant`
    pub fn with_greeter(mut self, variant: Variant, greeter: Arc<dyn Greeter>) -> Self {
        match variant {
            Variant::Hello => self.hello = greeter,
            Variant::HelloSmall => self.hello_small = greeter,
        }
        self
    }

    pub fn get(&self, variant: Variant) -> &Arc<dyn Greeter> {
        match variant {
            Variant::Hello => &self.hello,
            Variant::HelloSmall => &self.hello_small,
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        vec![self.hello.name(), self.hello_small.name()]
    }
}

impl Default for GreeterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
