// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::greeters::*;
use crate::config::Variant;
use crate::traits::Greeter;

/// Factory for creating local (in-process) greeter instances
pub struct LocalGreeterFactory;

impl LocalGreeterFactory {
    /// Create the greeter for a plan variant
    ///
    /// - `hello` -> HelloGreeter
    /// - `hello_small` -> HelloSmallGreeter
    pub fn create_greeter(variant: Variant) -> Arc<dyn Greeter> {
        match variant {
            Variant::Hello => Arc::new(HelloGreeter::new()),
            Variant::HelloSmall => Arc::new(HelloSmallGreeter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_maps_variants_to_greeters() {
        let hello = LocalGreeterFactory::create_greeter(Variant::Hello);
        let small = LocalGreeterFactory::create_greeter(Variant::HelloSmall);

        assert_eq!(hello.name(), "hello");
        assert_eq!(small.name(), "hello_small");
        assert_eq!(hello.name(), Variant::Hello.as_str());
        assert_eq!(small.name(), Variant::HelloSmall.as_str());
    }
}
