/// Times a step runs when the plan does not say
pub const DEFAULT_REPEAT: u32 = 1;
/// Upper bound on a step's repeat count
pub const MAX_REPEAT: u32 = 1000;
/// Log level used when neither RUST_LOG nor the plan sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";
