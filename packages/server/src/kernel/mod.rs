//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod test_dependencies;
pub mod traits;

/// Model used for fallback completions unless overridden.
pub const GPT_4O_MINI: &str = "gpt-4o-mini";

pub use ai::AiProxyClient;
pub use test_dependencies::MockAI;
pub use traits::*;
