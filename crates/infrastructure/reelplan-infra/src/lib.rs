pub mod classify;
pub mod error;
pub mod net;

// Re-exports for convenience
pub use classify::{ErrorClassifier, SubstringRule, DEFAULT_SUBSTRING_RULES};
pub use error::{GenerationError, GenerationErrorKind, GENERIC_FAILURE_MESSAGE};
pub use net::{default_http_client, GeminiClient, GeminiConfig};
