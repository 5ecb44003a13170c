pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod generator;
pub mod kernel;
pub mod ports;
pub mod viewmodel;

pub use app_core::*;
pub use domain::{AppState, Generation, GenerationStatus, RunId, Tab};
pub use generator::default_generator;
pub use kernel::AppKernel;
pub use ports::*;
pub use viewmodel::*;

pub use reelplan_infra::{GeminiClient, GeminiConfig, GenerationError, GenerationErrorKind};
