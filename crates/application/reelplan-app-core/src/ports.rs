use reelplan_core::CreatorGuide;
use reelplan_infra::GenerationError;

/// Produces a guide for one idea. Implementations issue at most one
/// provider call per invocation and never retry.
#[async_trait::async_trait]
pub trait GuideGenerator: Send + Sync + 'static {
    async fn generate(&self, idea: &str) -> Result<CreatorGuide, GenerationError>;
}
