use anyhow::Context;
use reelplan_core::CreatorGuide;
use reelplan_infra::{GeminiClient, GeminiConfig, GenerationError};
use tracing::error;

use crate::ports::GuideGenerator;

#[async_trait::async_trait]
impl GuideGenerator for GeminiClient {
    async fn generate(&self, idea: &str) -> Result<CreatorGuide, GenerationError> {
        self.generate_guide(idea).await
    }
}

/// Gemini-backed generator using the shared HTTP client settings.
pub fn default_generator(config: GeminiConfig) -> anyhow::Result<GeminiClient> {
    let client = reelplan_infra::default_http_client()
        .inspect_err(|e| error!("Failed to build HTTP client: {e}"))
        .context("failed to build HTTP client")?;
    Ok(GeminiClient::new(client, config))
}
