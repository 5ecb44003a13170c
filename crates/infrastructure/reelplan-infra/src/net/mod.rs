pub mod wire;

use reelplan_core::{build_prompt, parse_guide, response_schema, CreatorGuide};
use reqwest::Client;
use tracing::{debug, warn};

use crate::classify::ErrorClassifier;
use crate::error::GenerationError;
use wire::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// Shared HTTP client. No request timeout: the call is best-effort and
/// relies on transport defaults.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("reelplan/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: reelplan_config::DEFAULT_ENDPOINT.to_string(),
            model: reelplan_config::DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl GeminiConfig {
    /// Defaults overlaid with whatever the environment provides.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        config.api_key = reelplan_config::API_KEY_ENV_VARS
            .iter()
            .find_map(|name| non_empty(name));
        if let Some(model) = non_empty(reelplan_config::MODEL_ENV_VAR) {
            config.model = model;
        }
        if let Some(endpoint) = non_empty(reelplan_config::ENDPOINT_ENV_VAR) {
            config.endpoint = endpoint;
        }
        config
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// Issues one `generateContent` call per idea and validates the result.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    classifier: ErrorClassifier,
}

impl GeminiClient {
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self {
            client,
            config,
            classifier: ErrorClassifier::default(),
        }
    }

    pub fn with_classifier(mut self, classifier: ErrorClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub async fn generate_guide(&self, idea: &str) -> Result<CreatorGuide, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let body = GenerateContentRequest::json_output(build_prompt(idea), response_schema());

        debug!(
            "requesting guide from {} (idea: {} chars)",
            self.config.model,
            idea.chars().count()
        );

        let resp = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(self.provider_error(status.as_u16(), &bytes));
        }

        let envelope: GenerateContentResponse = serde_json::from_slice(&bytes)
            .map_err(|e| GenerationError::MalformedPayload(format!("response envelope: {e}")))?;

        if let Some(reason) = envelope.block_reason() {
            return Err(GenerationError::Blocked { reason });
        }

        let text = envelope.text().ok_or(GenerationError::EmptyResponse)?;
        Ok(parse_guide(&text)?)
    }

    fn transport_error(&self, e: reqwest::Error) -> GenerationError {
        warn!("transport failure: {e}");

        // reqwest's Display is mostly the request URL, which can carry model
        // names or ports that look like status codes. Classify the causes only.
        let status = e.status().map(|s| s.as_u16());
        let message = error_chain(&e.without_url());
        let kind = self.classifier.classify(status, None, &message);
        GenerationError::Transport { kind, message }
    }

    fn provider_error(&self, status: u16, body: &[u8]) -> GenerationError {
        let (rpc_status, message) = match serde_json::from_slice::<ApiErrorEnvelope>(body) {
            Ok(env) => (
                env.error.status,
                env.error
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", env.error.code.unwrap_or(status))),
            ),
            Err(_) => {
                warn!("provider returned a non-JSON error body (HTTP {status})");
                (None, String::from_utf8_lossy(body).into_owned())
            }
        };

        let kind = self
            .classifier
            .classify(Some(status), rpc_status.as_deref(), &message);
        debug!("provider failure (HTTP {status}) classified as {kind:?}");

        GenerationError::Provider {
            kind,
            status,
            rpc_status,
            message,
        }
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_tolerates_trailing_slash() {
        let config = GeminiConfig {
            endpoint: "http://localhost:9/v1beta/".into(),
            model: "gemini-test".into(),
            api_key: None,
        };
        assert_eq!(
            config.generate_url(),
            "http://localhost:9/v1beta/models/gemini-test:generateContent"
        );
    }
}
