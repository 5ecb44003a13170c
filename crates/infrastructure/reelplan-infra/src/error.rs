use reelplan_core::GuideParseError;

/// Technical failure of a generation call. `Display` is diagnostic only;
/// user-facing text comes from [`GenerationErrorKind::user_message`].
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("provider rejected request (HTTP {status}, {rpc}): {message}", rpc = rpc_status.as_deref().unwrap_or("-"))]
    Provider {
        kind: GenerationErrorKind,
        status: u16,
        rpc_status: Option<String>,
        message: String,
    },
    #[error("transport error: {message}")]
    Transport {
        kind: GenerationErrorKind,
        message: String,
    },
    #[error("generation blocked by safety filters: {reason}")]
    Blocked { reason: String },
    #[error("provider returned no content")]
    EmptyResponse,
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    InvalidApiKey,
    QuotaExceeded,
    ServiceOverloaded,
    ContentFiltered,
    EmptyResponse,
    MalformedPayload,
    Unknown,
}

pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";

impl GenerationErrorKind {
    pub fn user_message(self) -> &'static str {
        match self {
            GenerationErrorKind::InvalidApiKey => "Invalid API Key. Please check your settings.",
            GenerationErrorKind::QuotaExceeded => {
                "Quota exceeded. Please wait a moment before trying again."
            }
            GenerationErrorKind::ServiceOverloaded => {
                "AI Service is currently overloaded. Please try again in a few seconds."
            }
            GenerationErrorKind::ContentFiltered => {
                "Content flagged by safety filters. Please try a different video idea."
            }
            GenerationErrorKind::EmptyResponse
            | GenerationErrorKind::MalformedPayload
            | GenerationErrorKind::Unknown => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl GenerationError {
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            GenerationError::MissingApiKey => GenerationErrorKind::InvalidApiKey,
            GenerationError::Provider { kind, .. } | GenerationError::Transport { kind, .. } => *kind,
            GenerationError::Blocked { .. } => GenerationErrorKind::ContentFiltered,
            GenerationError::EmptyResponse => GenerationErrorKind::EmptyResponse,
            GenerationError::MalformedPayload(_) => GenerationErrorKind::MalformedPayload,
        }
    }

    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

impl From<GuideParseError> for GenerationError {
    fn from(value: GuideParseError) -> Self {
        match value {
            GuideParseError::Empty => GenerationError::EmptyResponse,
            GuideParseError::Schema(e) => GenerationError::MalformedPayload(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_failures_share_the_generic_message() {
        assert_eq!(GenerationError::EmptyResponse.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(
            GenerationError::MalformedPayload("eof".into()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn missing_key_reads_as_invalid_key() {
        assert_eq!(
            GenerationError::MissingApiKey.user_message(),
            "Invalid API Key. Please check your settings."
        );
    }

    #[test]
    fn technical_detail_stays_out_of_user_message() {
        let err = GenerationError::Provider {
            kind: GenerationErrorKind::QuotaExceeded,
            status: 429,
            rpc_status: Some("RESOURCE_EXHAUSTED".into()),
            message: "project 1234 exceeded quota".into(),
        };
        assert!(err.to_string().contains("project 1234"));
        assert!(!err.user_message().contains("1234"));
    }
}
