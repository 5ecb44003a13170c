//! Maps provider failures onto [`GenerationErrorKind`].
//!
//! Structured signals (HTTP status, Google RPC status) are consulted first.
//! The substring rules only apply when neither gives an answer.

use std::borrow::Cow;

use crate::error::GenerationErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringRule {
    pub needle: Cow<'static, str>,
    pub kind: GenerationErrorKind,
}

impl SubstringRule {
    pub const fn new(needle: &'static str, kind: GenerationErrorKind) -> Self {
        Self {
            needle: Cow::Borrowed(needle),
            kind,
        }
    }
}

/// Checked in order; first match wins.
pub const DEFAULT_SUBSTRING_RULES: &[SubstringRule] = &[
    SubstringRule::new("403", GenerationErrorKind::InvalidApiKey),
    SubstringRule::new("API key", GenerationErrorKind::InvalidApiKey),
    SubstringRule::new("429", GenerationErrorKind::QuotaExceeded),
    SubstringRule::new("503", GenerationErrorKind::ServiceOverloaded),
    SubstringRule::new("SAFETY", GenerationErrorKind::ContentFiltered),
];

#[derive(Debug, Clone)]
pub struct ErrorClassifier {
    rules: Vec<SubstringRule>,
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self {
            rules: DEFAULT_SUBSTRING_RULES.to_vec(),
        }
    }
}

impl ErrorClassifier {
    pub fn with_rule(mut self, needle: impl Into<String>, kind: GenerationErrorKind) -> Self {
        self.rules.push(SubstringRule {
            needle: Cow::Owned(needle.into()),
            kind,
        });
        self
    }

    pub fn rules(&self) -> &[SubstringRule] {
        &self.rules
    }

    pub fn classify_http_status(status: u16) -> Option<GenerationErrorKind> {
        match status {
            401 | 403 => Some(GenerationErrorKind::InvalidApiKey),
            429 => Some(GenerationErrorKind::QuotaExceeded),
            503 => Some(GenerationErrorKind::ServiceOverloaded),
            _ => None,
        }
    }

    pub fn classify_rpc_status(status: &str) -> Option<GenerationErrorKind> {
        match status {
            "UNAUTHENTICATED" | "PERMISSION_DENIED" => Some(GenerationErrorKind::InvalidApiKey),
            "RESOURCE_EXHAUSTED" => Some(GenerationErrorKind::QuotaExceeded),
            "UNAVAILABLE" => Some(GenerationErrorKind::ServiceOverloaded),
            _ => None,
        }
    }

    pub fn classify_message(&self, message: &str) -> GenerationErrorKind {
        self.rules
            .iter()
            .find(|rule| message.contains(rule.needle.as_ref()))
            .map(|rule| rule.kind)
            .unwrap_or(GenerationErrorKind::Unknown)
    }

    pub fn classify(
        &self,
        http_status: Option<u16>,
        rpc_status: Option<&str>,
        message: &str,
    ) -> GenerationErrorKind {
        http_status
            .and_then(Self::classify_http_status)
            .or_else(|| rpc_status.and_then(Self::classify_rpc_status))
            .unwrap_or_else(|| self.classify_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GenerationErrorKind::*;

    #[test]
    fn http_status_takes_precedence_over_message() {
        let c = ErrorClassifier::default();
        assert_eq!(c.classify(Some(429), None, "SAFETY"), QuotaExceeded);
        assert_eq!(c.classify(Some(403), None, ""), InvalidApiKey);
        assert_eq!(c.classify(Some(401), None, ""), InvalidApiKey);
        assert_eq!(c.classify(Some(503), None, ""), ServiceOverloaded);
    }

    #[test]
    fn rpc_status_is_used_when_http_status_is_inconclusive() {
        let c = ErrorClassifier::default();
        assert_eq!(c.classify(Some(500), Some("UNAVAILABLE"), ""), ServiceOverloaded);
        assert_eq!(c.classify(None, Some("RESOURCE_EXHAUSTED"), ""), QuotaExceeded);
        assert_eq!(c.classify(Some(400), Some("PERMISSION_DENIED"), ""), InvalidApiKey);
    }

    #[test]
    fn bad_key_reported_as_invalid_argument_falls_back_to_substring() {
        let c = ErrorClassifier::default();
        let kind = c.classify(
            Some(400),
            Some("INVALID_ARGUMENT"),
            "API key not valid. Please pass a valid API key.",
        );
        assert_eq!(kind, InvalidApiKey);
    }

    #[test]
    fn substring_rules_cover_unstructured_messages() {
        let c = ErrorClassifier::default();
        assert_eq!(c.classify_message("got status 503 from upstream"), ServiceOverloaded);
        assert_eq!(c.classify_message("[429 Too Many Requests]"), QuotaExceeded);
        assert_eq!(c.classify_message("finishReason: SAFETY"), ContentFiltered);
        assert_eq!(c.classify_message("connection reset by peer"), Unknown);
    }

    #[test]
    fn extra_rules_extend_without_replacing_defaults() {
        let c = ErrorClassifier::default().with_rule("overloaded", ServiceOverloaded);
        assert_eq!(c.classify_message("The model is overloaded."), ServiceOverloaded);
        assert_eq!(c.classify_message("403 Forbidden"), InvalidApiKey);
        assert_eq!(c.rules().len(), DEFAULT_SUBSTRING_RULES.len() + 1);
    }
}
