use tracing::warn;

use crate::CreatorGuide;

#[derive(Debug, thiserror::Error)]
pub enum GuideParseError {
    #[error("guide payload is empty")]
    Empty,
    #[error("guide payload does not match the schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Parses the provider's JSON text into a validated [`CreatorGuide`].
///
/// Missing fields, wrong types and unknown enum values are rejected. Extra
/// fields are tolerated. A title count other than the expected one is only
/// logged.
pub fn parse_guide(text: &str) -> Result<CreatorGuide, GuideParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GuideParseError::Empty);
    }

    let guide: CreatorGuide = serde_json::from_str(trimmed)?;

    if guide.titles.len() != reelplan_config::EXPECTED_TITLE_COUNT {
        warn!(
            "guide has {} titles, expected {}",
            guide.titles.len(),
            reelplan_config::EXPECTED_TITLE_COUNT
        );
    }

    Ok(guide)
}
