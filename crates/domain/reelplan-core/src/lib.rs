use serde::{Deserialize, Serialize};
use std::fmt;

pub mod parse;
pub mod prompt;
pub mod schema;

pub use parse::{parse_guide, GuideParseError};
pub use prompt::build_prompt;
pub use schema::response_schema;

/// Structured production plan generated for a single video idea.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatorGuide {
    pub titles: Vec<String>,
    pub hook: String,
    pub thumbnail: String,
    pub monetization: Vec<MonetizationMethod>,
    pub software: Vec<SoftwareRecommendation>,
    pub editing_workflow: Vec<EditingStep>,
    pub equipment: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonetizationMethod {
    pub title: String,
    /// Free-form, e.g. "$50-$200" or "High CPM".
    pub potential_earnings: String,
    pub difficulty: Difficulty,
    pub strategy: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Medium, Difficulty::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Low => "Low",
            Difficulty::Medium => "Medium",
            Difficulty::High => "High",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareRecommendation {
    /// e.g. "Desktop", "Mobile", "Tablet".
    pub platform: String,
    pub apps: Vec<SoftwareItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PricingModel,
    pub best_for: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PricingModel {
    Free,
    Paid,
    Freemium,
}

impl PricingModel {
    pub const ALL: [PricingModel; 3] = [PricingModel::Free, PricingModel::Paid, PricingModel::Freemium];

    pub fn as_str(self) -> &'static str {
        match self {
            PricingModel::Free => "Free",
            PricingModel::Paid => "Paid",
            PricingModel::Freemium => "Freemium",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditingStep {
    /// e.g. "Assembly", "Color", "Sound".
    pub phase: String,
    pub action: String,
    pub tips: String,
}
