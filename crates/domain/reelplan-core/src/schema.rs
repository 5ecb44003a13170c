//! Wire-level response schema sent to the generation service.
//!
//! Uses the OpenAPI subset accepted by `generationConfig.responseSchema`
//! (upper-case type names). Field names and enumerations must stay in step
//! with the serde types in the crate root; the tests below compare the two.

use serde_json::{json, Value};

use crate::{Difficulty, PricingModel};

/// Top-level properties of [`crate::CreatorGuide`], all required.
pub const GUIDE_FIELDS: &[&str] = &[
    "titles",
    "hook",
    "thumbnail",
    "monetization",
    "software",
    "editingWorkflow",
    "equipment",
];

pub const MONETIZATION_FIELDS: &[&str] = &["title", "potentialEarnings", "difficulty", "strategy"];
pub const SOFTWARE_FIELDS: &[&str] = &["platform", "apps"];
pub const SOFTWARE_ITEM_FIELDS: &[&str] = &["name", "type", "bestFor", "description"];
pub const EDITING_STEP_FIELDS: &[&str] = &["phase", "action", "tips"];

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn described_string(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn string_enum(values: &[&str]) -> Value {
    json!({ "type": "STRING", "enum": values })
}

fn array_of(items: Value) -> Value {
    json!({ "type": "ARRAY", "items": items })
}

fn object(properties: Value, required: &[&str]) -> Value {
    json!({ "type": "OBJECT", "properties": properties, "required": required })
}

fn monetization_schema() -> Value {
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
    object(
        json!({
            "title": string(),
            "potentialEarnings": described_string("e.g. $50-$200 or High CPM"),
            "difficulty": string_enum(&difficulties),
            "strategy": described_string("Specific advice on how to implement this."),
        }),
        MONETIZATION_FIELDS,
    )
}

fn software_schema() -> Value {
    let pricing: Vec<&str> = PricingModel::ALL.iter().map(|p| p.as_str()).collect();
    let app = object(
        json!({
            "name": string(),
            "type": string_enum(&pricing),
            "bestFor": string(),
            "description": string(),
        }),
        SOFTWARE_ITEM_FIELDS,
    );
    object(
        json!({
            "platform": described_string("e.g. Desktop, Mobile, Tablet"),
            "apps": array_of(app),
        }),
        SOFTWARE_FIELDS,
    )
}

fn editing_step_schema() -> Value {
    object(
        json!({
            "phase": described_string("e.g. Assembly, Color, Sound"),
            "action": string(),
            "tips": string(),
        }),
        EDITING_STEP_FIELDS,
    )
}

/// Static schema describing the exact [`crate::CreatorGuide`] shape.
pub fn response_schema() -> Value {
    let mut titles = array_of(string());
    titles["description"] = json!(format!(
        "{} viral, click-worthy titles for the video.",
        reelplan_config::EXPECTED_TITLE_COUNT
    ));

    let mut equipment = array_of(string());
    equipment["description"] =
        json!("Recommended gear (cameras, mics, lights) for this specific video style.");

    object(
        json!({
            "titles": titles,
            "hook": described_string("The exact script for the first 10 seconds to hook the viewer."),
            "thumbnail": described_string("Visual description of a high-CTR thumbnail."),
            "monetization": array_of(monetization_schema()),
            "software": array_of(software_schema()),
            "editingWorkflow": array_of(editing_step_schema()),
            "equipment": equipment,
        }),
        GUIDE_FIELDS,
    )
}
