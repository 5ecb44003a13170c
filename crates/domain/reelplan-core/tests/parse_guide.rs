use reelplan_core::{parse_guide, CreatorGuide, Difficulty, GuideParseError, PricingModel};
use std::fs::read_to_string;
use std::path::PathBuf;

fn fixture() -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/domain/reelplan-core -> workspace root
    path.pop();
    path.pop();
    path.pop();
    path.push("test_files");
    path.push("sourdough_guide.json");

    read_to_string(&path).unwrap_or_else(|_| panic!("failed to read test file: {}", path.display()))
}

#[test]
fn parses_complete_guide() {
    let guide = parse_guide(&fixture()).expect("fixture should parse");

    assert_eq!(guide.titles.len(), 3);
    assert!(guide.hook.starts_with("This loaf"));
    assert_eq!(guide.monetization[0].difficulty, Difficulty::Low);
    assert_eq!(guide.monetization[1].potential_earnings, "$200-$800");
    assert_eq!(guide.software[0].apps[0].kind, PricingModel::Freemium);
    assert_eq!(guide.software[1].apps[0].best_for, "Vertical cut-downs");
    assert_eq!(guide.editing_workflow[1].phase, "Sound");
    assert_eq!(guide.equipment.len(), 3);
}

#[test]
fn round_trip_preserves_every_field_and_order() {
    let guide = parse_guide(&fixture()).unwrap();
    let text = serde_json::to_string(&guide).unwrap();
    let back: CreatorGuide = parse_guide(&text).unwrap();

    assert_eq!(guide, back);
    assert_eq!(back.titles[2], "Stop Killing Your Starter: Sourdough for Beginners");
    assert_eq!(back.software[0].platform, "Desktop");
}

#[test]
fn missing_required_field_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(&fixture()).unwrap();
    value.as_object_mut().unwrap().remove("editingWorkflow");

    let err = parse_guide(&value.to_string()).unwrap_err();
    assert!(matches!(err, GuideParseError::Schema(_)));
}

#[test]
fn missing_nested_field_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(&fixture()).unwrap();
    value["monetization"][0]
        .as_object_mut()
        .unwrap()
        .remove("strategy");

    assert!(parse_guide(&value.to_string()).is_err());
}

#[test]
fn unknown_enum_value_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(&fixture()).unwrap();
    value["software"][0]["apps"][0]["type"] = serde_json::json!("Subscription");

    assert!(parse_guide(&value.to_string()).is_err());
}

#[test]
fn wrong_type_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(&fixture()).unwrap();
    value["titles"] = serde_json::json!("just one title");

    assert!(parse_guide(&value.to_string()).is_err());
}

#[test]
fn non_json_and_blank_payloads_are_rejected() {
    assert!(matches!(
        parse_guide("Sure! Here is your guide:"),
        Err(GuideParseError::Schema(_))
    ));
    assert!(matches!(parse_guide("  \n"), Err(GuideParseError::Empty)));
}

#[test]
fn extra_fields_are_tolerated_and_title_count_is_not_enforced() {
    let mut value: serde_json::Value = serde_json::from_str(&fixture()).unwrap();
    value["titles"] = serde_json::json!(["only one"]);
    value["viralScore"] = serde_json::json!(9);

    let guide = parse_guide(&value.to_string()).unwrap();
    assert_eq!(guide.titles, vec!["only one".to_string()]);
}
