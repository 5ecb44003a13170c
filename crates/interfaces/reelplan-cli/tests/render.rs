use reelplan_app_core::ports::GuideGenerator;
use reelplan_app_core::{GenerationError, GenerationErrorKind, GenerationStatus, Tab};
use reelplan_cli::commands::run_generation;
use reelplan_cli::render::{render_all, render_tab};
use reelplan_core::CreatorGuide;
use std::path::PathBuf;

fn guide() -> CreatorGuide {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop();
    path.pop();
    path.pop();
    path.push("test_files");
    path.push("sourdough_guide.json");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("failed to read test file: {}", path.display()));
    reelplan_core::parse_guide(&text).unwrap()
}

struct Canned(Option<CreatorGuide>);

#[async_trait::async_trait]
impl GuideGenerator for Canned {
    async fn generate(&self, _idea: &str) -> Result<CreatorGuide, GenerationError> {
        self.0.clone().ok_or(GenerationError::Transport {
            kind: GenerationErrorKind::ServiceOverloaded,
            message: "503 Service Unavailable".into(),
        })
    }
}

#[test]
fn overview_lists_hook_and_ranked_titles() {
    let g = guide();
    let text = render_tab(&g, Tab::Overview);
    assert!(text.starts_with(":: Overview"));
    assert!(text.contains(&format!("\"{}\"", g.hook)));
    assert!(text.contains("1. I Baked Sourdough Every Day for 30 Days"));
    assert!(text.contains("3. Stop Killing Your Starter"));
}

#[test]
fn monetization_and_software_show_badges() {
    let g = guide();
    let money = render_tab(&g, Tab::Monetization);
    assert!(money.contains("[Potential: $50-$200] [Difficulty: Low]"));

    let software = render_tab(&g, Tab::Software);
    assert!(software.contains("- DaVinci Resolve (Freemium) best for Color grading food footage"));
}

#[test]
fn software_tab_links_each_app_to_a_search() {
    let software = render_tab(&guide(), Tab::Software);
    assert!(software.contains(
        "Find on Google: https://www.google.com/search?q=DaVinci%20Resolve%20Desktop%20software"
    ));
    assert!(software.contains(
        "Find on Google: https://www.google.com/search?q=CapCut%20Mobile%20software"
    ));
    assert!(software.contains("Mobile [MOBILE]"));
}

#[test]
fn full_render_covers_every_tab_in_order() {
    let text = render_all(&guide());
    let positions: Vec<usize> = Tab::ALL
        .iter()
        .map(|t| text.find(&format!(":: {}", t.label())).expect("tab header"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(text.contains("Tip: Record ASMR audio separately"));
    assert!(text.contains("- Softbox key light"));
}

#[tokio::test]
async fn run_generation_reaches_completed() {
    let state = run_generation(&Canned(Some(guide())), "How to bake sourdough bread").await;
    assert_eq!(state.status(), GenerationStatus::Completed);
    assert_eq!(state.last_idea.as_deref(), Some("How to bake sourdough bread"));
}

#[tokio::test]
async fn run_generation_maps_failure_to_user_message() {
    let state = run_generation(&Canned(None), "idea").await;
    assert_eq!(state.status(), GenerationStatus::Error);
    assert_eq!(
        state.error(),
        Some("AI Service is currently overloaded. Please try again in a few seconds.")
    );
}

#[tokio::test]
async fn run_generation_skips_blank_ideas() {
    let state = run_generation(&Canned(Some(guide())), "  ").await;
    assert_eq!(state.status(), GenerationStatus::Idle);
}
