/// Builds the instruction sent alongside the response schema.
///
/// The idea is embedded verbatim; callers are expected to have rejected
/// blank input already.
pub fn build_prompt(idea: &str) -> String {
    format!(
        r#"You are an expert YouTube Producer and Strategist.
The user has a video idea: "{idea}".

Generate a complete production masterclass.
1. Titles, Hook and Thumbnail: {titles} click-worthy titles, the exact script for the first seconds, and a high-CTR thumbnail concept.
2. Monetization: Provide specific ways to make money (Affiliates, Digital Products, Sponsorships).
3. Software: Recommend the absolute best editing software for Desktop, Mobile, and Tablet. Be specific (e.g., Premiere, CapCut, DaVinci).
4. Editing Workflow: Step-by-step how to edit this specific style of video.
5. Equipment: What gear fits this niche?
"#,
        titles = reelplan_config::EXPECTED_TITLE_COUNT,
    )
}

#[cfg(test)]
mod tests {
    use super::build_prompt;

    #[test]
    fn idea_is_embedded_verbatim() {
        let prompt = build_prompt("How to bake \"sourdough\" bread");
        assert!(prompt.contains("The user has a video idea: \"How to bake \"sourdough\" bread\"."));
    }

    #[test]
    fn every_section_is_requested() {
        let prompt = build_prompt("x");
        for section in ["Titles", "Hook", "Thumbnail", "Monetization", "Software", "Editing Workflow", "Equipment"] {
            assert!(prompt.contains(section), "missing {section}");
        }
        for platform in ["Desktop", "Mobile", "Tablet"] {
            assert!(prompt.contains(platform));
        }
    }
}
