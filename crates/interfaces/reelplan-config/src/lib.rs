//! Central configuration constants for the generation service and UI defaults.

/// Model used for `generateContent` when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the generation API (without the `/models/...` suffix).
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables consulted for the API credential, in priority order.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Environment variable overriding [`DEFAULT_MODEL`].
pub const MODEL_ENV_VAR: &str = "REELPLAN_MODEL";

/// Environment variable overriding [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV_VAR: &str = "REELPLAN_ENDPOINT";

/// Number of title candidates the prompt asks for.
pub const EXPECTED_TITLE_COUNT: usize = 3;

/// Viral title structures offered as starting points for an idea.
pub const HOOK_TEMPLATES: &[&str] = &[
    "I tried [Skill] for 30 Days",
    "The Secret to [Result] without [Pain]",
    "Stop doing [Mistake] in 2024",
    "How I Made [Amount] in [Time]",
    "[Product A] vs [Product B]: The Truth",
    "The [Topic] Iceberg Explained",
    "10 [Niche] Gadgets You Need",
    "Why [Popular Thing] is Dead",
    "Beginner's Guide to [Subject]",
];

/// Placeholder shown in empty idea inputs.
pub const IDEA_PLACEHOLDER: &str =
    "Enter your video idea (e.g. 'How to bake sourdough bread')";

/// How long a "copied" confirmation stays visible, in milliseconds.
pub const COPY_FEEDBACK_MS: u64 = 2_000;

/// Web search used for the "Find on Google" link on software cards.
pub const SOFTWARE_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Footer hint shown under the sidebar navigation.
pub const PRO_TIP: &str =
    "Quality audio retains viewers longer than 4K video. Invest in a mic first.";
