use reelplan_core::CreatorGuide;
use uuid::Uuid;

/// Tags one generation call so late results from earlier calls can be told apart.
pub type RunId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationStatus {
    Idle,
    Generating,
    Completed,
    Error,
}

/// Generation lifecycle. The guide only exists in `Completed` and the
/// message only in `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum Generation {
    Idle,
    Generating,
    Completed(CreatorGuide),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Overview,
    Monetization,
    Software,
    Editing,
    Production,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Monetization,
        Tab::Software,
        Tab::Editing,
        Tab::Production,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Monetization => "Monetization",
            Tab::Software => "Best Software",
            Tab::Editing => "Edit Guide",
            Tab::Production => "Gear & Filming",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub generation: Generation,
    pub active_tab: Tab,
    /// Trimmed idea of the most recent accepted submission; reused by retry.
    pub last_idea: Option<String>,
    pub run_id: Option<RunId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            generation: Generation::Idle,
            active_tab: Tab::Overview,
            last_idea: None,
            run_id: None,
        }
    }
}

impl AppState {
    pub fn status(&self) -> GenerationStatus {
        match self.generation {
            Generation::Idle => GenerationStatus::Idle,
            Generation::Generating => GenerationStatus::Generating,
            Generation::Completed(_) => GenerationStatus::Completed,
            Generation::Error(_) => GenerationStatus::Error,
        }
    }

    pub fn data(&self) -> Option<&CreatorGuide> {
        match &self.generation {
            Generation::Completed(guide) => Some(guide),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.generation {
            Generation::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.generation, Generation::Generating)
    }
}
