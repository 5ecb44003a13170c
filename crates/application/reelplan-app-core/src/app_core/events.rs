use reelplan_core::CreatorGuide;

use crate::domain::{RunId, Tab};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Generation lifecycle
    GenerationStarted { run_id: RunId, idea: String },
    GenerationSucceeded { run_id: RunId, guide: CreatorGuide },
    GenerationFailed { run_id: RunId, message: String },

    // Navigation
    TabSelected(Tab),
}
