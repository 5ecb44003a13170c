use crate::domain::Tab;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Generation
    Submit(String),
    Retry,

    // Navigation
    SelectTab(Tab),
}
