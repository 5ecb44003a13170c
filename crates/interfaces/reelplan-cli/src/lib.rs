pub mod commands;
pub mod render;

use clap::ValueEnum;
use reelplan_app_core::Tab;

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum CliTab {
    Overview,
    Monetization,
    Software,
    Editing,
    Production,
}

impl From<CliTab> for Tab {
    fn from(t: CliTab) -> Self {
        match t {
            CliTab::Overview => Tab::Overview,
            CliTab::Monetization => Tab::Monetization,
            CliTab::Software => Tab::Software,
            CliTab::Editing => Tab::Editing,
            CliTab::Production => Tab::Production,
        }
    }
}
