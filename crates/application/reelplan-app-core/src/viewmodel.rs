//! Read-only projections of [`AppState`] consumed by the renderers.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reelplan_core::{CreatorGuide, Difficulty, PricingModel};

use crate::domain::{AppState, Generation, Tab};

pub const IDLE_MESSAGE: &str = "Enter a video idea above to generate a complete production plan, software toolkit, and money-making strategy.";
pub const GENERATING_MESSAGE: &str = "Analyzing your idea and building the production plan...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Calm,
    Warn,
    Danger,
    Positive,
}

impl From<Difficulty> for Tone {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Low => Tone::Calm,
            Difficulty::Medium => Tone::Warn,
            Difficulty::High => Tone::Danger,
        }
    }
}

impl From<PricingModel> for Tone {
    fn from(p: PricingModel) -> Self {
        match p {
            PricingModel::Free => Tone::Positive,
            PricingModel::Freemium => Tone::Calm,
            PricingModel::Paid => Tone::Warn,
        }
    }
}

/// Characters left alone by a browser's `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Web search for an app on a given platform.
pub fn software_search_url(app: &str, platform: &str) -> String {
    let query = format!("{app} {platform} software");
    format!(
        "{}{}",
        reelplan_config::SOFTWARE_SEARCH_URL,
        utf8_percent_encode(&query, QUERY_COMPONENT)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Desktop,
    Mobile,
    Tablet,
}

impl DeviceKind {
    /// Guesses the device class from a free-form platform name.
    pub fn from_platform(platform: &str) -> Self {
        let p = platform.to_lowercase();
        if p.contains("mobile") || p.contains("phone") {
            DeviceKind::Mobile
        } else if p.contains("tablet") || p.contains("ipad") {
            DeviceKind::Tablet
        } else {
            DeviceKind::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeviceKind::Desktop => "DESKTOP",
            DeviceKind::Mobile => "MOBILE",
            DeviceKind::Tablet => "TABLET",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemVm {
    pub tab: Tab,
    pub label: &'static str,
    pub enabled: bool,
    pub active: bool,
}

/// Sidebar entries; only selectable once a guide is available.
pub fn nav_vm(state: &AppState) -> Vec<NavItemVm> {
    let completed = state.data().is_some();
    Tab::ALL
        .iter()
        .map(|&tab| NavItemVm {
            tab,
            label: tab.label(),
            enabled: completed,
            active: completed && state.active_tab == tab,
        })
        .collect()
}

/// Whether the submit control should be enabled for the current input.
pub fn can_submit(state: &AppState, idea: &str) -> bool {
    !state.is_generating() && !idea.trim().is_empty()
}

pub fn status_label(state: &AppState) -> &'static str {
    match state.generation {
        Generation::Idle => "STATUS: IDLE",
        Generation::Generating => "STATUS: GENERATING",
        Generation::Completed(_) => "STATUS: READY",
        Generation::Error(_) => "STATUS: ERROR",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleVm {
    pub rank: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewVm {
    pub hook: String,
    pub thumbnail: String,
    pub titles: Vec<TitleVm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonetizationCardVm {
    pub title: String,
    pub earnings_badge: String,
    pub difficulty_badge: String,
    pub difficulty_tone: Tone,
    pub strategy: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppCardVm {
    pub name: String,
    pub pricing: &'static str,
    pub pricing_tone: Tone,
    pub best_for: String,
    pub description: String,
    pub search_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformVm {
    pub platform: String,
    pub device: DeviceKind,
    pub apps: Vec<AppCardVm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditingStepVm {
    pub step: usize,
    pub phase: String,
    pub action: String,
    pub tips: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentVm {
    Idle { message: &'static str },
    Generating { idea: String, message: &'static str },
    Error { message: String, can_retry: bool },
    Overview(OverviewVm),
    Monetization(Vec<MonetizationCardVm>),
    Software(Vec<PlatformVm>),
    Editing(Vec<EditingStepVm>),
    Production(Vec<String>),
}

pub fn overview_vm(guide: &CreatorGuide) -> OverviewVm {
    OverviewVm {
        hook: guide.hook.clone(),
        thumbnail: guide.thumbnail.clone(),
        titles: guide
            .titles
            .iter()
            .enumerate()
            .map(|(i, text)| TitleVm {
                rank: i + 1,
                text: text.clone(),
            })
            .collect(),
    }
}

pub fn monetization_vm(guide: &CreatorGuide) -> Vec<MonetizationCardVm> {
    guide
        .monetization
        .iter()
        .map(|m| MonetizationCardVm {
            title: m.title.clone(),
            earnings_badge: format!("Potential: {}", m.potential_earnings),
            difficulty_badge: format!("Difficulty: {}", m.difficulty),
            difficulty_tone: m.difficulty.into(),
            strategy: m.strategy.clone(),
        })
        .collect()
}

pub fn software_vm(guide: &CreatorGuide) -> Vec<PlatformVm> {
    guide
        .software
        .iter()
        .map(|s| PlatformVm {
            platform: s.platform.clone(),
            device: DeviceKind::from_platform(&s.platform),
            apps: s
                .apps
                .iter()
                .map(|a| AppCardVm {
                    name: a.name.clone(),
                    pricing: a.kind.as_str(),
                    pricing_tone: a.kind.into(),
                    best_for: a.best_for.clone(),
                    description: a.description.clone(),
                    search_url: software_search_url(&a.name, &s.platform),
                })
                .collect(),
        })
        .collect()
}

pub fn editing_vm(guide: &CreatorGuide) -> Vec<EditingStepVm> {
    guide
        .editing_workflow
        .iter()
        .enumerate()
        .map(|(i, s)| EditingStepVm {
            step: i + 1,
            phase: s.phase.clone(),
            action: s.action.clone(),
            tips: s.tips.clone(),
        })
        .collect()
}

pub fn tab_vm(guide: &CreatorGuide, tab: Tab) -> ContentVm {
    match tab {
        Tab::Overview => ContentVm::Overview(overview_vm(guide)),
        Tab::Monetization => ContentVm::Monetization(monetization_vm(guide)),
        Tab::Software => ContentVm::Software(software_vm(guide)),
        Tab::Editing => ContentVm::Editing(editing_vm(guide)),
        Tab::Production => ContentVm::Production(guide.equipment.clone()),
    }
}

/// What the main panel shows for the current state and tab.
pub fn content_vm(state: &AppState) -> ContentVm {
    match &state.generation {
        Generation::Idle => ContentVm::Idle {
            message: IDLE_MESSAGE,
        },
        Generation::Generating => ContentVm::Generating {
            idea: state.last_idea.clone().unwrap_or_default(),
            message: GENERATING_MESSAGE,
        },
        Generation::Error(message) => ContentVm::Error {
            message: message.clone(),
            can_retry: state.last_idea.is_some(),
        },
        Generation::Completed(guide) => tab_vm(guide, state.active_tab),
    }
}
