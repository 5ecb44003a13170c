use std::fmt::Write;

use reelplan_app_core::viewmodel::{tab_vm, ContentVm};
use reelplan_app_core::Tab;
use reelplan_core::CreatorGuide;

/// Plain-text rendering of one tab of a completed guide.
pub fn render_tab(guide: &CreatorGuide, tab: Tab) -> String {
    let mut out = String::new();
    let _ = writeln!(out, ":: {}", tab.label());

    match tab_vm(guide, tab) {
        ContentVm::Overview(vm) => {
            let _ = writeln!(out, "\n   Viral Hook Script");
            let _ = writeln!(out, "   \"{}\"", vm.hook);
            let _ = writeln!(out, "\n   Thumbnail Concept");
            let _ = writeln!(out, "   {}", vm.thumbnail);
            let _ = writeln!(out, "\n   Title Candidates");
            for title in vm.titles {
                let _ = writeln!(out, "   {}. {}", title.rank, title.text);
            }
        }
        ContentVm::Monetization(cards) => {
            for card in cards {
                let _ = writeln!(out, "\n   {}", card.title);
                let _ = writeln!(out, "   [{}] [{}]", card.earnings_badge, card.difficulty_badge);
                let _ = writeln!(out, "   {}", card.strategy);
            }
        }
        ContentVm::Software(platforms) => {
            for platform in platforms {
                let _ = writeln!(out, "\n   {} [{}]", platform.platform, platform.device.label());
                for app in platform.apps {
                    let _ = writeln!(out, "   - {} ({}) best for {}", app.name, app.pricing, app.best_for);
                    let _ = writeln!(out, "     {}", app.description);
                    let _ = writeln!(out, "     Find on Google: {}", app.search_url);
                }
            }
        }
        ContentVm::Editing(steps) => {
            for step in steps {
                let _ = writeln!(out, "\n   {}. {}", step.step, step.phase);
                let _ = writeln!(out, "   {}", step.action);
                let _ = writeln!(out, "   Tip: {}", step.tips);
            }
        }
        ContentVm::Production(items) => {
            for item in items {
                let _ = writeln!(out, "   - {item}");
            }
        }
        ContentVm::Idle { .. } | ContentVm::Generating { .. } | ContentVm::Error { .. } => {}
    }

    out
}

pub fn render_all(guide: &CreatorGuide) -> String {
    Tab::ALL
        .iter()
        .map(|&tab| render_tab(guide, tab))
        .collect::<Vec<_>>()
        .join("\n")
}
