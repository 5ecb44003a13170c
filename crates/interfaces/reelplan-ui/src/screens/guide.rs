use crate::theme::*;
use crate::utils::{badge, card, section_label, wrapped, CopyFeedback};
use eframe::egui;
use reelplan_app_core::viewmodel::{EditingStepVm, MonetizationCardVm, OverviewVm, PlatformVm};

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .heading()
            .strong()
            .color(COL_TEXT),
    );
}

pub fn draw_overview(ui: &mut egui::Ui, vm: &OverviewVm, copy: &mut CopyFeedback) {
    heading(ui, "Overview");

    card(ui, |ui| {
        ui.horizontal(|ui| {
            section_label(ui, "VIRAL HOOK (FIRST 5 SECONDS)");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                copy.button(ui, "hook", &vm.hook);
            });
        });
        wrapped(ui, egui::RichText::new(&vm.hook).size(15.0).color(COL_TEXT));
    });

    card(ui, |ui| {
        section_label(ui, "TITLE OPTIONS");
        for title in &vm.titles {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{:02}", title.rank))
                        .family(egui::FontFamily::Monospace)
                        .color(COL_ACCENT),
                );
                wrapped(ui, egui::RichText::new(&title.text).color(COL_TEXT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    copy.button(ui, &format!("title-{}", title.rank), &title.text);
                });
            });
        }
    });

    card(ui, |ui| {
        ui.horizontal(|ui| {
            section_label(ui, "THUMBNAIL CONCEPT");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                copy.button(ui, "thumbnail", &vm.thumbnail);
            });
        });
        wrapped(ui, egui::RichText::new(&vm.thumbnail).color(COL_TEXT));
    });
}

pub fn draw_monetization(ui: &mut egui::Ui, cards: &[MonetizationCardVm]) {
    heading(ui, "Monetization");

    for m in cards {
        card(ui, |ui| {
            ui.label(egui::RichText::new(&m.title).strong().size(14.0).color(COL_TEXT));
            ui.horizontal(|ui| {
                badge(ui, &m.earnings_badge, COL_SUCCESS);
                badge(ui, &m.difficulty_badge, tone_color(m.difficulty_tone));
            });
            wrapped(ui, egui::RichText::new(&m.strategy).color(COL_TEXT_DIM));
        });
    }
}

pub fn draw_software(ui: &mut egui::Ui, platforms: &[PlatformVm]) {
    heading(ui, "Best Software");

    for platform in platforms {
        ui.horizontal(|ui| {
            badge(ui, platform.device.label(), COL_TEXT_DIM);
            section_label(ui, &platform.platform.to_uppercase());
        });
        ui.columns(2, |columns| {
            for (i, app) in platform.apps.iter().enumerate() {
                let ui = &mut columns[i % 2];
                card(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&app.name).strong().color(COL_TEXT));
                        badge(ui, app.pricing, tone_color(app.pricing_tone));
                    });
                    ui.label(
                        egui::RichText::new(format!("Best for: {}", app.best_for))
                            .size(11.0)
                            .color(COL_ACCENT),
                    );
                    wrapped(ui, egui::RichText::new(&app.description).color(COL_TEXT_DIM));
                    ui.hyperlink_to(
                        egui::RichText::new("Find on Google").size(11.0).color(COL_ACCENT),
                        &app.search_url,
                    );
                });
            }
        });
        ui.add_space(8.0);
    }
}

pub fn draw_editing(ui: &mut egui::Ui, steps: &[EditingStepVm]) {
    heading(ui, "Edit Guide");

    for step in steps {
        ui.horizontal_top(|ui| {
            ui.label(
                egui::RichText::new(format!("{:02}", step.step))
                    .family(egui::FontFamily::Monospace)
                    .size(16.0)
                    .color(COL_ACCENT),
            );
            card(ui, |ui| {
                section_label(ui, &step.phase.to_uppercase());
                wrapped(ui, egui::RichText::new(&step.action).color(COL_TEXT));
                wrapped(
                    ui,
                    egui::RichText::new(format!("Tip: {}", step.tips))
                        .italics()
                        .color(COL_WARN),
                );
            });
        });
    }
}

pub fn draw_production(ui: &mut egui::Ui, items: &[String]) {
    heading(ui, "Gear & Filming");

    card(ui, |ui| {
        section_label(ui, "RECOMMENDED EQUIPMENT");
        for item in items {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("▸").color(COL_ACCENT));
                wrapped(ui, egui::RichText::new(item).color(COL_TEXT));
            });
        }
    });
}
