use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;
use std::time::{Duration, Instant};

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(COL_TEXT_DIM)
            .family(egui::FontFamily::Monospace)
            .strong(),
    );
}

pub fn cmd_button(ui: &mut egui::Ui, label: &str, variant: &str, enabled: bool) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        "primary" => (COL_ACCENT, COL_ACCENT, COL_BG_DARK),
        "danger" => (Color32::TRANSPARENT, COL_DANGER, COL_DANGER),
        _ => (Color32::TRANSPARENT, COL_ACCENT, COL_ACCENT),
    };

    let text =
        egui::RichText::new(label)
            .size(11.0)
            .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(96.0, 26.0))
        .fill(if enabled && variant == "primary" {
            fill
        } else {
            Color32::TRANSPARENT
        })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

pub fn badge(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(color.linear_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.4)))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(10.0).color(color));
        });
}

pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::new()
        .fill(COL_PANEL)
        .stroke(egui::Stroke::new(1.0, COL_BORDER))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub fn wrapped(ui: &mut egui::Ui, text: impl Into<egui::RichText>) {
    ui.add(egui::Label::new(text.into()).wrap());
}

/// Tracks which field was copied last so its button can show a confirmation.
#[derive(Default)]
pub struct CopyFeedback {
    last: Option<(String, Instant)>,
}

impl CopyFeedback {
    fn window() -> Duration {
        Duration::from_millis(reelplan_config::COPY_FEEDBACK_MS)
    }

    fn is_fresh(&self, key: &str) -> bool {
        self.last
            .as_ref()
            .is_some_and(|(k, at)| k == key && at.elapsed() < Self::window())
    }

    /// Copy button for an already-fetched field. Never touches app state.
    pub fn button(&mut self, ui: &mut egui::Ui, key: &str, text: &str) {
        let fresh = self.is_fresh(key);
        let label = if fresh { "COPIED" } else { "COPY" };
        let color = if fresh { COL_SUCCESS } else { COL_TEXT_DIM };

        let resp = ui
            .add(egui::Button::new(egui::RichText::new(label).size(10.0).color(color)).frame(false))
            .on_hover_text("Copy to clipboard");

        if resp.clicked() {
            ui.ctx().copy_text(text.to_owned());
            self.last = Some((key.to_owned(), Instant::now()));
            ui.ctx().request_repaint_after(Self::window());
        }
    }
}
