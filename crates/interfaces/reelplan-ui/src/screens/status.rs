use crate::theme::*;
use crate::utils::{cmd_button, wrapped};
use eframe::egui;

fn centered(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.set_max_width(520.0);
        add_contents(ui);
    });
}

pub fn draw_idle(ui: &mut egui::Ui, message: &str) {
    centered(ui, |ui| {
        ui.label(
            egui::RichText::new("READY TO PLAN")
                .family(egui::FontFamily::Monospace)
                .strong()
                .color(COL_ACCENT),
        );
        wrapped(ui, egui::RichText::new(message).color(COL_TEXT_DIM));
    });
}

pub fn draw_generating(ui: &mut egui::Ui, idea: &str, message: &str) {
    centered(ui, |ui| {
        ui.add(egui::Spinner::new().size(28.0));
        ui.add_space(8.0);
        wrapped(ui, egui::RichText::new(message).color(COL_TEXT));
        wrapped(
            ui,
            egui::RichText::new(format!("\"{idea}\""))
                .italics()
                .color(COL_TEXT_DIM),
        );
    });
}

/// Returns true when the retry button was pressed.
pub fn draw_error(ui: &mut egui::Ui, message: &str, can_retry: bool) -> bool {
    let mut retry = false;
    centered(ui, |ui| {
        ui.label(
            egui::RichText::new("GENERATION FAILED")
                .family(egui::FontFamily::Monospace)
                .strong()
                .color(COL_DANGER),
        );
        wrapped(ui, egui::RichText::new(message).color(COL_TEXT));
        ui.add_space(8.0);
        if can_retry {
            retry = cmd_button(ui, "RETRY", "danger", true).clicked();
        }
    });
    retry
}
