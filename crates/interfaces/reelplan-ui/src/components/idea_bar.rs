use crate::theme::*;
use crate::utils::{cmd_button, section_label};
use eframe::egui;
use reelplan_config::{HOOK_TEMPLATES, IDEA_PLACEHOLDER};

pub struct IdeaBarResponse {
    pub submit: bool,
}

pub fn draw(ui: &mut egui::Ui, idea: &mut String, can_submit: bool) -> IdeaBarResponse {
    let mut submit = false;

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            section_label(ui, "VIDEO IDEA");
            ui.add_space(8.0);

            egui::ComboBox::from_id_salt("hook_templates")
                .selected_text(
                    egui::RichText::new("TEMPLATES")
                        .size(10.0)
                        .color(COL_TEXT_DIM),
                )
                .width(180.0)
                .show_ui(ui, |ui| {
                    for template in HOOK_TEMPLATES {
                        if ui.button(*template).clicked() {
                            *idea = (*template).to_string();
                        }
                    }
                });
        });

        ui.horizontal(|ui| {
            let button_width = 120.0;
            let input = ui.add(
                egui::TextEdit::singleline(idea)
                    .hint_text(IDEA_PLACEHOLDER)
                    .desired_width((ui.available_width() - button_width).max(120.0))
                    .margin(egui::Margin::symmetric(8, 6)),
            );

            // Enter in the field behaves like the button, including its disabled state.
            if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) && can_submit {
                submit = true;
            }

            if cmd_button(ui, "ANALYZE IDEA", "primary", can_submit).clicked() {
                submit = true;
            }
        });
    });

    IdeaBarResponse { submit }
}
