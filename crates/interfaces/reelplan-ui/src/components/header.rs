use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use reelplan_app_core::GenerationStatus;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, status: GenerationStatus, status_text: &str) {
    let status_col = match status {
        GenerationStatus::Idle => COL_TEXT_DIM,
        GenerationStatus::Generating => COL_WARN,
        GenerationStatus::Completed => COL_SUCCESS,
        GenerationStatus::Error => COL_DANGER,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("REELPLAN")
                        .family(egui::FontFamily::Monospace)
                        .size(12.0)
                        .extra_letter_spacing(2.0)
                        .strong()
                        .color(COL_TEXT),
                );
                tui.label(
                    egui::RichText::new("creator studio")
                        .family(egui::FontFamily::Monospace)
                        .size(10.0)
                        .color(COL_TEXT_DIM),
                );
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                if status == GenerationStatus::Generating {
                    tui.ui_add(egui::Spinner::new());
                }
                tui.label(egui::RichText::new(status_text).color(status_col).size(10.0));
            });
        },
    );
}
