use crate::theme::*;
use crate::utils::{section_label, wrapped};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use reelplan_app_core::viewmodel::NavItemVm;
use reelplan_app_core::Tab;

/// Returns the tab the user clicked, if it was selectable.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, items: &[NavItemVm]) -> Option<Tab> {
    let mut selected = None;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        size: percent(1.),
        min_size: taffy::Size {
            width: percent(1.),
            height: length(0.0),
        },
        align_items: Some(taffy::AlignItems::Stretch),
        padding: length(8.0),
        gap: length(4.0),
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.ui(|ui| section_label(ui, "GUIDE"));

            for item in items {
                let text_col = if item.active {
                    COL_ACCENT
                } else if item.enabled {
                    COL_TEXT
                } else {
                    COL_TEXT_DIM.linear_multiply(0.5)
                };

                let response = tui
                    .id(egui_taffy::tid(("nav", item.label)))
                    .style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        align_items: Some(taffy::AlignItems::Center),
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(32.0),
                        },
                        padding: length(4.0),
                        gap: length(8.0),
                        ..Default::default()
                    })
                    .bg_clickable(
                        TuiBackground::new()
                            .with_background_color(if item.active {
                                COL_ACCENT.linear_multiply(0.1)
                            } else {
                                COL_BG
                            })
                            .with_border_color(if item.active {
                                COL_ACCENT
                            } else {
                                COL_BORDER
                            })
                            .with_border_width(1.0),
                        |tui| {
                            if item.active {
                                tui.style(taffy::Style {
                                    size: taffy::Size {
                                        width: length(2.0),
                                        height: percent(1.),
                                    },
                                    flex_shrink: 0.0,
                                    ..Default::default()
                                })
                                .bg_add(
                                    TuiBackground::new().with_background_color(COL_ACCENT),
                                    |_| {},
                                );
                            }
                            tui.label(
                                egui::RichText::new(item.label.to_uppercase())
                                    .family(egui::FontFamily::Monospace)
                                    .size(11.0)
                                    .color(text_col),
                            );
                        },
                    );

                if item.enabled && response.clicked() {
                    selected = Some(item.tab);
                }
            }

            tui.style(taffy::Style {
                flex_grow: 1.0,
                ..Default::default()
            })
            .add(|_| {});

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_shrink: 0.0,
                padding: length(8.0),
                gap: length(4.0),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .bg_add(
                TuiBackground::new()
                    .with_background_color(COL_BG_DARK)
                    .with_border_color(COL_BORDER)
                    .with_border_width(1.0),
                |tui| {
                    tui.label(
                        egui::RichText::new("PRO TIP")
                            .family(egui::FontFamily::Monospace)
                            .size(10.0)
                            .strong()
                            .color(COL_WARN),
                    );
                    tui.ui(|ui| {
                        ui.set_max_width(168.0);
                        wrapped(
                            ui,
                            egui::RichText::new(reelplan_config::PRO_TIP)
                                .size(11.0)
                                .color(COL_TEXT_DIM),
                        );
                    });
                },
            );
        },
    );

    selected
}
