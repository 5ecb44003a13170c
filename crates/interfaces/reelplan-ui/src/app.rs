use crate::components::{header, idea_bar, sidebar};
use crate::screens;
use crate::utils::CopyFeedback;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use reelplan_app_core::{viewmodel, AppCommand, AppKernel, GeminiClient};

pub struct ReelPlanUiApp {
    kernel: AppKernel<GeminiClient>,
    idea: String,
    copy: CopyFeedback,
}

impl ReelPlanUiApp {
    pub fn new(kernel: AppKernel<GeminiClient>) -> Self {
        Self {
            kernel,
            idea: String::new(),
            copy: CopyFeedback::default(),
        }
    }
}

impl eframe::App for ReelPlanUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.kernel.tick() {
            ctx.request_repaint();
        }

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::MIN.saturating_add(2);
        });
        ctx.style_mut(|style| {
            // Global `Extend` keeps text measurement width-independent for taffy;
            // long-form labels opt back into wrapping.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let state = self.kernel.store.state();
        let content = viewmodel::content_vm(&state);
        let nav = viewmodel::nav_vm(&state);
        let can_submit = viewmodel::can_submit(&state, &self.idea);

        let mut commands = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(28.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        header::draw(tui, state.status(), viewmodel::status_label(&state));
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: percent(1.),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.style(taffy::Style {
                            size: taffy::Size {
                                width: length(200.0),
                                height: percent(1.),
                            },
                            flex_shrink: 0.0,
                            min_size: taffy::Size {
                                width: length(200.0),
                                height: length(0.0),
                            },
                            ..Default::default()
                        })
                        .add(|tui| {
                            if let Some(tab) = sidebar::draw(tui, &nav) {
                                commands.push(AppCommand::SelectTab(tab));
                            }
                        });

                        tui.style(taffy::Style {
                            flex_direction: taffy::FlexDirection::Column,
                            flex_grow: 1.0,
                            size: percent(1.),
                            flex_basis: length(0.0),
                            min_size: taffy::Size {
                                width: length(0.0),
                                height: length(0.0),
                            },
                            overflow: taffy::Point {
                                x: taffy::Overflow::Hidden,
                                y: taffy::Overflow::Hidden,
                            },
                            padding: length(12.0),
                            gap: length(8.0),
                            ..Default::default()
                        })
                        .add(|tui| {
                            tui.style(taffy::Style {
                                flex_shrink: 0.0,
                                size: taffy::Size {
                                    width: percent(1.),
                                    height: auto(),
                                },
                                ..Default::default()
                            })
                            .add(|tui| {
                                let resp = tui.ui(|ui| idea_bar::draw(ui, &mut self.idea, can_submit));
                                if resp.submit {
                                    commands.push(AppCommand::Submit(self.idea.clone()));
                                }
                            });

                            tui.style(taffy::Style {
                                flex_grow: 1.0,
                                flex_basis: length(0.0),
                                size: taffy::Size {
                                    width: percent(1.),
                                    height: auto(),
                                },
                                min_size: taffy::Size {
                                    width: length(0.0),
                                    height: length(0.0),
                                },
                                ..Default::default()
                            })
                            .add(|tui| {
                                let resp = tui.ui(|ui| {
                                    egui::ScrollArea::vertical()
                                        .auto_shrink([false, false])
                                        .show(ui, |ui| screens::draw(ui, &content, &mut self.copy))
                                        .inner
                                });
                                if resp.retry_clicked {
                                    commands.push(AppCommand::Retry);
                                }
                            });
                        });
                    });
                });
        });

        for cmd in commands {
            self.kernel.dispatch(cmd);
        }

        if self.kernel.store.with_state(|s| s.is_generating()) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
