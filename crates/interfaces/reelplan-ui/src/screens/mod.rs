pub mod guide;
pub mod status;

use crate::utils::CopyFeedback;
use eframe::egui;
use reelplan_app_core::viewmodel::ContentVm;

#[derive(Default)]
pub struct ScreenResponse {
    pub retry_clicked: bool,
}

pub fn draw(ui: &mut egui::Ui, vm: &ContentVm, copy: &mut CopyFeedback) -> ScreenResponse {
    let mut resp = ScreenResponse::default();
    match vm {
        ContentVm::Idle { message } => status::draw_idle(ui, message),
        ContentVm::Generating { idea, message } => status::draw_generating(ui, idea, message),
        ContentVm::Error { message, can_retry } => {
            resp.retry_clicked = status::draw_error(ui, message, *can_retry);
        }
        ContentVm::Overview(vm) => guide::draw_overview(ui, vm, copy),
        ContentVm::Monetization(cards) => guide::draw_monetization(ui, cards),
        ContentVm::Software(platforms) => guide::draw_software(ui, platforms),
        ContentVm::Editing(steps) => guide::draw_editing(ui, steps),
        ContentVm::Production(items) => guide::draw_production(ui, items),
    }
    resp
}
