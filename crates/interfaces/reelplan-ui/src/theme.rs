use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};
use reelplan_app_core::viewmodel::Tone;

// Slate/indigo palette
pub const COL_BG: Color32 = Color32::from_rgb(15, 23, 42);
pub const COL_BG_DARK: Color32 = Color32::from_rgb(2, 6, 23);
pub const COL_PANEL: Color32 = Color32::from_rgb(30, 41, 59);
pub const COL_BORDER: Color32 = Color32::from_rgb(51, 65, 85);
pub const COL_TEXT: Color32 = Color32::from_rgb(226, 232, 240);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(148, 163, 184);
pub const COL_ACCENT: Color32 = Color32::from_rgb(129, 140, 248); // Indigo
pub const COL_WARN: Color32 = Color32::from_rgb(251, 191, 36);
pub const COL_DANGER: Color32 = Color32::from_rgb(248, 113, 113);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(74, 222, 128);
pub const COL_CALM: Color32 = Color32::from_rgb(96, 165, 250);

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Calm => COL_CALM,
        Tone::Warn => COL_WARN,
        Tone::Danger => COL_DANGER,
        Tone::Positive => COL_SUCCESS,
    }
}

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_BG;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_BG_DARK;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);

    // Hover effects
    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.1);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(11.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(11.0, FontFamily::Monospace)),
        (TextStyle::Small, FontId::new(10.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}
