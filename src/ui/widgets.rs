// Folio - ui/widgets.rs
//
// Small building blocks shared by the content panels: headings, cards,
// chips, buttons, and the reveal wrapper used for staggered motion.

use super::theme::{self, Palette};
use egui::text::LayoutJob;
use egui::{Color32, FontId, RichText, Stroke, TextFormat, Ui, UiBuilder, Vec2};

/// Run `add_contents` in a child `Ui` whose available area is moved by
/// `offset`. The parent still advances by the space the child used.
pub fn shifted<R>(ui: &mut Ui, offset: Vec2, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    if offset == Vec2::ZERO {
        return add_contents(ui);
    }
    let rect = ui.available_rect_before_wrap().translate(offset);
    let layout = *ui.layout();
    ui.scope_builder(UiBuilder::new().max_rect(rect).layout(layout), add_contents)
        .inner
}

/// Draw `add_contents` faded to `progress` and displaced by
/// `from * (1 - progress)`, so it settles in place as progress reaches 1.
pub fn revealed<R>(
    ui: &mut Ui,
    progress: f32,
    from: Vec2,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    let progress = progress.clamp(0.0, 1.0);
    ui.scope(|ui| {
        ui.multiply_opacity(progress);
        shifted(ui, from * (1.0 - progress), add_contents)
    })
    .inner
}

/// Panel title.
pub fn section_heading(ui: &mut Ui, text: &str, palette: &Palette) {
    ui.label(RichText::new(text).size(30.0).strong().color(palette.heading));
    ui.add_space(24.0);
}

/// Heading inside a panel.
pub fn sub_heading(ui: &mut Ui, text: &str, palette: &Palette) {
    ui.label(RichText::new(text).size(24.0).strong().color(palette.heading));
    ui.add_space(16.0);
}

/// Body paragraph.
pub fn paragraph(ui: &mut Ui, text: &str, palette: &Palette) {
    ui.label(RichText::new(text).size(17.0).color(palette.body));
}

/// Rounded content card filling the available width.
pub fn card<R>(ui: &mut Ui, palette: &Palette, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::default()
        .fill(palette.card_fill)
        .stroke(Stroke::new(1.0, palette.card_stroke))
        .corner_radius(egui::CornerRadius::same(theme::CARD_RADIUS))
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Pill-shaped tag.
pub fn chip(ui: &mut Ui, text: &str, palette: &Palette) {
    egui::Frame::default()
        .fill(palette.chip_fill)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(12, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(13.0).color(palette.chip_text));
        });
}

const BUTTON_TEXT_SIZE: f32 = 15.0;
const BUTTON_ICON_SIZE: f32 = 12.0;

/// Solid purple call-to-action button.
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_owned()).size(16.0).color(Color32::WHITE))
        .fill(theme::PURPLE_600)
        .min_size(egui::vec2(0.0, 40.0))
}

/// Outlined button in the accent colour, with a trailing icon.
pub fn outline_button(text: &str, icon: &str, palette: &Palette) -> egui::Button<'static> {
    egui::Button::new(labelled_icon(text, icon, palette.accent))
        .fill(Color32::TRANSPARENT)
        .stroke(Stroke::new(1.0, palette.accent))
        .min_size(egui::vec2(0.0, 36.0))
}

/// `text` followed by a smaller, vertically centred `icon` glyph.
pub fn labelled_icon(text: &str, icon: &str, colour: Color32) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.append(
        text,
        0.0,
        TextFormat {
            font_id: FontId::proportional(BUTTON_TEXT_SIZE),
            color: colour,
            ..Default::default()
        },
    );
    job.append(
        icon,
        6.0,
        TextFormat {
            font_id: FontId::proportional(BUTTON_ICON_SIZE),
            color: colour,
            valign: egui::Align::Center,
            ..Default::default()
        },
    );
    job
}

/// Linear interpolation between two opaque colours.
pub fn lerp_colour(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Text whose colour runs from `start` to `end` across its characters.
pub fn gradient_text(text: &str, size: f32, start: Color32, end: Color32) -> LayoutJob {
    let mut job = LayoutJob::default();
    let count = text.chars().count().max(2) - 1;
    for (i, ch) in text.chars().enumerate() {
        let colour = lerp_colour(start, end, i as f32 / count as f32);
        let mut buf = [0u8; 4];
        job.append(
            ch.encode_utf8(&mut buf),
            0.0,
            TextFormat {
                font_id: FontId::proportional(size),
                color: colour,
                ..Default::default()
            },
        );
    }
    job
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Color32::from_rgb(0, 100, 200);
        let b = Color32::from_rgb(200, 100, 0);
        assert_eq!(lerp_colour(a, b, 0.0), a);
        assert_eq!(lerp_colour(a, b, 1.0), b);
        assert_eq!(lerp_colour(a, b, 0.5), Color32::from_rgb(100, 100, 100));
    }

    #[test]
    fn test_gradient_runs_start_to_end() {
        let start = theme::PURPLE_600;
        let end = theme::INDIGO_600;
        let job = gradient_text("Welcome", 48.0, start, end);
        assert_eq!(job.text, "Welcome");
        assert_eq!(job.sections.len(), 7);
        assert_eq!(job.sections[0].format.color, start);
        assert_eq!(job.sections[6].format.color, end);
    }

    #[test]
    fn test_labelled_icon_is_smaller_and_spaced() {
        let job = labelled_icon("View Project", "\u{2197}", theme::PURPLE_600);
        assert_eq!(job.text, "View Project\u{2197}");
        assert_eq!(job.sections.len(), 2);
        let (label, icon) = (&job.sections[0], &job.sections[1]);
        assert!(icon.format.font_id.size < label.format.font_id.size);
        assert!(icon.leading_space > 0.0);
        assert_eq!(icon.format.color, label.format.color);
    }

    #[test]
    fn test_gradient_single_char() {
        let job = gradient_text("W", 12.0, Color32::RED, Color32::BLUE);
        assert_eq!(job.sections.len(), 1);
        assert_eq!(job.sections[0].format.color, Color32::RED);
    }
}
