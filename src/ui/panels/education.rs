// Folio - ui/panels/education.rs

use crate::core::content::{DEGREES, EDUCATION_HEADING};
use crate::core::motion::card_reveal;
use crate::ui::theme::Palette;
use crate::ui::widgets;
use crate::util::constants::ITEM_SLIDE_PX;

pub fn render(ui: &mut egui::Ui, palette: &Palette, elapsed: f64) {
    widgets::section_heading(ui, EDUCATION_HEADING, palette);

    for (i, edu) in DEGREES.iter().enumerate() {
        let from = egui::vec2(-ITEM_SLIDE_PX, 0.0);
        widgets::revealed(ui, card_reveal(elapsed, i), from, |ui| {
            widgets::card(ui, palette, |ui| {
                ui.label(
                    egui::RichText::new(edu.degree)
                        .size(20.0)
                        .strong()
                        .color(palette.heading),
                );
                ui.label(egui::RichText::new(edu.school).color(palette.accent));
                ui.label(
                    egui::RichText::new(format!("Graduated: {}", edu.year))
                        .small()
                        .color(palette.muted),
                );
                ui.add_space(8.0);
                ui.label(egui::RichText::new(edu.description).color(palette.body));
            });
        });
        ui.add_space(24.0);
    }
}
