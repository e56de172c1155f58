// Folio - ui/panels/experience.rs

use crate::core::content::{EXPERIENCE_HEADING, JOBS};
use crate::core::motion::card_reveal;
use crate::ui::theme::Palette;
use crate::ui::widgets;
use crate::util::constants::ITEM_SLIDE_PX;

/// Render the work history, one card per job sliding in from the left.
pub fn render(ui: &mut egui::Ui, palette: &Palette, elapsed: f64) {
    widgets::section_heading(ui, EXPERIENCE_HEADING, palette);

    for (i, job) in JOBS.iter().enumerate() {
        let from = egui::vec2(-ITEM_SLIDE_PX, 0.0);
        widgets::revealed(ui, card_reveal(elapsed, i), from, |ui| {
            widgets::card(ui, palette, |ui| {
                ui.label(
                    egui::RichText::new(job.title)
                        .size(20.0)
                        .strong()
                        .color(palette.heading),
                );
                ui.label(egui::RichText::new(job.company).color(palette.accent));
                ui.label(
                    egui::RichText::new(job.period)
                        .small()
                        .color(palette.muted),
                );
                ui.add_space(8.0);
                ui.label(egui::RichText::new(job.description).color(palette.body));
            });
        });
        ui.add_space(24.0);
    }
}
