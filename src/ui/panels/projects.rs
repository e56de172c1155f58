// Folio - ui/panels/projects.rs
//
// Project showcase: two-column grid of cards rising into place.

use crate::core::content::{PROJECTS, PROJECTS_HEADING, PROJECT_CTA};
use crate::core::model::Project;
use crate::core::motion::card_reveal;
use crate::ui::theme::Palette;
use crate::ui::widgets;
use crate::util::constants::ITEM_SLIDE_PX;

pub fn render(ui: &mut egui::Ui, palette: &Palette, elapsed: f64) {
    widgets::section_heading(ui, PROJECTS_HEADING, palette);

    ui.columns(2, |cols| {
        for (i, project) in PROJECTS.iter().enumerate() {
            let col = &mut cols[i % 2];
            let from = egui::vec2(0.0, ITEM_SLIDE_PX);
            widgets::revealed(col, card_reveal(elapsed, i), from, |ui| {
                project_card(ui, project, palette);
            });
            col.add_space(24.0);
        }
    });
}

fn project_card(ui: &mut egui::Ui, project: &Project, palette: &Palette) {
    widgets::card(ui, palette, |ui| {
        ui.label(
            egui::RichText::new(project.name)
                .size(20.0)
                .strong()
                .color(palette.heading),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(project.tech)
                .small()
                .color(palette.accent),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(project.description).color(palette.body));
        ui.add_space(16.0);
        let button = widgets::outline_button(PROJECT_CTA, "\u{2197}", palette);
        if ui.add(button).clicked() {
            tracing::debug!(project = project.name, "Project link clicked");
        }
    });
}
