// Folio - ui/panels/about.rs
//
// About panel: bio paragraph, skill bars in two columns, interest chips.

use crate::core::content::{self, ABOUT_HEADING, ABOUT_TEXT, INTERESTS};
use crate::core::model::Skill;
use crate::ui::theme::Palette;
use crate::ui::widgets;

/// Render the About panel.
pub fn render(ui: &mut egui::Ui, palette: &Palette) {
    widgets::section_heading(ui, ABOUT_HEADING, palette);
    widgets::paragraph(ui, ABOUT_TEXT, palette);
    ui.add_space(32.0);

    widgets::sub_heading(ui, "Skills", palette);
    let skills = content::skills();
    ui.columns(2, |cols| {
        for (i, skill) in skills.iter().enumerate() {
            skill_bar(&mut cols[i % 2], skill, palette);
        }
    });
    ui.add_space(32.0);

    widgets::sub_heading(ui, "Interests", palette);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
        for interest in INTERESTS {
            widgets::chip(ui, interest, palette);
        }
    });
}

fn skill_bar(ui: &mut egui::Ui, skill: &Skill, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(skill.name)
                .strong()
                .color(palette.heading),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("{}%", skill.level)).color(palette.muted));
        });
    });
    ui.add(
        egui::ProgressBar::new(skill.fraction())
            .desired_height(8.0)
            .fill(palette.accent),
    );
    ui.add_space(20.0);
}
