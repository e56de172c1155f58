// Folio - ui/panels/home.rs
//
// Landing panel: gradient headline, tagline and call-to-action, revealed
// one after another.

use crate::core::content::{HERO_CTA, HERO_HEADLINE, HERO_TAGLINE};
use crate::core::motion::hero_reveal;
use crate::ui::theme::Palette;
use crate::ui::widgets;
use crate::util::constants::{HERO_START_SCALE, ITEM_SLIDE_PX};

const HEADLINE_SIZE: f32 = 48.0;

pub fn render(ui: &mut egui::Ui, palette: &Palette, elapsed: f64) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);

        // Headline grows from half size while fading in.
        let headline = hero_reveal(elapsed, 0);
        let scale = HERO_START_SCALE + (1.0 - HERO_START_SCALE) * headline;
        widgets::revealed(ui, headline, egui::Vec2::ZERO, |ui| {
            ui.label(widgets::gradient_text(
                HERO_HEADLINE,
                HEADLINE_SIZE * scale,
                palette.gradient_start,
                palette.gradient_end,
            ));
        });
        ui.add_space(24.0);

        let rise = egui::vec2(0.0, ITEM_SLIDE_PX);
        widgets::revealed(ui, hero_reveal(elapsed, 1), rise, |ui| {
            ui.label(
                egui::RichText::new(HERO_TAGLINE)
                    .size(20.0)
                    .color(palette.muted),
            );
        });
        ui.add_space(32.0);

        widgets::revealed(ui, hero_reveal(elapsed, 2), rise, |ui| {
            if ui.add(widgets::primary_button(HERO_CTA)).clicked() {
                tracing::debug!("Call-to-action clicked");
            }
        });
    });
}
