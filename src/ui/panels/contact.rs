// Folio - ui/panels/contact.rs
//
// Contact form. Text lives in the in-memory draft; Send has no delivery
// path.

use crate::app::state::ContactDraft;
use crate::core::content::{CONTACT_HEADING, CONTACT_SUBMIT};
use crate::core::model::ContactField;
use crate::ui::theme::{self, Palette};
use crate::ui::widgets;

/// Render the form. Returns true when Send was clicked this frame.
pub fn render(ui: &mut egui::Ui, draft: &mut ContactDraft, palette: &Palette) -> bool {
    widgets::section_heading(ui, CONTACT_HEADING, palette);

    let mut submitted = false;
    ui.vertical_centered(|ui| {
        ui.set_max_width(theme::FORM_MAX_WIDTH);
        for &field in ContactField::all() {
            let buffer = draft.field_mut(field);
            let edit = if field.rows() > 1 {
                egui::TextEdit::multiline(buffer).desired_rows(field.rows())
            } else {
                egui::TextEdit::singleline(buffer)
            };
            ui.add(
                edit.hint_text(field.placeholder())
                    .desired_width(f32::INFINITY)
                    .margin(egui::Margin::same(12)),
            );
            ui.add_space(16.0);
        }

        let button = widgets::primary_button(CONTACT_SUBMIT)
            .min_size(egui::vec2(ui.available_width(), 44.0));
        submitted = ui.add(button).clicked();
    });
    submitted
}
