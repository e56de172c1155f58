// Folio - ui/panels/mod.rs

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod home;
pub mod projects;
pub mod sidebar;

use crate::app::state::AppState;
use crate::core::model::Section;
use crate::core::motion::MotionFrame;
use crate::ui::theme::Palette;

/// Render the one panel `frame` selects, in the colours of the theme the
/// egui visuals currently carry.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, frame: &MotionFrame, palette: &Palette) {
    let elapsed = frame.panel_elapsed;
    match frame.section {
        Section::Home => home::render(ui, palette, elapsed),
        Section::About => about::render(ui, palette),
        Section::Experience => experience::render(ui, palette, elapsed),
        Section::Education => education::render(ui, palette, elapsed),
        Section::Projects => projects::render(ui, palette, elapsed),
        Section::Contact => {
            if contact::render(ui, &mut state.contact, palette) {
                state.submit_contact();
            }
        }
    }
}
