// Folio - gui.rs
//
// Top-level eframe::App implementation.

use crate::app::state::AppState;
use crate::ui::shell::Shell;

/// The Folio application.
pub struct FolioApp {
    pub state: AppState,
    shell: Shell,
}

impl FolioApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            shell: Shell::new(),
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.shell.show(ctx, &mut self.state);
    }
}
