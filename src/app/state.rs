// Folio - app/state.rs
//
// Application state management. Holds the selected section, the theme flag,
// the running section transition and the contact form draft.
// Owned by the eframe::App implementation.

use crate::core::model::{ContactField, Section};
use crate::core::motion::{MotionFrame, Transition};

/// In-memory text of the contact form. Never sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Mutable access to the buffer backing `field`.
    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Top-level application state.
///
/// The section and theme flag are private so they can only change through
/// `select` and `toggle_theme`.
#[derive(Debug)]
pub struct AppState {
    /// Currently selected section.
    section: Section,

    /// Dark (true) or light (false) theme.
    dark_mode: bool,

    /// Animation from whatever is on screen to `section`.
    transition: Transition,

    /// The most recent frame handed to the content area.
    last_drawn: Option<MotionFrame>,

    /// Contact form contents.
    pub contact: ContactDraft,

    /// Disable all animations.
    pub reduce_motion: bool,
}

impl AppState {
    /// Create initial state: Home, light theme.
    pub fn new(reduce_motion: bool) -> Self {
        Self {
            section: Section::Home,
            dark_mode: false,
            transition: Transition::mount(Section::Home),
            last_drawn: None,
            contact: ContactDraft::default(),
            reduce_motion,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Replace the selected section.
    ///
    /// Selecting the section that is already selected keeps the current
    /// transition, so nothing visible changes. Otherwise the new transition
    /// starts from what was last drawn: that panel keeps leaving from its
    /// current opacity, or, if it is the one just selected, fades back in.
    pub fn select(&mut self, section: Section) {
        let previous = self.section;
        self.section = section;
        if previous == section {
            return;
        }
        self.transition = match self.last_drawn {
            None => Transition::mount(section),
            Some(shown) if shown.section == section => {
                Transition::resume(section, shown.opacity, shown.panel_elapsed)
            }
            Some(shown) => Transition::leaving(shown.section, shown.opacity, section),
        };
        tracing::debug!(from = %previous, to = %section, "Section selected");
    }

    /// Flip between light and dark theme.
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(dark_mode = self.dark_mode, "Theme toggled");
    }

    /// Sample the section transition at `now` (seconds).
    pub fn motion_frame(&mut self, now: f64) -> MotionFrame {
        let frame = self.transition.frame(now, !self.reduce_motion);
        self.last_drawn = Some(frame);
        frame
    }

    /// Handler for the contact form's Send button. There is no delivery
    /// path, so the draft stays as typed.
    pub fn submit_contact(&self) {
        tracing::debug!(
            has_content = !self.contact.is_empty(),
            "Contact form submitted; no delivery configured"
        );
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}
