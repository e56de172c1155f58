// Folio - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.

use std::fmt;

// =============================================================================
// Section
// =============================================================================

/// One of the content panels shown in the main area.
///
/// The set is closed: navigation can only ever select one of these, and
/// exactly one is selected at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Education,
    Projects,
    Contact,
}

impl Section {
    /// Returns all variants in navigation order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Experience,
            Section::Education,
            Section::Projects,
            Section::Contact,
        ]
    }

    /// Label shown in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Icon glyph drawn before the label.
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Home => "\u{1f3e0}",
            Section::About => "\u{1f464}",
            Section::Experience => "\u{1f4bc}",
            Section::Education => "\u{1f393}",
            Section::Projects => "\u{1f4c1}",
            Section::Contact => "\u{1f4ac}",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Static content records
// =============================================================================

/// Identity block at the top of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
}

/// A skill with a self-assessed proficiency percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

impl Skill {
    /// Proficiency as a 0.0..=1.0 fraction for progress bars.
    pub fn fraction(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

/// A position in the work history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// A completed degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    pub degree: &'static str,
    pub school: &'static str,
    pub year: &'static str,
    pub description: &'static str,
}

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub tech: &'static str,
    pub description: &'static str,
}

/// A social/contact link in the sidebar footer.
///
/// `url` is a placeholder (`#`) until a real target is filled in; links
/// with a placeholder target are never opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub glyph: &'static str,
    pub url: &'static str,
}

impl SocialLink {
    /// Whether the link points somewhere real.
    pub fn has_target(&self) -> bool {
        !self.url.is_empty() && self.url != "#"
    }
}

/// Fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn all() -> &'static [ContactField] {
        &[ContactField::Name, ContactField::Email, ContactField::Message]
    }

    /// Placeholder text shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Message => "Your Message",
        }
    }

    /// Visible rows; only the message is multi-line.
    pub fn rows(&self) -> usize {
        match self {
            ContactField::Message => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_set_is_closed_and_ordered() {
        let all = Section::all();
        assert_eq!(all.len(), 6);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 6);
        assert_eq!(all[0], Section::Home);
        assert_eq!(all[5], Section::Contact);
    }

    #[test]
    fn test_default_section_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_display_matches_label() {
        for s in Section::all() {
            assert_eq!(s.to_string(), s.label());
            assert!(!s.icon().is_empty());
        }
    }

    #[test]
    fn test_skill_fraction_clamped() {
        let s = Skill {
            name: "x",
            level: 250,
        };
        assert_eq!(s.fraction(), 1.0);
        let s = Skill {
            name: "x",
            level: 55,
        };
        assert!((s.fraction() - 0.55).abs() < f32::EPSILON);
    }

    #[test]
    fn test_placeholder_links_have_no_target() {
        let link = SocialLink {
            name: "GitHub",
            glyph: "G",
            url: "#",
        };
        assert!(!link.has_target());
    }

    #[test]
    fn test_only_message_is_multiline() {
        let rows: Vec<_> = ContactField::all().iter().map(|f| f.rows()).collect();
        assert_eq!(rows, vec![1, 1, 4]);
    }
}
