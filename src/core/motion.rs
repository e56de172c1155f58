// Folio - core/motion.rs
//
// Time-based animation curves for section transitions and staggered
// content reveals. Pure functions of a clock value in seconds so they can
// be driven by egui's input time or by tests.

use super::model::Section;
use crate::util::constants::{
    HERO_DELAYS_SECS, HERO_REVEAL_SECS, ITEM_REVEAL_SECS, ITEM_STAGGER_SECS, SECTION_FADE_SECS,
    SECTION_SLIDE_PX,
};

/// Cubic ease-out on a 0..=1 progress value.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Eased progress of an element that starts `delay` seconds after its panel
/// mounted and runs for `duration` seconds.
pub fn reveal(elapsed: f64, delay: f64, duration: f64) -> f32 {
    let since = elapsed - delay;
    if since <= 0.0 {
        return 0.0;
    }
    if duration <= 0.0 || since >= duration {
        return 1.0;
    }
    ease_out((since / duration) as f32)
}

/// Reveal progress for the card at `index` in a list panel.
pub fn card_reveal(elapsed: f64, index: usize) -> f32 {
    reveal(elapsed, ITEM_STAGGER_SECS * index as f64, ITEM_REVEAL_SECS)
}

/// Reveal progress for the Home element at `index` (headline, tagline, button).
pub fn hero_reveal(elapsed: f64, index: usize) -> f32 {
    let delay = HERO_DELAYS_SECS
        .get(index)
        .copied()
        .unwrap_or(HERO_DELAYS_SECS[HERO_DELAYS_SECS.len() - 1]);
    reveal(elapsed, delay, HERO_REVEAL_SECS)
}

/// Time after a panel mounts by which every child animation has finished.
pub fn settle_secs() -> f64 {
    let hero = HERO_DELAYS_SECS[HERO_DELAYS_SECS.len() - 1] + HERO_REVEAL_SECS;
    // Longest list panel is Projects with four cards.
    let cards = ITEM_STAGGER_SECS * 3.0 + ITEM_REVEAL_SECS;
    hero.max(cards).max(SECTION_FADE_SECS)
}

/// What the content area should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    /// The panel to draw. Exactly one panel is drawn per frame.
    pub section: Section,
    /// Panel opacity, 0.0..=1.0.
    pub opacity: f32,
    /// Vertical offset of the panel in points (negative is up).
    pub offset_y: f32,
    /// Seconds since `section` mounted, for child reveals. Infinite when the
    /// panel is leaving or motion is disabled, so children draw fully shown.
    pub panel_elapsed: f64,
    /// True once the panel and all its children are at rest.
    pub settled: bool,
}

impl MotionFrame {
    fn at_rest(section: Section) -> Self {
        Self {
            section,
            opacity: 1.0,
            offset_y: 0.0,
            panel_elapsed: f64::INFINITY,
            settled: true,
        }
    }
}

/// The panel a transition is taking off screen, and the opacity it was last
/// drawn at.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Exit {
    section: Section,
    opacity: f32,
}

/// A wait-mode section transition: the outgoing panel fully exits before the
/// incoming panel starts to enter.
///
/// Both phases run at the full-fade rate, so a panel that starts part-way
/// (interrupted by a new selection) only covers the remaining distance.
///
/// The start time is stamped lazily on the first frame that samples it, so
/// a transition can be created from an input handler that has no clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    exit: Option<Exit>,
    to: Section,
    enter_opacity: f32,
    enter_elapsed: f64,
    started_at: Option<f64>,
}

impl Transition {
    /// Initial mount: enter animation only.
    pub fn mount(section: Section) -> Self {
        Self {
            exit: None,
            to: section,
            enter_opacity: 0.0,
            enter_elapsed: 0.0,
            started_at: None,
        }
    }

    /// Exit `from`, currently drawn at `from_opacity`, then enter `to`.
    pub fn leaving(from: Section, from_opacity: f32, to: Section) -> Self {
        Self {
            exit: Some(Exit {
                section: from,
                opacity: from_opacity.clamp(0.0, 1.0),
            }),
            ..Self::mount(to)
        }
    }

    /// Bring `section` back to rest from where it was last drawn: `opacity`,
    /// with its children `panel_elapsed` seconds into their reveals.
    pub fn resume(section: Section, opacity: f32, panel_elapsed: f64) -> Self {
        Self {
            enter_opacity: opacity.clamp(0.0, 1.0),
            enter_elapsed: panel_elapsed.max(0.0),
            ..Self::mount(section)
        }
    }

    fn exit_secs(&self) -> f64 {
        self.exit
            .map_or(0.0, |exit| SECTION_FADE_SECS * f64::from(exit.opacity))
    }

    /// Sample the transition at `now` (seconds). With `animate` false the
    /// target is returned fully at rest.
    pub fn frame(&mut self, now: f64, animate: bool) -> MotionFrame {
        if !animate {
            return MotionFrame::at_rest(self.to);
        }

        let started = *self.started_at.get_or_insert(now);
        let t = (now - started).max(0.0);
        let exit_secs = self.exit_secs();

        if let Some(exit) = self.exit {
            if t < exit_secs {
                let p = ease_out((t / exit_secs) as f32);
                let opacity = exit.opacity * (1.0 - p);
                return MotionFrame {
                    section: exit.section,
                    opacity,
                    offset_y: -SECTION_SLIDE_PX * (1.0 - opacity),
                    panel_elapsed: f64::INFINITY,
                    settled: false,
                };
            }
        }

        let entered = t - exit_secs;
        let enter_secs = SECTION_FADE_SECS * f64::from(1.0 - self.enter_opacity);
        let p = if enter_secs <= 0.0 {
            1.0
        } else {
            ease_out((entered / enter_secs) as f32)
        };
        let opacity = if p >= 1.0 {
            1.0
        } else {
            self.enter_opacity + (1.0 - self.enter_opacity) * p
        };
        let panel_elapsed = self.enter_elapsed + entered;
        MotionFrame {
            section: self.to,
            opacity,
            offset_y: SECTION_SLIDE_PX * (1.0 - opacity),
            panel_elapsed,
            settled: opacity >= 1.0 && panel_elapsed >= settle_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(-3.0), 0.0);
        assert_eq!(ease_out(7.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn test_reveal_waits_for_delay() {
        assert_eq!(reveal(0.1, 0.2, 0.5), 0.0);
        assert_eq!(reveal(0.7, 0.2, 0.5), 1.0);
        let mid = reveal(0.45, 0.2, 0.5);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn test_reveal_zero_duration_is_instant() {
        assert_eq!(reveal(0.3, 0.2, 0.0), 1.0);
    }

    #[test]
    fn test_infinite_elapsed_is_fully_revealed() {
        assert_eq!(card_reveal(f64::INFINITY, 3), 1.0);
        assert_eq!(hero_reveal(f64::INFINITY, 0), 1.0);
    }

    #[test]
    fn test_cards_stagger_by_index() {
        let t = 0.15;
        assert!(card_reveal(t, 0) > card_reveal(t, 1));
        assert_eq!(card_reveal(t, 2), 0.0);
    }

    #[test]
    fn test_mount_skips_exit_phase() {
        let mut tr = Transition::mount(Section::Home);
        let f = tr.frame(10.0, true);
        assert_eq!(f.section, Section::Home);
        assert_eq!(f.opacity, 0.0);
        assert_eq!(f.offset_y, SECTION_SLIDE_PX);
        assert!(!f.settled);

        let f = tr.frame(10.0 + SECTION_FADE_SECS * 2.0, true);
        assert_eq!(f.opacity, 1.0);
        assert_eq!(f.offset_y, 0.0);
    }

    #[test]
    fn test_leaving_exits_then_enters() {
        let mut tr = Transition::leaving(Section::Home, 1.0, Section::Projects);
        let start = tr.frame(1.0, true);
        assert_eq!(start.section, Section::Home);
        assert_eq!(start.opacity, 1.0);

        let leaving = tr.frame(1.0 + SECTION_FADE_SECS * 0.5, true);
        assert_eq!(leaving.section, Section::Home);
        assert!(leaving.offset_y < 0.0);

        let entering = tr.frame(1.0 + SECTION_FADE_SECS * 1.5, true);
        assert_eq!(entering.section, Section::Projects);
        assert!(entering.offset_y > 0.0);

        let done = tr.frame(1.0 + SECTION_FADE_SECS + settle_secs() + 0.1, true);
        assert_eq!(done.section, Section::Projects);
        assert!(done.settled);
        assert_eq!(done.opacity, 1.0);
    }

    #[test]
    fn test_disabled_motion_is_at_rest() {
        let mut tr = Transition::leaving(Section::About, 1.0, Section::Contact);
        let f = tr.frame(0.0, false);
        assert_eq!(f, MotionFrame::at_rest(Section::Contact));
    }

    #[test]
    fn test_partial_exit_continues_from_its_opacity() {
        let mut tr = Transition::leaving(Section::Home, 0.25, Section::About);
        let start = tr.frame(2.0, true);
        assert_eq!(start.section, Section::Home);
        assert_eq!(start.opacity, 0.25);
        assert_eq!(start.offset_y, -SECTION_SLIDE_PX * 0.75);

        // A quarter of the opacity left means a quarter of the fade time.
        let later = tr.frame(2.0 + SECTION_FADE_SECS * 0.2, true);
        assert_eq!(later.section, Section::Home);
        assert!(later.opacity < 0.25);

        let entering = tr.frame(2.0 + SECTION_FADE_SECS * 0.3, true);
        assert_eq!(entering.section, Section::About);
        assert!(entering.opacity < 0.5);
    }

    #[test]
    fn test_fully_faded_exit_is_skipped() {
        let mut tr = Transition::leaving(Section::Home, 0.0, Section::About);
        let f = tr.frame(0.0, true);
        assert_eq!(f.section, Section::About);
        assert_eq!(f.opacity, 0.0);
    }

    #[test]
    fn test_resume_starts_from_drawn_opacity() {
        let mut tr = Transition::resume(Section::Education, 0.6, 0.05);
        let f = tr.frame(4.0, true);
        assert_eq!(f.section, Section::Education);
        assert!((f.opacity - 0.6).abs() < 1e-6);
        assert!((f.panel_elapsed - 0.05).abs() < 1e-9);

        let done = tr.frame(4.0 + settle_secs(), true);
        assert_eq!(done.opacity, 1.0);
        assert!(done.settled);
    }

    #[test]
    fn test_resume_of_leaving_panel_keeps_children_shown() {
        let mut tr = Transition::resume(Section::Projects, 0.4, f64::INFINITY);
        let f = tr.frame(0.0, true);
        assert!(!f.settled);
        assert_eq!(card_reveal(f.panel_elapsed, 3), 1.0);
        let done = tr.frame(SECTION_FADE_SECS, true);
        assert!(done.settled);
    }

    #[test]
    fn test_settle_covers_hero_sequence() {
        assert!(settle_secs() >= 1.1 - 1e-9);
    }
}
