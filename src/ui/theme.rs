// Folio - ui/theme.rs
//
// Colour scheme, light/dark visuals, theme synchronisation, and layout
// constants. No dependencies on app state or business logic.

use egui::{Color32, Context, Theme, Visuals};

// Tailwind-derived palette.
pub const PURPLE_100: Color32 = Color32::from_rgb(243, 232, 255);
pub const PURPLE_200: Color32 = Color32::from_rgb(233, 213, 255);
pub const PURPLE_400: Color32 = Color32::from_rgb(192, 132, 252);
pub const PURPLE_600: Color32 = Color32::from_rgb(147, 51, 234);
pub const PURPLE_700: Color32 = Color32::from_rgb(126, 34, 206);
pub const PURPLE_800: Color32 = Color32::from_rgb(107, 33, 168);
pub const PURPLE_900: Color32 = Color32::from_rgb(88, 28, 135);
pub const INDIGO_400: Color32 = Color32::from_rgb(129, 140, 248);
pub const INDIGO_600: Color32 = Color32::from_rgb(79, 70, 229);
pub const INDIGO_800: Color32 = Color32::from_rgb(55, 48, 163);
pub const INDIGO_950: Color32 = Color32::from_rgb(30, 27, 75);
pub const GRAY_100: Color32 = Color32::from_rgb(243, 244, 246);
pub const GRAY_300: Color32 = Color32::from_rgb(209, 213, 219);
pub const GRAY_400: Color32 = Color32::from_rgb(156, 163, 175);
pub const GRAY_500: Color32 = Color32::from_rgb(107, 114, 128);
pub const GRAY_700: Color32 = Color32::from_rgb(55, 65, 81);
pub const GRAY_800: Color32 = Color32::from_rgb(31, 41, 55);
pub const GRAY_900: Color32 = Color32::from_rgb(17, 24, 39);

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 320.0;
pub const SIDEBAR_MARGIN: i8 = 24;
pub const AVATAR_RADIUS: f32 = 64.0;
pub const AVATAR_BORDER: f32 = 4.0;
pub const CONTENT_MAX_WIDTH: f32 = 896.0;
pub const CONTENT_MARGIN: i8 = 32;
pub const FORM_MAX_WIDTH: f32 = 448.0;
pub const CARD_PADDING: i8 = 24;
pub const CARD_RADIUS: u8 = 8;
pub const NAV_ITEM_HEIGHT: f32 = 44.0;

/// Per-theme colours for content that egui's visuals do not cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub heading: Color32,
    pub body: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub gradient_start: Color32,
    pub gradient_end: Color32,
    pub card_fill: Color32,
    pub card_stroke: Color32,
    pub chip_fill: Color32,
    pub chip_text: Color32,
    pub sidebar_top: Color32,
    pub sidebar_bottom: Color32,
    pub sidebar_subtitle: Color32,
    pub avatar_border: Color32,
    pub field_stroke: Color32,
}

/// Colours for the given theme.
pub fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        Palette {
            heading: Color32::WHITE,
            body: GRAY_300,
            muted: GRAY_400,
            accent: PURPLE_400,
            gradient_start: PURPLE_400,
            gradient_end: INDIGO_400,
            card_fill: GRAY_800,
            card_stroke: GRAY_700,
            chip_fill: PURPLE_900,
            chip_text: PURPLE_200,
            sidebar_top: PURPLE_900,
            sidebar_bottom: INDIGO_950,
            sidebar_subtitle: PURPLE_200,
            avatar_border: GRAY_800,
            field_stroke: GRAY_700,
        }
    } else {
        Palette {
            heading: GRAY_900,
            body: GRAY_700,
            muted: GRAY_500,
            accent: PURPLE_600,
            gradient_start: PURPLE_600,
            gradient_end: INDIGO_600,
            card_fill: Color32::WHITE,
            card_stroke: GRAY_300,
            chip_fill: PURPLE_100,
            chip_text: PURPLE_800,
            sidebar_top: PURPLE_700,
            sidebar_bottom: INDIGO_800,
            sidebar_subtitle: PURPLE_200,
            avatar_border: Color32::WHITE,
            field_stroke: GRAY_300,
        }
    }
}

/// egui visuals for the given theme.
pub fn visuals(dark_mode: bool) -> Visuals {
    let mut v = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    let p = palette(dark_mode);
    v.panel_fill = if dark_mode { GRAY_900 } else { GRAY_100 };
    v.window_fill = p.card_fill;
    v.extreme_bg_color = if dark_mode { GRAY_800 } else { Color32::WHITE };
    v.hyperlink_color = p.accent;
    v.selection.bg_fill = PURPLE_600;
    v.selection.stroke.color = PURPLE_600;
    v.widgets.inactive.bg_stroke.color = p.field_stroke;
    v
}

/// Make `dark_mode` the active egui theme.
pub fn apply(ctx: &Context, dark_mode: bool) {
    let theme = if dark_mode { Theme::Dark } else { Theme::Light };
    ctx.set_visuals_of(theme, visuals(dark_mode));
    ctx.set_theme(theme);
}

/// Set the body font size for both themes.
pub fn apply_font_size(ctx: &Context, size: f32) {
    ctx.all_styles_mut(|style| {
        if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
            body.size = size;
        }
    });
}

/// Keeps the egui context's theme in step with the theme flag.
///
/// Applies on the first call and on every change of the flag after that;
/// calling it again with the same flag does nothing.
#[derive(Debug, Default)]
pub struct ThemeSync {
    applied: Option<bool>,
}

impl ThemeSync {
    /// Apply `dark_mode` if it differs from what was last applied.
    /// Returns true when the visuals were (re)applied.
    pub fn sync(&mut self, ctx: &Context, dark_mode: bool) -> bool {
        if self.applied == Some(dark_mode) {
            return false;
        }
        apply(ctx, dark_mode);
        self.applied = Some(dark_mode);
        tracing::debug!(dark_mode, "Theme applied");
        true
    }

    /// The flag value last applied, if any.
    pub fn applied(&self) -> Option<bool> {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_follow_flag() {
        assert!(visuals(true).dark_mode);
        assert!(!visuals(false).dark_mode);
        assert_eq!(visuals(false).panel_fill, GRAY_100);
        assert_eq!(visuals(true).panel_fill, GRAY_900);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(palette(true), palette(false));
    }

    #[test]
    fn test_sync_applies_on_first_call() {
        let ctx = Context::default();
        let mut sync = ThemeSync::default();
        assert_eq!(sync.applied(), None);
        assert!(sync.sync(&ctx, false));
        assert_eq!(ctx.theme(), Theme::Light);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let ctx = Context::default();
        let mut sync = ThemeSync::default();
        sync.sync(&ctx, true);
        assert!(!sync.sync(&ctx, true));
        assert_eq!(ctx.theme(), Theme::Dark);
    }

    #[test]
    fn test_sync_round_trip() {
        let ctx = Context::default();
        let mut sync = ThemeSync::default();
        sync.sync(&ctx, false);
        let light = ctx.style().visuals.clone();
        assert!(sync.sync(&ctx, true));
        assert!(ctx.style().visuals.dark_mode);
        assert!(sync.sync(&ctx, false));
        assert_eq!(ctx.style().visuals, light);
    }

    #[test]
    fn test_font_size_applies() {
        let ctx = Context::default();
        apply_font_size(&ctx, 18.0);
        let size = ctx.style().text_styles[&egui::TextStyle::Body].size;
        assert_eq!(size, 18.0);
    }
}
