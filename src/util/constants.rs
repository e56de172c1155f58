// Folio - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Folio";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "Folio";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default tracing filter when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Smallest accepted `[ui] font_size`.
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Largest accepted `[ui] font_size`.
pub const MAX_FONT_SIZE: f32 = 32.0;

// =============================================================================
// Window
// =============================================================================

/// Initial window size in logical points.
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];

/// Minimum window size in logical points.
pub const WINDOW_MIN_SIZE: [f32; 2] = [720.0, 520.0];

// =============================================================================
// Motion
// =============================================================================

/// Duration of each half (exit, then enter) of a section transition.
pub const SECTION_FADE_SECS: f64 = 0.2;

/// Vertical travel of a panel while it enters or exits, in points.
pub const SECTION_SLIDE_PX: f32 = 20.0;

/// Delay added per card index inside list panels.
pub const ITEM_STAGGER_SECS: f64 = 0.1;

/// How long a single card takes to slide into place.
pub const ITEM_REVEAL_SECS: f64 = 0.3;

/// Horizontal/vertical travel of a card while it reveals, in points.
pub const ITEM_SLIDE_PX: f32 = 20.0;

/// Reveal delays for the Home headline, tagline and call-to-action.
pub const HERO_DELAYS_SECS: [f64; 3] = [0.2, 0.4, 0.6];

/// How long each Home element takes to reveal.
pub const HERO_REVEAL_SECS: f64 = 0.5;

/// Starting scale of the Home headline.
pub const HERO_START_SCALE: f32 = 0.5;
