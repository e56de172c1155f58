// Folio - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

pub use folio::app;
pub use folio::platform;
pub use folio::ui;
pub use folio::util;

use clap::Parser;
use std::path::PathBuf;
use util::error::FolioError;

/// Folio - a personal portfolio in a single window.
///
/// Browse the Home, About, Experience, Education, Projects and Contact
/// sections from the sidebar and switch between light and dark themes.
#[derive(Parser, Debug)]
#[command(name = "Folio", version, about)]
struct Cli {
    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn run(cli: Cli) -> Result<(), FolioError> {
    let paths = match cli.config_dir.as_deref() {
        Some(dir) => platform::config::PlatformPaths::with_config_dir(dir)?,
        None => platform::config::PlatformPaths::resolve(),
    };

    let (config, config_warnings) = platform::config::load_config(&paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %paths.config_dir.display(),
        "Folio starting"
    );
    if paths.fallback {
        tracing::warn!("Could not determine platform directories, using current directory");
    }
    match &config.source {
        Some(path) => tracing::info!(path = %path.display(), "Loaded config.toml"),
        None => tracing::debug!("No config.toml loaded; using defaults"),
    }
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let state = app::state::AppState::new(config.reduce_motion);
    let font_size = config.font_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_SIZE)
            .with_min_inner_size(util::constants::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply_font_size(&cc.egui_ctx, font_size);
            Ok(Box::new(gui::FolioApp::new(state)))
        }),
    )?;

    tracing::info!("Folio closed");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Folio failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
