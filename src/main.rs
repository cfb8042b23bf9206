// CsvEdit - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (config.toml)
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use csvedit::app;
pub use csvedit::core;
pub use csvedit::platform;
pub use csvedit::ui;
pub use csvedit::util;

use clap::Parser;
use std::path::PathBuf;

/// CsvEdit - Desktop CSV viewer and editor.
///
/// Drop a CSV file onto the window (or pass one here), edit cells, add or
/// delete rows, and download the updated file.
#[derive(Parser, Debug)]
#[command(name = "CsvEdit", version, about)]
struct Cli {
    /// CSV file to open at startup.
    path: Option<PathBuf>,

    /// Field delimiter: one character, or "tab" (overrides config.toml).
    #[arg(short = 'D', long = "delimiter")]
    delimiter: Option<String>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Scale every text style so the body text matches the configured size.
fn configure_fonts(ctx: &egui::Context, font_size: f32) {
    ctx.style_mut(|style| {
        let body = style
            .text_styles
            .get(&egui::TextStyle::Body)
            .map_or(font_size, |f| f.size);
        let scale = font_size / body;
        for font_id in style.text_styles.values_mut() {
            font_id.size *= scale;
        }
    });
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] section can take
    // effect; its warnings are logged once the subscriber exists.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (mut config, mut warnings) = platform::config::load_config(&config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "CsvEdit starting"
    );

    if let Some(ref raw) = cli.delimiter {
        match platform::config::parse_delimiter(raw) {
            Some(c) => config.delimiter = c,
            None => warnings.push(format!(
                "--delimiter {raw:?} is not a single character. Using {:?}.",
                config.delimiter
            )),
        }
    }

    for warning in &warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let font_size = config.font_size;
    let mut state = app::state::AppState::new(config, warnings, cli.debug);

    if let Some(ref path) = cli.path {
        gui::load_initial_file(&mut state, path);
    }

    tracing::info!("Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([640.0, 420.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx, font_size);
            Ok(Box::new(gui::CsvEditApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch CsvEdit GUI: {e}");
        std::process::exit(1);
    }
}
