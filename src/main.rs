//! LSPD Mobile Data Terminal - role-play police dashboard.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use lspd_mdt as app;

use app::config::{AppConfig, CONFIG_FILE_NAME, ConfigLoadResult, MIN_WINDOW_SIZE};
use app::ui::MdtApp;
use app::{AppError, logging};

const APP_TITLE: &str = "LSPD Mobile Data Terminal";

/// Role-play police mobile data terminal.
#[derive(Parser)]
#[command(name = "lspd-mdt", version)]
struct Cli {
    /// Use config.toml from current directory and log to stdout only (dev mode)
    #[arg(long)]
    dev: bool,

    /// Path to the config file (overrides --dev)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_dir = if cli.dev { None } else { logging::default_log_dir() };
    let _log_guard = logging::init(log_dir.as_deref());

    tracing::info!("LSPD Mobile Data Terminal starting...");

    // Determine config path based on mode
    let config_path = match cli.config {
        Some(path) => path,
        None if cli.dev => {
            tracing::info!("Dev mode: loading config from current directory");
            PathBuf::from(CONFIG_FILE_NAME)
        }
        None => AppConfig::default_path(),
    };
    tracing::info!("Config path: {:?}", config_path);

    let (config, startup_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            (config, None)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, writing defaults");
            let config = AppConfig::default();
            if let Err(e) = config.save(&config_path) {
                tracing::warn!("Failed to write default config: {}", e);
            }
            (config, None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid: {}", e);
            (AppConfig::default(), Some(e.to_string()))
        }
    };

    run_app(config, startup_error).context("Mobile data terminal exited with an error")
}

/// Run the dashboard window.
fn run_app(config: AppConfig, startup_error: Option<String>) -> app::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(MdtApp::new(cc, config, startup_error)))),
    )
    .map_err(|e| AppError::gui(e.to_string()))
}
