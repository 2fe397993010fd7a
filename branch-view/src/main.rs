//! Application entry point for the branching tree viewer.
//!
//! This binary sets up logging and eframe/egui, loads the optional growth
//! configuration, and delegates all interactive logic and rendering to
//! [`Viewer`] from the `viewer` module.

mod viewer;

use branch_core::GrowthConfig;
use viewer::Viewer;

/// Environment variable naming a JSON file with a [`GrowthConfig`].
const CONFIG_ENV: &str = "BRANCH_TREE_CONFIG";

/// Reads the configuration named by [`CONFIG_ENV`], falling back to defaults.
fn load_config() -> GrowthConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return GrowthConfig::default();
    };

    let loaded = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|s| GrowthConfig::from_json_str(&s).map_err(|e| e.to_string()));

    match loaded {
        Ok(cfg) => {
            log::info!("loaded config from {path}");
            cfg
        }
        Err(e) => {
            log::warn!("ignoring {CONFIG_ENV}={path}: {e}");
            GrowthConfig::default()
        }
    }
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = load_config();
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Branching Tree",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg)))),
    )
}
