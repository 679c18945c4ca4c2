//! Kip terminal client: two local players on one keyboard.
//!
//! Logs go to `$KIP_LOG_FILE`, or `kip.log` in the temp directory, never to
//! stderr, which would draw over the field.

mod app;
mod event;
mod ui;

use app::App;
use color_eyre::eyre::WrapErr;
use kip_core::Config;
use std::{
    fs::File,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

/// Path of an optional JSON config file
const CONFIG_ENV: &str = "KIP_CONFIG";
/// Path of the log file, overriding the default
const LOG_FILE_ENV: &str = "KIP_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "kip.log";

fn log_path(configured: Option<String>) -> PathBuf {
    match configured {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => std::env::temp_dir().join(DEFAULT_LOG_FILE),
    }
}

fn init_logging() -> color_eyre::Result<()> {
    let path = log_path(std::env::var(LOG_FILE_ENV).ok());
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Defaults, overridden by the file named in `KIP_CONFIG` when it parses
fn load_config() -> Config {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Config::default();
    };

    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| Config::from_json(&json).map_err(|e| e.to_string()));

    match parsed {
        Ok(config) => {
            log::info!("loaded config from {}", path);
            config
        }
        Err(e) => {
            log::warn!("ignoring config {}: {}, using defaults", path, e);
            Config::default()
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let config = load_config();

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = Arc::clone(&shutdown);
        ctrlc::set_handler(move || shutdown.store(true, Ordering::Relaxed))
            .wrap_err("failed to install termination handler")?;
    }

    let terminal = ratatui::try_init().wrap_err("failed to initialize terminal")?;
    let result = App::new(config, terminal, shutdown).and_then(App::run);
    ratatui::restore();

    let exit = result?;
    log::info!("exited: {:?}", exit);
    Ok(())
}
