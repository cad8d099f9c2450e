#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lovenotes_core::config::CONFIG_FILE_NAME;
use lovenotes_core::AppConfig;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global configuration, resolved once at startup
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the resolved configuration (defaults if unset)
pub fn get_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Love Notes - a password-gated greeting card
#[derive(Parser, Debug)]
#[command(name = "lovenotes-desktop")]
#[command(about = "Love Notes - a little slideshow of notes behind a secret")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory holding the unlock flag and config file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Config file (default: <data-dir>/lovenotes.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of floating hearts in the background
    #[arg(short, long)]
    particles: Option<usize>,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Default data directory (<platform data dir>/lovenotes)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lovenotes")
}

/// Load the config file and apply command line overrides.
///
/// A broken config file is logged and ignored so the card always opens.
fn resolve_config(args: &Args, data_dir: &Path) -> AppConfig {
    let path = args
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join(CONFIG_FILE_NAME));

    let mut config = AppConfig::load(&path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring config file: {}", e);
        AppConfig::default()
    });

    if let Some(particles) = args.particles {
        config.particle_count = particles;
    }
    config
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let config = resolve_config(&args, &data_dir);

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = CONFIG.set(config.clone());

    tracing::info!("Starting Love Notes with data dir: {:?}", data_dir);

    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window.width,
            config.window.height,
        ))
        .with_resizable(config.window.resizable);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn args_parse_flags() {
        let args =
            Args::try_parse_from(["lovenotes-desktop", "-vv", "--data-dir", "/tmp/x", "-p", "5"])
                .unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(args.particles, Some(5));
        assert!(args.config.is_none());
    }

    #[test]
    fn resolve_config_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let args = Args::try_parse_from(["lovenotes-desktop"]).unwrap();
        assert_eq!(resolve_config(&args, temp_dir.path()), AppConfig::default());
    }

    #[test]
    fn resolve_config_cli_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{ "particle_count": 10, "title": "For You" }"#,
        )
        .unwrap();

        let args = Args::try_parse_from(["lovenotes-desktop", "--particles", "3"]).unwrap();
        let config = resolve_config(&args, temp_dir.path());
        assert_eq!(config.particle_count, 3);
        assert_eq!(config.title, "For You");
    }

    #[test]
    fn resolve_config_ignores_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "][").unwrap();

        let args =
            Args::try_parse_from(["lovenotes-desktop", "--config", path.to_str().unwrap()])
                .unwrap();
        assert_eq!(resolve_config(&args, temp_dir.path()), AppConfig::default());
    }
}
