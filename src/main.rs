use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

use app::App;
use config::AppConfig;

fn main() {
    let debug = AppConfig::from_env().map(|config| config.debug).unwrap_or(false);
    if let Err(err) = init_tracing(debug) {
        eprintln!("failed to initialise logging: {err}");
    }
    launch();
}

#[cfg(feature = "desktop")]
fn launch() {
    let mut config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("PDAM Dashboard"));
    match default_webview_data_dir() {
        Ok(webview_data_dir) => config = config.with_data_directory(webview_data_dir),
        Err(err) => tracing::warn!("{err:#}"),
    }

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(App);
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn default_db_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "pdam", "dashboard")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().join("preferences.sqlite"))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

#[cfg_attr(not(feature = "desktop"), allow(dead_code))]
fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "pdam", "dashboard")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "0.0%".to_string();
    }
    format!("{value:.1}%")
}

fn format_coordinate((lat, lon): (f64, f64)) -> String {
    format!("{lat:.5}, {lon:.5}")
}

fn maps_url(lat: f64, lon: f64) -> String {
    format!("https://www.google.com/maps?q={lat},{lon}")
}

fn table_container_style() -> &'static str {
    "overflow: auto; max-height: 60vh; border: 1px solid #ddd; border-radius: 6px;"
}

fn table_header_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 6px; background: #f1f5f9; text-align: left; position: sticky; top: 0; white-space: nowrap;"
}

fn table_cell_style(alignment: &str) -> String {
    format!("border: 1px solid #bbb; padding: 4px; text-align: {alignment};")
}

#[cfg(test)]
mod tests;
