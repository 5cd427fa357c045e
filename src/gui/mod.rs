//! egui/eframe front-end: search bar window and settings window
//!
//! Both windows render from a [`ConfigMirror`] working copy and reach the
//! native host through the [`Host`] trait for persistence, URL opening and
//! window hiding.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use eframe::{egui, NativeOptions};
use tracing::{error, info};

pub mod constants;
mod components;
mod search_window;
mod settings_window;

use crate::config::Theme;
use crate::host::HostClient;
use crate::logo;
use constants::*;
use search_window::SearchApp;
use settings_window::SettingsApp;

/// Dismissible notice shown for host failures and save feedback
pub(crate) struct StatusMessage {
    pub text: String,
    pub color: egui::Color32,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: STATUS_ERROR,
        }
    }
}

/// Apply the configured theme to the egui context
pub(crate) fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::Light => ctx.set_visuals(egui::Visuals::light()),
        Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
    }
}

/// Texture cache for engine logos, keyed by the logo string itself
#[derive(Default)]
pub(crate) struct LogoCache {
    textures: HashMap<String, egui::TextureHandle>,
}

impl LogoCache {
    /// Texture for an engine logo, decoding on first use. Undecodable
    /// logos fall back to the bundled default.
    pub fn texture(&mut self, ctx: &egui::Context, logo_str: &str) -> egui::TextureHandle {
        if let Some(texture) = self.textures.get(logo_str) {
            return texture.clone();
        }

        let image = logo::decode(logo_str).unwrap_or_else(|err| {
            error!(error = ?err, "Failed to decode engine logo, using default");
            logo::default_image()
        });
        let texture = ctx.load_texture("engine-logo", image, egui::TextureOptions::LINEAR);
        self.textures.insert(logo_str.to_string(), texture.clone());
        texture
    }
}

/// Spawn a second instance of this binary showing the settings window
pub(crate) fn spawn_settings_process() -> Result<()> {
    let exe_path = std::env::current_exe().map_err(|err| anyhow!("Failed to resolve executable path: {err}"))?;
    let child = std::process::Command::new(exe_path)
        .arg("--settings")
        .spawn()
        .map_err(|err| anyhow!("Failed to spawn settings window: {err}"))?;
    info!(pid = child.id(), "Opened settings window");
    Ok(())
}

fn host_client(socket_path: Option<PathBuf>) -> Result<HostClient> {
    match socket_path {
        Some(path) => Ok(HostClient::with_path(path)),
        None => HostClient::new(),
    }
}

/// Launch the quick-access search bar window
pub fn run_search(socket_path: Option<PathBuf>) -> Result<()> {
    let client = host_client(socket_path)?;

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([SEARCH_WINDOW_WIDTH, SEARCH_WINDOW_HEIGHT])
            .with_decorations(false)
            .with_always_on_top()
            .with_title("askbar"),
        ..Default::default()
    };

    eframe::run_native(
        "askbar",
        options,
        Box::new(|cc| Ok(Box::new(SearchApp::new(cc, client)))),
    )
    .map_err(|err| anyhow!("Failed to launch search window: {err}"))
}

/// Launch the settings window
pub fn run_settings(socket_path: Option<PathBuf>) -> Result<()> {
    let client = host_client(socket_path)?;

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([SETTINGS_WINDOW_WIDTH, SETTINGS_WINDOW_HEIGHT])
            .with_resizable(false)
            .with_title("askbar Settings"),
        ..Default::default()
    };

    eframe::run_native(
        "askbar Settings",
        options,
        Box::new(|cc| Ok(Box::new(SettingsApp::new(cc, client)))),
    )
    .map_err(|err| anyhow!("Failed to launch settings window: {err}"))
}
