//! Modal dialog for adding a new engine
//!
//! Validates name and URL before accepting; an optional PNG attachment is
//! embedded as an inline data reference so the host never stores files.

use eframe::egui;
use tracing::warn;

use crate::engines::{validate_new_engine, Engine, DEFAULT_LOGO};
use crate::gui::constants::*;
use crate::logo;

pub struct AddEngineDialog {
    open: bool,
    name: String,
    url: String,
    logo_data: Option<String>,
    logo_label: Option<String>,
    error: Option<String>,
}

impl AddEngineDialog {
    pub fn new() -> Self {
        Self {
            open: false,
            name: String::new(),
            url: String::new(),
            logo_data: None,
            logo_label: None,
            error: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.name.clear();
        self.url.clear();
        self.logo_data = None;
        self.logo_label = None;
        self.error = None;
    }

    /// Renders the dialog when open; returns the accepted engine
    pub fn ui(&mut self, ctx: &egui::Context) -> Option<Engine> {
        if !self.open {
            return None;
        }

        let mut accepted = None;

        egui::Window::new("Add New AI Engine")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Engine Name:");
                ui.text_edit_singleline(&mut self.name);

                ui.add_space(ITEM_SPACING);

                ui.label("Search URL:");
                ui.text_edit_singleline(&mut self.url);
                ui.label(
                    egui::RichText::new("The search query will be appended to this URL")
                        .small()
                        .weak(),
                );

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    ui.label("Logo (optional):");
                    if ui.button("Browse...").clicked() {
                        self.pick_logo();
                    }
                    match &self.logo_label {
                        Some(label) => ui.label(label.as_str()),
                        None => ui.label(egui::RichText::new("default logo").weak()),
                    };
                });

                if let Some(error) = &self.error {
                    ui.add_space(ITEM_SPACING);
                    ui.colored_label(STATUS_ERROR, error);
                }

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Add Engine").clicked() {
                        match validate_new_engine(&self.name, &self.url) {
                            Ok(()) => {
                                let logo = self
                                    .logo_data
                                    .clone()
                                    .unwrap_or_else(|| DEFAULT_LOGO.to_string());
                                accepted = Some(Engine::new(
                                    self.name.trim(),
                                    self.url.trim(),
                                    logo,
                                ));
                                self.open = false;
                            }
                            Err(err) => {
                                warn!(error = %err, "Rejected new engine");
                                self.error = Some(err.to_string());
                            }
                        }
                    }

                    if ui.button("Cancel").clicked() {
                        self.open = false;
                    }
                });
            });

        accepted
    }

    /// Pick a PNG from disk and embed it as a data reference
    fn pick_logo(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .pick_file()
        else {
            return;
        };

        match logo::file_to_data_url(&path) {
            Ok(data_url) => {
                self.logo_label = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned());
                self.logo_data = Some(data_url);
                self.error = None;
            }
            Err(err) => {
                warn!(error = ?err, "Rejected logo attachment");
                self.error = Some(format!("Could not read logo: {err:#}"));
            }
        }
    }
}

impl Default for AddEngineDialog {
    fn default() -> Self {
        Self::new()
    }
}
