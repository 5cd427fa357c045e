//! General settings section: theme, shortcut, autostart

use eframe::egui;

use crate::config::Theme;
use crate::gui::constants::ITEM_SPACING;

/// Renders the general settings UI and returns true if any changes were made
pub fn ui(
    ui: &mut egui::Ui,
    theme: &mut Theme,
    shortcut: &mut String,
    auto_start: &mut bool,
) -> bool {
    let mut changed = false;

    ui.group(|ui| {
        ui.label(egui::RichText::new("General").strong());
        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            ui.label("Theme:");
            if ui.radio_value(theme, Theme::Light, "Light").changed() {
                changed = true;
            }
            if ui.radio_value(theme, Theme::Dark, "Dark").changed() {
                changed = true;
            }
        });

        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            ui.label("Global Shortcut:");
            if ui.text_edit_singleline(shortcut).changed() {
                changed = true;
            }
        });
        ui.label(
            egui::RichText::new("e.g. Alt+Space - registered by the host on save")
                .small()
                .weak(),
        );

        ui.add_space(ITEM_SPACING);

        if ui.checkbox(auto_start, "Start with the system").changed() {
            changed = true;
        }
    });

    changed
}
