//! Engine selector dropdown for the search bar
//!
//! Returns the clicked index; the caller updates the roster's current
//! cursor and closes the dropdown.

use eframe::egui;

use crate::engines::EngineRoster;
use crate::gui::constants::*;
use crate::gui::LogoCache;

pub fn ui(ui: &mut egui::Ui, roster: &EngineRoster, logos: &mut LogoCache) -> Option<usize> {
    let mut selected = None;

    egui::ScrollArea::vertical()
        .max_height(DROPDOWN_MAX_HEIGHT)
        .show(ui, |ui| {
            for (index, engine) in roster.engines().iter().enumerate() {
                let texture = logos.texture(ui.ctx(), &engine.logo);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Image::new(&texture)
                            .fit_to_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE)),
                    );
                    let is_current = index == roster.current_index();
                    if ui.selectable_label(is_current, &engine.name).clicked() {
                        selected = Some(index);
                    }
                });
            }
        });

    selected
}
