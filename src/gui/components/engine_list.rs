//! Engine list editor: drag reordering, default selection and deletion
//!
//! All mutations go through the roster's move/remove/set_default contract;
//! this component only supplies the gestures.

use eframe::egui;

use crate::engines::EngineRoster;
use crate::gui::constants::*;
use crate::gui::LogoCache;

pub struct EngineListState {
    pending_delete: Option<usize>,
}

impl EngineListState {
    pub fn new() -> Self {
        Self {
            pending_delete: None,
        }
    }
}

impl Default for EngineListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the engine list and returns true if the roster changed
pub fn ui(
    ui: &mut egui::Ui,
    roster: &mut EngineRoster,
    state: &mut EngineListState,
    logos: &mut LogoCache,
) -> bool {
    let mut changed = false;
    let mut pending_move: Option<(usize, usize)> = None;
    let mut pending_default: Option<usize> = None;

    if roster.is_empty() {
        ui.label(egui::RichText::new("(No engines configured)").italics().weak());
        return false;
    }

    for (index, engine) in roster.engines().iter().enumerate() {
        let row = ui
            .dnd_drag_source(egui::Id::new("engine-row").with(index), index, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("\u{2630}").weak());

                    let texture = logos.texture(ui.ctx(), &engine.logo);
                    ui.add(
                        egui::Image::new(&texture)
                            .fit_to_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE)),
                    );

                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&engine.name).strong());
                        ui.label(egui::RichText::new(&engine.url).small().weak());
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("\u{1F5D1}").on_hover_text("Delete").clicked() {
                            state.pending_delete = Some(index);
                        }
                        if index == roster.default_index() {
                            ui.label(egui::RichText::new("Default").small().strong());
                        } else if ui.button("Set Default").clicked() {
                            pending_default = Some(index);
                        }
                    });
                });
            })
            .response;

        // Highlight the row a dragged engine would land on
        if row.dnd_hover_payload::<usize>().is_some() {
            ui.painter().rect_stroke(
                row.rect,
                2.0,
                egui::Stroke::new(1.0, ui.visuals().selection.bg_fill),
                egui::StrokeKind::Outside,
            );
        }

        if let Some(source) = row.dnd_release_payload::<usize>() {
            if *source != index {
                pending_move = Some((*source, index));
            }
        }
    }

    if let Some((from, to)) = pending_move {
        roster.move_engine(from, to);
        changed = true;
    }

    if let Some(index) = pending_default {
        roster.set_default(index);
        changed = true;
    }

    if state.pending_delete.is_some() {
        changed |= delete_confirm_dialog(ui.ctx(), roster, state);
    }

    changed
}

fn delete_confirm_dialog(
    ctx: &egui::Context,
    roster: &mut EngineRoster,
    state: &mut EngineListState,
) -> bool {
    let Some(index) = state.pending_delete else {
        return false;
    };
    // The list may have shrunk since the click landed
    let Some(engine) = roster.get(index) else {
        state.pending_delete = None;
        return false;
    };
    let name = engine.name.clone();
    let mut deleted = false;

    egui::Window::new("Confirm Deletion")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("Delete \"{name}\"?"));
            ui.colored_label(STATUS_ERROR, "This cannot be undone!");

            ui.add_space(ITEM_SPACING);

            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    roster.remove(index);
                    deleted = true;
                    state.pending_delete = None;
                }

                if ui.button("Cancel").clicked() {
                    state.pending_delete = None;
                }
            });
        });

    deleted
}
