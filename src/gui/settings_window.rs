//! Settings window: theme, shortcut, autostart and the engine list editor
//!
//! Edits accumulate in a local draft (plain fields plus the engine
//! roster); Save pushes the whole record to the host, Cancel reloads the
//! host's copy and throws the draft away.

use eframe::{egui, CreationContext};
use tracing::{error, info};

use crate::config::{AppConfig, Theme};
use crate::engines::EngineRoster;
use crate::gui::components::{add_engine_dialog::AddEngineDialog, engine_list, general_settings};
use crate::gui::constants::*;
use crate::gui::{apply_theme, LogoCache, StatusMessage};
use crate::host::{Host, HostClient};
use crate::mirror::ConfigMirror;

pub struct SettingsApp {
    mirror: ConfigMirror<HostClient>,

    // Draft state, discarded on cancel
    theme: Theme,
    shortcut: String,
    auto_start: bool,
    roster: EngineRoster,

    list_state: engine_list::EngineListState,
    add_dialog: AddEngineDialog,
    logos: LogoCache,
    status_message: Option<StatusMessage>,
}

impl SettingsApp {
    pub fn new(cc: &CreationContext<'_>, client: HostClient) -> Self {
        info!("Initializing settings window");
        let mut mirror = ConfigMirror::new(client);

        let status_message = match mirror.load() {
            Ok(()) => None,
            Err(err) => {
                error!(error = ?err, "Failed to load configuration on startup");
                Some(StatusMessage::error(format!("Failed to load settings: {err:#}")))
            }
        };

        apply_theme(&cc.egui_ctx, mirror.config().theme);

        let mut app = Self {
            mirror,
            theme: Theme::Dark,
            shortcut: String::new(),
            auto_start: false,
            roster: EngineRoster::default(),
            list_state: engine_list::EngineListState::new(),
            add_dialog: AddEngineDialog::new(),
            logos: LogoCache::default(),
            status_message,
        };
        app.rebuild_draft();
        app
    }

    /// Reset the draft fields from the mirror's copy
    fn rebuild_draft(&mut self) {
        let config = self.mirror.config();
        self.theme = config.theme;
        self.shortcut = config.shortcut.clone();
        self.auto_start = config.auto_start;
        self.roster = EngineRoster::new(config.engines.clone(), config.default_engine);
    }

    /// Assemble the full draft record from the edit fields
    fn draft(&self) -> AppConfig {
        AppConfig {
            shortcut: self.shortcut.trim().to_string(),
            theme: self.theme,
            auto_start: self.auto_start,
            engines: self.roster.engines().to_vec(),
            default_engine: self.roster.default_index(),
        }
    }

    fn save(&mut self) {
        let draft = self.draft();
        match self.mirror.save(&draft) {
            Ok(()) => {
                info!("Settings saved");
                self.hide_window();
            }
            Err(err) => {
                error!(error = ?err, "Failed to save settings");
                self.status_message =
                    Some(StatusMessage::error(format!("Failed to save settings: {err:#}")));
            }
        }
    }

    fn cancel(&mut self, ctx: &egui::Context) {
        if let Err(err) = self.mirror.discard_draft() {
            error!(error = ?err, "Failed to reload configuration on cancel");
        }
        self.rebuild_draft();
        apply_theme(ctx, self.theme);
        self.hide_window();
    }

    fn hide_window(&mut self) {
        if let Err(err) = self.mirror.host().hide_window() {
            error!(error = ?err, "Failed to hide window via host");
            self.status_message =
                Some(StatusMessage::error(format!("Host unavailable: {err:#}")));
        }
    }
}

impl eframe::App for SettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(ITEM_SPACING);
                ui.heading("askbar Settings");
                ui.add_space(SECTION_SPACING);

                let theme_before = self.theme;
                general_settings::ui(
                    ui,
                    &mut self.theme,
                    &mut self.shortcut,
                    &mut self.auto_start,
                );
                if self.theme != theme_before {
                    // Live preview; persisted only on save
                    apply_theme(ctx, self.theme);
                }

                ui.add_space(SECTION_SPACING);

                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("AI Engines").strong());
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("\u{2795} Add").clicked() {
                                    self.add_dialog.open();
                                }
                            },
                        );
                    });
                    ui.label(
                        egui::RichText::new("Drag rows to reorder - the order is the cycling order")
                            .small()
                            .weak(),
                    );
                    ui.add_space(ITEM_SPACING);

                    engine_list::ui(ui, &mut self.roster, &mut self.list_state, &mut self.logos);
                });

                if let Some(engine) = self.add_dialog.ui(ctx) {
                    self.roster.push(engine);
                }

                ui.add_space(SECTION_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        self.save();
                    }
                    if ui.button("Cancel").clicked() {
                        self.cancel(ctx);
                    }
                });

                let mut dismissed = false;
                if let Some(message) = &self.status_message {
                    ui.add_space(ITEM_SPACING);
                    ui.horizontal(|ui| {
                        ui.colored_label(message.color, &message.text);
                        if ui.small_button("\u{2715}").clicked() {
                            dismissed = true;
                        }
                    });
                }
                if dismissed {
                    self.status_message = None;
                }
            });
        });
    }
}
