//! Quick-access search bar window

use eframe::{egui, CreationContext};
use tracing::{error, info};

use crate::engines::EngineRoster;
use crate::gui::components::engine_dropdown;
use crate::gui::constants::*;
use crate::gui::{apply_theme, spawn_settings_process, LogoCache, StatusMessage};
use crate::host::{Host, HostClient};
use crate::mirror::ConfigMirror;

pub struct SearchApp {
    mirror: ConfigMirror<HostClient>,
    roster: EngineRoster,
    query: String,
    dropdown_open: bool,
    status_message: Option<StatusMessage>,
    logos: LogoCache,
    was_focused: bool,
}

impl SearchApp {
    pub fn new(cc: &CreationContext<'_>, client: HostClient) -> Self {
        info!("Initializing search window");
        let mut mirror = ConfigMirror::new(client);

        let status_message = match mirror.load() {
            Ok(()) => None,
            Err(err) => {
                error!(error = ?err, "Failed to load configuration on startup");
                Some(StatusMessage::error(format!("Failed to load settings: {err:#}")))
            }
        };

        apply_theme(&cc.egui_ctx, mirror.config().theme);

        let roster = EngineRoster::new(
            mirror.config().engines.clone(),
            mirror.config().default_engine,
        );

        Self {
            mirror,
            roster,
            query: String::new(),
            dropdown_open: false,
            status_message,
            logos: LogoCache::default(),
            was_focused: true,
        }
    }

    /// Rebuild the roster from the mirror's current copy
    fn rebuild_roster(&mut self) {
        self.roster = EngineRoster::new(
            self.mirror.config().engines.clone(),
            self.mirror.config().default_engine,
        );
    }

    /// Window regained focus: pick up settings saved elsewhere and restore
    /// the default engine as current
    fn on_focus_gained(&mut self, ctx: &egui::Context) {
        if let Err(err) = self.mirror.load() {
            error!(error = ?err, "Failed to refresh configuration on focus");
        } else {
            apply_theme(ctx, self.mirror.config().theme);
            self.rebuild_roster();
        }
        self.roster.reset_current();
        self.dropdown_open = false;
    }

    /// Window lost focus: dismiss the dropdown, restore the default engine
    fn on_focus_lost(&mut self) {
        self.dropdown_open = false;
        self.roster.reset_current();
    }

    /// Submit the current query to the current engine. Does nothing when
    /// the query is blank or no engine is configured.
    fn submit(&mut self) {
        let query = self.query.trim().to_string();
        if query.is_empty() {
            return;
        }
        let Some(engine) = self.roster.current() else {
            return;
        };

        let url = engine.search_url(&query);
        info!(engine = %engine.name, "Submitting query");
        if let Err(err) = self.mirror.host().open_external(&url) {
            error!(error = ?err, "Failed to open search URL");
            self.status_message =
                Some(StatusMessage::error(format!("Failed to open search: {err:#}")));
            return;
        }

        self.query.clear();
        self.roster.reset_current();
        self.hide_window();
    }

    /// Escape: clear the query, restore the default engine, dismiss
    fn escape(&mut self) {
        self.query.clear();
        self.roster.reset_current();
        self.dropdown_open = false;
        self.hide_window();
    }

    fn hide_window(&mut self) {
        if let Err(err) = self.mirror.host().hide_window() {
            error!(error = ?err, "Failed to hide window via host");
            self.status_message =
                Some(StatusMessage::error(format!("Host unavailable: {err:#}")));
        }
    }

    fn search_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Current engine logo doubles as the dropdown toggle
            let logo_str = self
                .roster
                .current()
                .map(|e| e.logo.clone())
                .unwrap_or_default();
            let texture = self.logos.texture(ui.ctx(), &logo_str);
            let logo_button = egui::ImageButton::new(
                egui::Image::new(&texture).fit_to_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE)),
            );
            if ui.add(logo_button).clicked() {
                self.dropdown_open = !self.dropdown_open && !self.roster.is_empty();
            }

            let hint = match self.roster.current() {
                Some(engine) => format!("Ask {} anything...", engine.name),
                None => "No engines configured - open settings".to_string(),
            };

            let gear_width = 30.0;
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text(hint)
                    .desired_width(ui.available_width() - gear_width),
            );
            response.request_focus();
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.submit();
            }

            if ui.button("\u{2699}").on_hover_text("Settings").clicked() {
                if let Err(err) = spawn_settings_process() {
                    error!(error = ?err, "Failed to open settings window");
                    self.status_message = Some(StatusMessage::error(format!("{err:#}")));
                }
            }
        });
    }
}

impl eframe::App for SearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let focused = ctx.input(|i| i.viewport().focused.unwrap_or(true));
        if focused && !self.was_focused {
            self.on_focus_gained(ctx);
        } else if !focused && self.was_focused {
            self.on_focus_lost();
        }
        self.was_focused = focused;

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.escape();
        }

        // Grow the window while the dropdown is open
        let height = if self.dropdown_open {
            SEARCH_WINDOW_HEIGHT + DROPDOWN_MAX_HEIGHT
        } else {
            SEARCH_WINDOW_HEIGHT
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            SEARCH_WINDOW_WIDTH,
            height,
        )));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ITEM_SPACING);
            self.search_bar(ui);

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

            if self.dropdown_open {
                ui.add_space(ITEM_SPACING);
                ui.separator();
                if let Some(index) =
                    engine_dropdown::ui(ui, &self.roster, &mut self.logos)
                {
                    self.roster.select(index);
                    self.dropdown_open = false;
                }
            }
        });
    }
}
