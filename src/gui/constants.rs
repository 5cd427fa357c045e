//! GUI-specific constants for layout, status colors and sizing

use egui;

/// Search bar window dimensions
pub const SEARCH_WINDOW_WIDTH: f32 = 640.0;
pub const SEARCH_WINDOW_HEIGHT: f32 = 88.0;

/// Settings window dimensions
pub const SETTINGS_WINDOW_WIDTH: f32 = 480.0;
pub const SETTINGS_WINDOW_HEIGHT: f32 = 720.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Logo rendering size in the search bar and engine rows
pub const LOGO_SIZE: f32 = 24.0;

/// Status colors
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

/// Maximum visible height of the engine dropdown before scrolling
pub const DROPDOWN_MAX_HEIGHT: f32 = 240.0;
