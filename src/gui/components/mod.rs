//! Reusable settings/search UI components

pub mod add_engine_dialog;
pub mod engine_dropdown;
pub mod engine_list;
pub mod general_settings;
