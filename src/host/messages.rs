//! Message types for the UI ↔ host process boundary

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

/// Requests sent from the UI to the host process
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum HostRequest {
    /// Fetch the full current configuration
    GetConfig,

    /// Persist the full configuration (whole-record replacement)
    SaveConfig(AppConfig),

    /// Open a URL in the user's default handler
    OpenExternal(String),

    /// Hide the launcher window
    HideWindow,
}

/// Responses sent from the host process to the UI
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum HostResponse {
    /// Full configuration (response to GetConfig)
    Config(AppConfig),

    /// Request was processed
    Ok,

    /// Request failed on the host side
    Error(String),
}
