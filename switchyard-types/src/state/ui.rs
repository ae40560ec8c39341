//! UI chrome state: console, progress bars, dialogs, upgrade notices.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Modal dialogs the host can ask the UI to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialog {
    InstallModule,
    ImportTemplate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub console_visible: bool,
    /// Running progress bars by name
    pub progress_bars: BTreeMap<String, f64>,
    pub open_dialog: Option<Dialog>,
    pub upgrade_status: Option<String>,
}
