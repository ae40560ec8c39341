//! Application-level state: packager log, simulator, outstanding host requests.

use serde::{Deserialize, Serialize};

/// Fire-and-forget work the store hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostRequest {
    /// Write the project in place
    Save { project_root: Option<String> },
    /// Prompt for a destination, then write
    SaveAs,
    CreateProject,
    OpenProject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationState {
    pub packager_output: Vec<String>,
    pub simulator_open: bool,
    pub host_requests: Vec<HostRequest>,
}
