//! Event handlers.
//!
//! Every handler has the same shape: it reads the event payload and a snapshot of
//! the state tree and returns the commands to apply, in order. Handlers never touch
//! the store; an `Err` means none of their commands are applied.

mod chrome;
mod files;
mod process;
mod project;
mod tabs;

use switchyard_types::{Command, EventKind, FileId, Payload, Snapshot};

use crate::focus::FocusError;

/// Commands a handler wants applied, in order.
pub type Plan = Result<Vec<Command>, HandlerError>;

/// Uniform handler signature.
pub type Handler = fn(&Payload, &Snapshot<'_>) -> Plan;

/// Why a handler produced no commands.
#[derive(Debug)]
pub enum HandlerError {
    /// The payload does not have the shape the event kind implies
    MalformedPayload(serde_json::Error),
    /// Tab focus was asked about a tab that is not in its pane
    Focus(FocusError),
    /// The tab chosen to receive focus has no file registry entry
    MissingFile(FileId),
}

impl HandlerError {
    /// Invariant violations point at a bug in the store or the host, not bad input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::Focus(_) | Self::MissingFile(_))
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedPayload(e)
    }
}

impl From<FocusError> for HandlerError {
    fn from(e: FocusError) -> Self {
        Self::Focus(e)
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedPayload(e) => write!(f, "malformed payload: {}", e),
            Self::Focus(e) => write!(f, "focus invariant violated: {}", e),
            Self::MissingFile(id) => write!(f, "no file registered for tab {}", id),
        }
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedPayload(e) => Some(e),
            Self::Focus(e) => Some(e),
            Self::MissingFile(_) => None,
        }
    }
}

/// The standard binding of every event kind to its handler.
pub fn standard_bindings() -> Vec<(EventKind, Handler)> {
    EventKind::ALL.iter().map(|&kind| (kind, standard_handler(kind))).collect()
}

fn standard_handler(kind: EventKind) -> Handler {
    match kind {
        EventKind::CreateNewProject => project::create_new_project,
        EventKind::OpenProjectDialog => project::open_project_dialog,
        EventKind::SaveProject => project::save_project,
        EventKind::SaveProjectAs => project::save_project_as,
        EventKind::SetProjectDir => project::set_project_dir,

        EventKind::CloseTab => tabs::close_tab,

        EventKind::AddSubPath => files::add_sub_path,
        EventKind::AddSubPathBatch => files::add_sub_path_batch,
        EventKind::RemoveSubPath => files::remove_sub_path,
        EventKind::RemoveSubPathBatch => files::remove_sub_path_batch,
        EventKind::FileData => files::file_data,
        EventKind::SaveSuccessful => files::save_successful,

        EventKind::PackagerOutput => process::packager_output,
        EventKind::SimulatorStatus => process::simulator_status,

        EventKind::ToggleConsole => chrome::toggle_console,
        EventKind::OpenInstallModuleDialog => chrome::open_install_module_dialog,
        EventKind::OpenImportTemplateDialog => chrome::open_import_template_dialog,
        EventKind::ProgressStart => chrome::progress_start,
        EventKind::ProgressUpdate => chrome::progress_update,
        EventKind::ProgressEnd => chrome::progress_end,
        EventKind::UpgradeStatus => chrome::upgrade_status,
    }
}
