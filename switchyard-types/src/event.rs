//! Host event vocabulary.
//!
//! Every event the host process may emit is named by a fixed string constant and
//! carries a payload whose shape is implied by that name. The vocabulary is closed:
//! [`EventKind::ALL`] lists every kind, and [`EventKind::from_name`] is the only
//! way to turn a transport-level name into a kind.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::FileId;

// ============================================================================
// Event kinds
// ============================================================================

/// Which external collaborator owns the payload contract of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventGroup {
    /// Window and menu accelerators
    Accelerator,
    /// Project and file system operations
    Project,
    /// Packager and simulator processes
    Process,
    /// Progress bars and upgrade notices
    Chrome,
}

/// Closed set of event kinds the host may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventKind {
    CreateNewProject,
    OpenProjectDialog,
    ToggleConsole,
    CloseTab,
    SaveProject,
    SaveProjectAs,
    OpenInstallModuleDialog,
    OpenImportTemplateDialog,
    SetProjectDir,
    AddSubPath,
    AddSubPathBatch,
    RemoveSubPath,
    RemoveSubPathBatch,
    FileData,
    SaveSuccessful,
    PackagerOutput,
    SimulatorStatus,
    ProgressStart,
    ProgressUpdate,
    ProgressEnd,
    UpgradeStatus,
}

impl EventKind {
    pub const ALL: [EventKind; 21] = [
        EventKind::CreateNewProject,
        EventKind::OpenProjectDialog,
        EventKind::ToggleConsole,
        EventKind::CloseTab,
        EventKind::SaveProject,
        EventKind::SaveProjectAs,
        EventKind::OpenInstallModuleDialog,
        EventKind::OpenImportTemplateDialog,
        EventKind::SetProjectDir,
        EventKind::AddSubPath,
        EventKind::AddSubPathBatch,
        EventKind::RemoveSubPath,
        EventKind::RemoveSubPathBatch,
        EventKind::FileData,
        EventKind::SaveSuccessful,
        EventKind::PackagerOutput,
        EventKind::SimulatorStatus,
        EventKind::ProgressStart,
        EventKind::ProgressUpdate,
        EventKind::ProgressEnd,
        EventKind::UpgradeStatus,
    ];

    /// The string constant the host uses for this event.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::CreateNewProject => "SHOULD_CREATE_NEW_PROJECT",
            EventKind::OpenProjectDialog => "SHOULD_OPEN_PROJECT_DIALOG",
            EventKind::ToggleConsole => "SHOULD_TOGGLE_TERM",
            EventKind::CloseTab => "SHOULD_CLOSE_TAB",
            EventKind::SaveProject => "SHOULD_SAVE_PROJECT",
            EventKind::SaveProjectAs => "SHOULD_SAVE_PROJECT_AS",
            EventKind::OpenInstallModuleDialog => "OPEN_INSTALL_MODULE_DIALOG",
            EventKind::OpenImportTemplateDialog => "OPEN_IMPORT_TEMPLATE_DIALOG",
            EventKind::SetProjectDir => "SET_PROJECT_DIR",
            EventKind::AddSubPath => "ADD_SUB_PATH",
            EventKind::AddSubPathBatch => "ADD_SUB_PATH_BATCH",
            EventKind::RemoveSubPath => "REMOVE_SUB_PATH",
            EventKind::RemoveSubPathBatch => "REMOVE_SUB_PATH_BATCH",
            EventKind::FileData => "ON_FILE_DATA",
            EventKind::SaveSuccessful => "SAVE_SUCCESSFUL",
            EventKind::PackagerOutput => "PACKAGER_OUTPUT",
            EventKind::SimulatorStatus => "UPDATE_SIMULATOR_STATUS",
            EventKind::ProgressStart => "PROGRESS_START",
            EventKind::ProgressUpdate => "PROGRESS_UPDATE",
            EventKind::ProgressEnd => "PROGRESS_END",
            EventKind::UpgradeStatus => "UPGRADE_STATUS",
        }
    }

    /// Look up a kind by its host string constant.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    pub fn group(self) -> EventGroup {
        match self {
            EventKind::CreateNewProject
            | EventKind::OpenProjectDialog
            | EventKind::ToggleConsole
            | EventKind::CloseTab
            | EventKind::SaveProject
            | EventKind::SaveProjectAs
            | EventKind::OpenInstallModuleDialog
            | EventKind::OpenImportTemplateDialog => EventGroup::Accelerator,

            EventKind::SetProjectDir
            | EventKind::AddSubPath
            | EventKind::AddSubPathBatch
            | EventKind::RemoveSubPath
            | EventKind::RemoveSubPathBatch
            | EventKind::FileData
            | EventKind::SaveSuccessful => EventGroup::Project,

            EventKind::PackagerOutput | EventKind::SimulatorStatus => EventGroup::Process,

            EventKind::ProgressStart
            | EventKind::ProgressUpdate
            | EventKind::ProgressEnd
            | EventKind::UpgradeStatus => EventGroup::Chrome,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Events and payloads
// ============================================================================

/// Raw JSON payload attached to an event. `null` when the event carries nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Value);

impl Payload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn empty() -> Self {
        Self(Value::Null)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }

    /// Extract a typed payload shape.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }
}

/// An event as delivered by the transport: a name and an untyped payload.
/// The name may or may not belong to the vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEvent {
    pub name: String,
    #[serde(default)]
    pub payload: Payload,
}

impl HostEvent {
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload: Payload(payload),
        }
    }

    /// An event with no payload.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Payload::empty(),
        }
    }

    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_name(&self.name)
    }
}

// ----------------------------------------------------------------------------
// Payload shapes
// ----------------------------------------------------------------------------

/// `SET_PROJECT_DIR` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDir {
    pub absolute_path: String,
    /// Any JSON value; the host only promises it is truthy for scratch projects.
    #[serde(default)]
    pub is_temp: Option<Value>,
}

impl ProjectDir {
    pub fn is_temp(&self) -> bool {
        self.is_temp.as_ref().is_some_and(is_truthy)
    }
}

/// Host-side truthiness: everything except `null`, `false`, zero, NaN and `""`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `SAVE_SUCCESSFUL` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFile {
    pub id: FileId,
}

/// `UPDATE_SIMULATOR_STATUS` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorStatus {
    pub simulator_is_open: bool,
}

/// Chrome events nest their data one level down: `{ "payload": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub payload: T,
}

/// Named progress bar and its current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub name: String,
    /// Missing or `null` reads as zero.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub progress: f64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let progress: Option<f64> = Option::deserialize(deserializer)?;
    Ok(progress.unwrap_or_default())
}

/// `UPGRADE_STATUS` inner payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeNotice {
    pub status: String,
}
