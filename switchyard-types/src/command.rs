//! Store command vocabulary.
//!
//! A command is the only legal way to mutate the state tree. Each variant touches
//! exactly one conceptual slice of state (see [`Command::slice`]). Serialized form
//! is `{ "action": <name>, "args": <args> }`.

use serde::{Deserialize, Serialize};

use crate::{ContentPane, Document, FileDescriptor, FileId, Location, ProgressReport};

/// Conceptual slice of the state tree a command mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateSlice {
    Files,
    Editor,
    Tabs,
    Routing,
    Ui,
    Application,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "args", rename_all = "camelCase")]
pub enum Command {
    // File registry
    BatchAddSubPaths(Vec<FileDescriptor>),
    AddSubPath(FileDescriptor),
    RemoveSubPath(String),
    RemoveSubPathBatch(Vec<String>),
    MarkSaved(FileId),
    ClearFileState,

    // Editor / document cache
    CacheDoc(Document),
    MarkClean(FileId),
    ClearCurrentDoc,
    ClearSelections,
    ClearEditorState,

    // Tabs
    CloseTab { pane: ContentPane, id: FileId },
    CloseAllTabs,
    ClearFocusedTab(ContentPane),
    /// Open a file in the focused pane and make it the current document.
    OpenFile(FileDescriptor),

    // Routing
    RoutePush(Location),

    // UI chrome
    SetConsoleVisibility(bool),
    OpenInstallModuleDialog,
    OpenImportTemplateDialog,
    StartProgressBar(ProgressReport),
    UpdateProgressBar(ProgressReport),
    EndProgressBar(ProgressReport),
    UpgradeStatus(String),

    // Application / host requests
    AppendPackagerOutput(String),
    SetSimulatorStatus(bool),
    CreateProject,
    OpenProject,
    Save,
    SaveAs,
}

impl Command {
    /// Store action name, as used in the serialized `action` field.
    pub fn name(&self) -> &'static str {
        match self {
            Command::BatchAddSubPaths(_) => "batchAddSubPaths",
            Command::AddSubPath(_) => "addSubPath",
            Command::RemoveSubPath(_) => "removeSubPath",
            Command::RemoveSubPathBatch(_) => "removeSubPathBatch",
            Command::MarkSaved(_) => "markSaved",
            Command::ClearFileState => "clearFileState",
            Command::CacheDoc(_) => "cacheDoc",
            Command::MarkClean(_) => "markClean",
            Command::ClearCurrentDoc => "clearCurrentDoc",
            Command::ClearSelections => "clearSelections",
            Command::ClearEditorState => "clearEditorState",
            Command::CloseTab { .. } => "closeTab",
            Command::CloseAllTabs => "closeAllTabs",
            Command::ClearFocusedTab(_) => "clearFocusedTab",
            Command::OpenFile(_) => "openFile",
            Command::RoutePush(_) => "routePush",
            Command::SetConsoleVisibility(_) => "setConsoleVisibility",
            Command::OpenInstallModuleDialog => "openInstallModuleDialog",
            Command::OpenImportTemplateDialog => "openImportTemplateDialog",
            Command::StartProgressBar(_) => "startProgressBar",
            Command::UpdateProgressBar(_) => "updateProgressBar",
            Command::EndProgressBar(_) => "endProgressBar",
            Command::UpgradeStatus(_) => "upgradeStatus",
            Command::AppendPackagerOutput(_) => "appendPackagerOutput",
            Command::SetSimulatorStatus(_) => "setSimulatorStatus",
            Command::CreateProject => "createProject",
            Command::OpenProject => "openProject",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
        }
    }

    pub fn slice(&self) -> StateSlice {
        match self {
            Command::BatchAddSubPaths(_)
            | Command::AddSubPath(_)
            | Command::RemoveSubPath(_)
            | Command::RemoveSubPathBatch(_)
            | Command::MarkSaved(_)
            | Command::ClearFileState => StateSlice::Files,

            Command::CacheDoc(_)
            | Command::MarkClean(_)
            | Command::ClearCurrentDoc
            | Command::ClearSelections
            | Command::ClearEditorState => StateSlice::Editor,

            Command::CloseTab { .. }
            | Command::CloseAllTabs
            | Command::ClearFocusedTab(_)
            | Command::OpenFile(_) => StateSlice::Tabs,

            Command::RoutePush(_) => StateSlice::Routing,

            Command::SetConsoleVisibility(_)
            | Command::OpenInstallModuleDialog
            | Command::OpenImportTemplateDialog
            | Command::StartProgressBar(_)
            | Command::UpdateProgressBar(_)
            | Command::EndProgressBar(_)
            | Command::UpgradeStatus(_) => StateSlice::Ui,

            Command::AppendPackagerOutput(_)
            | Command::SetSimulatorStatus(_)
            | Command::CreateProject
            | Command::OpenProject
            | Command::Save
            | Command::SaveAs => StateSlice::Application,
        }
    }

    /// Whether applying this command twice in a row is indistinguishable from once.
    pub fn is_idempotent(&self) -> bool {
        matches!(
            self,
            Command::MarkClean(_)
                | Command::MarkSaved(_)
                | Command::ClearFileState
                | Command::ClearEditorState
                | Command::ClearCurrentDoc
                | Command::ClearSelections
                | Command::CloseAllTabs
                | Command::ClearFocusedTab(_)
                | Command::SetConsoleVisibility(_)
                | Command::SetSimulatorStatus(_)
                | Command::RoutePush(_)
        )
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
