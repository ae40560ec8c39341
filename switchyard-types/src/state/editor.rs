//! Editor / document cache state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::FileId;

/// File contents delivered by the host (`ON_FILE_DATA`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: FileId,
    pub file_path: String,
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub docs_by_id: BTreeMap<FileId, Document>,
    /// Documents with edits not yet written to disk. The editor marks these
    /// directly as the user types; routed commands only ever clear entries.
    pub dirty: BTreeSet<FileId>,
    /// Document currently shown in the editor
    pub current_doc: Option<FileId>,
    /// Selected ranges / components in the current document
    pub selections: Vec<String>,
}

impl EditorState {
    pub fn is_dirty(&self, id: &FileId) -> bool {
        self.dirty.contains(id)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
