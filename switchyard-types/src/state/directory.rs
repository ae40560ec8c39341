//! File registry state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::FileId;

/// Whether a registry entry is a plain file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    #[default]
    File,
    Dir,
}

/// A file or directory known to the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    pub id: FileId,
    pub absolute_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: FileKind,
}

impl FileDescriptor {
    pub fn new(id: impl Into<String>, absolute_path: impl Into<String>) -> Self {
        Self {
            id: FileId::new(id),
            absolute_path: absolute_path.into(),
            base_name: None,
            kind: FileKind::File,
        }
    }

    /// True if this entry is `path` itself or lives underneath it.
    pub fn is_under(&self, path: &str) -> bool {
        match self.absolute_path.strip_prefix(path) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || path.ends_with('/'),
            None => false,
        }
    }
}

/// File registry: id -> descriptor, plus the set of files whose last save completed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryState {
    pub files_by_id: BTreeMap<FileId, FileDescriptor>,
    pub saved: BTreeSet<FileId>,
}

impl DirectoryState {
    pub fn file(&self, id: &FileId) -> Option<&FileDescriptor> {
        self.files_by_id.get(id)
    }

    pub fn insert(&mut self, file: FileDescriptor) {
        self.files_by_id.insert(file.id.clone(), file);
    }

    /// Remove the entry at `path` and everything below it. Returns the removed ids.
    pub fn remove_path(&mut self, path: &str) -> Vec<FileId> {
        let removed: Vec<FileId> = self
            .files_by_id
            .values()
            .filter(|f| f.is_under(path))
            .map(|f| f.id.clone())
            .collect();
        for id in &removed {
            self.files_by_id.remove(id);
            self.saved.remove(id);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.files_by_id.clear();
        self.saved.clear();
    }

    pub fn len(&self) -> usize {
        self.files_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files_by_id.is_empty()
    }
}
