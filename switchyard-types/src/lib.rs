//! # switchyard-types
//!
//! Shared type definitions for the switchyard event router.
//! This crate contains the host event vocabulary, the store command vocabulary,
//! the application state tree and the reference reducers that apply commands to it.
//!
//! Nothing in here knows how events travel between processes or how handlers
//! are bound; that lives in switchyard-core.

pub mod command;
mod dispatch;
pub mod event;
pub mod reduce;
pub mod snapshot;
pub mod state;

pub use command::{Command, StateSlice};
pub use dispatch::Dispatcher;
pub use event::*;
pub use snapshot::Snapshot;

// Re-export all state types at crate root for convenience
pub use state::*;

/// Identifier of a file known to the file registry. Tab ids are file ids.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named region of the window that holds an ordered set of tabs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentPane {
    /// The central editing area
    Center,
}

impl ContentPane {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentPane::Center => "CENTER",
        }
    }
}

impl std::fmt::Display for ContentPane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
