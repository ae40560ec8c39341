//! Read-only view of the state tree handed to event handlers.

use crate::{AppState, ContentPane, FileDescriptor, FileId, Location, TabLayout};

/// Immutable read of the state tree at the instant a handler runs.
///
/// Borrowing the state for the snapshot's lifetime means nothing can dispatch
/// while a handler still holds one.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    state: &'a AppState,
}

impl<'a> Snapshot<'a> {
    pub fn of(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn tabs(&self, pane: ContentPane) -> &'a TabLayout {
        self.state.tabs.layout(pane)
    }

    pub fn file(&self, id: &FileId) -> Option<&'a FileDescriptor> {
        self.state.directory.file(id)
    }

    pub fn location(&self) -> &'a Location {
        &self.state.routing.location
    }

    pub fn console_visible(&self) -> bool {
        self.state.ui.console_visible
    }
}
