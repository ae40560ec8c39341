#![allow(dead_code)]
//! Test harness utilities for switchyard-core integration tests.

use switchyard_types::{
    reduce, AppState, Command, ContentPane, Dispatcher, FileDescriptor, FileId, Snapshot,
};

/// Store that applies commands like the real one and remembers what it saw.
#[derive(Default)]
pub struct RecordingStore {
    pub state: AppState,
    pub applied: Vec<Command>,
}

impl RecordingStore {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            applied: Vec::new(),
        }
    }

    pub fn applied_names(&self) -> Vec<&'static str> {
        self.applied.iter().map(Command::name).collect()
    }

    pub fn clear_record(&mut self) {
        self.applied.clear();
    }
}

impl Dispatcher for RecordingStore {
    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(&self.state)
    }

    fn dispatch(&mut self, command: &Command) {
        reduce::reduce(command, &mut self.state);
        self.applied.push(command.clone());
    }
}

/// State with the given files registered and opened, in order, in the center pane.
/// The last one opened holds focus.
pub fn state_with_open_tabs(ids: &[&str]) -> AppState {
    let mut state = AppState::new();
    for id in ids {
        let file = FileDescriptor::new(*id, format!("/project/{}", id));
        reduce::reduce(&Command::OpenFile(file), &mut state);
    }
    state
}

pub fn focus(state: &mut AppState, id: &str) {
    state.tabs.layout_mut(ContentPane::Center).focused_tab_id = Some(FileId::from(id));
    state.editor.current_doc = Some(FileId::from(id));
}

pub fn center_tabs(state: &AppState) -> Vec<&str> {
    let layout = state.tabs.layout(ContentPane::Center);
    layout.tab_ids.iter().map(FileId::as_str).collect()
}

pub fn center_focus(state: &AppState) -> Option<&str> {
    let layout = state.tabs.layout(ContentPane::Center);
    layout.focused_tab_id.as_ref().map(FileId::as_str)
}

pub fn current_doc(state: &AppState) -> Option<&str> {
    state.editor.current_doc.as_ref().map(FileId::as_str)
}
