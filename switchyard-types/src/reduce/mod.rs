//! Reference reducers: how the in-process store applies commands.
//!
//! The real store lives on the other side of the process boundary; these functions
//! give the router something concrete to dispatch into for tests, replay and the CLI.
//!
//! Reducers are pure state mutation. They do NOT:
//! - Validate that a command makes sense for the current state
//! - Perform I/O (host requests are only recorded)
//! - Log

mod application;
mod editor;
mod files;
mod tabs;
mod ui;

use crate::{AppState, Command, StateSlice};

/// Apply one command to the state tree.
pub fn reduce(command: &Command, state: &mut AppState) {
    match command.slice() {
        StateSlice::Files => files::reduce(command, &mut state.directory),
        StateSlice::Editor => editor::reduce(command, &mut state.editor),
        StateSlice::Tabs => tabs::reduce(command, state),
        StateSlice::Routing => {
            if let Command::RoutePush(location) = command {
                state.routing.location = location.clone();
            }
        }
        StateSlice::Ui => ui::reduce(command, &mut state.ui),
        StateSlice::Application => application::reduce(command, state),
    }
}

/// Apply a sequence of commands in order.
pub fn reduce_all<'a>(commands: impl IntoIterator<Item = &'a Command>, state: &mut AppState) {
    for command in commands {
        reduce(command, state);
    }
}
