mod local;

pub use local::LocalDispatcher;

use switchyard_types::{reduce, AppState, Command};

/// Apply a single command to in-process state. The state reflects the mutation
/// when this returns.
pub fn dispatch_command(command: &Command, state: &mut AppState) {
    log::trace!(target: "dispatch", "{:?}", command);
    reduce::reduce(command, state);
}
