//! LocalDispatcher: Dispatcher implementation for an in-process store.

use switchyard_types::{AppState, Command, Dispatcher, Snapshot};

use super::dispatch_command;

/// Local dispatcher that applies commands directly to an `AppState` it borrows.
///
/// Also counts what it applied, which replay reports.
pub struct LocalDispatcher<'a> {
    pub state: &'a mut AppState,
    applied: usize,
}

impl<'a> LocalDispatcher<'a> {
    pub fn new(state: &'a mut AppState) -> Self {
        Self { state, applied: 0 }
    }

    /// Number of commands applied through this dispatcher.
    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl<'a> Dispatcher for LocalDispatcher<'a> {
    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(&*self.state)
    }

    fn dispatch(&mut self, command: &Command) {
        dispatch_command(command, self.state);
        self.applied += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_is_visible_before_return() {
        let mut state = AppState::new();
        let mut dispatcher = LocalDispatcher::new(&mut state);
        dispatcher.dispatch(&Command::SetConsoleVisibility(true));
        assert!(dispatcher.snapshot().console_visible());
        dispatcher.dispatch(&Command::AppendPackagerOutput("a".into()));
        dispatcher.dispatch(&Command::AppendPackagerOutput("b".into()));
        assert_eq!(dispatcher.applied(), 3);
        assert_eq!(state.application.packager_output, vec!["a", "b"]);
    }
}
