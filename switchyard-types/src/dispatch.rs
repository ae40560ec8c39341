//! Dispatch abstraction over the shared store.

use crate::{Command, Snapshot};

/// Trait for applying commands to the state store.
///
/// Implementations apply each command before `dispatch` returns. The router reads
/// a snapshot, releases it, then dispatches; it never holds both at once.
pub trait Dispatcher {
    /// Read-only view of the current state.
    fn snapshot(&self) -> Snapshot<'_>;

    /// Apply one command.
    fn dispatch(&mut self, command: &Command);
}
