//! Event routing.
//!
//! One event at a time: resolve the name to a kind, look up its handler, let the
//! handler plan against a fresh snapshot, then dispatch the plan in order. If
//! planning fails nothing is dispatched, so the store never sees half an event.

use switchyard_types::{Command, Dispatcher, EventKind, HostEvent, Snapshot};

use crate::handlers::HandlerError;
use crate::registry::{HandlerRegistry, RegistryError};

#[derive(Debug)]
pub enum RouteError {
    /// The event name is not in the vocabulary or has no handler
    Unregistered(String),
    /// The handler refused to plan the event
    Handler { kind: EventKind, source: HandlerError },
}

impl RouteError {
    /// Programming invariant violations, as opposed to bad input from the host.
    pub fn is_invariant_violation(&self) -> bool {
        match self {
            Self::Unregistered(_) => false,
            Self::Handler { source, .. } => source.is_invariant_violation(),
        }
    }
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unregistered(name) => write!(f, "no handler registered for event {:?}", name),
            Self::Handler { kind, source } => write!(f, "{} dropped: {}", kind, source),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unregistered(_) => None,
            Self::Handler { source, .. } => Some(source),
        }
    }
}

/// What one routed event did to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteReport {
    pub kind: EventKind,
    /// Commands dispatched, in dispatch order
    pub commands: Vec<Command>,
}

/// Stateless between events: everything it knows is in the registry.
#[derive(Debug)]
pub struct Router {
    registry: HandlerRegistry,
}

impl Router {
    pub fn new(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Router over the standard handler bindings.
    pub fn standard() -> Result<Self, RegistryError> {
        HandlerRegistry::standard().map(Self::new)
    }

    /// Compute the commands for an event without applying them.
    pub fn plan(
        &self,
        event: &HostEvent,
        snapshot: &Snapshot<'_>,
    ) -> Result<(EventKind, Vec<Command>), RouteError> {
        let kind = event
            .kind()
            .ok_or_else(|| RouteError::Unregistered(event.name.clone()))?;
        let handler = self
            .registry
            .handler(kind)
            .ok_or_else(|| RouteError::Unregistered(event.name.clone()))?;
        let commands = handler(&event.payload, snapshot)
            .map_err(|source| RouteError::Handler { kind, source })?;
        Ok((kind, commands))
    }

    /// Route one event: plan against a snapshot, then dispatch every command in order.
    ///
    /// Failures are logged here and returned; the store is untouched when this
    /// returns `Err`.
    pub fn route<D: Dispatcher + ?Sized>(
        &self,
        event: &HostEvent,
        dispatcher: &mut D,
    ) -> Result<RouteReport, RouteError> {
        let planned = {
            let snapshot = dispatcher.snapshot();
            self.plan(event, &snapshot)
        };
        let (kind, commands) = match planned {
            Ok(plan) => plan,
            Err(e) => {
                report_failure(&e);
                return Err(e);
            }
        };

        for command in &commands {
            dispatcher.dispatch(command);
        }
        log::debug!(target: "router", "{} -> [{}]", kind, command_names(&commands));
        Ok(RouteReport { kind, commands })
    }
}

fn report_failure(err: &RouteError) {
    match err {
        RouteError::Unregistered(_) => {
            log::warn!(target: "router", "configuration defect: {}", err)
        }
        e if e.is_invariant_violation() => log::error!(target: "router", "{}", e),
        e => log::warn!(target: "router", "{}", e),
    }
}

pub(crate) fn command_names(commands: &[Command]) -> String {
    commands.iter().map(Command::name).collect::<Vec<_>>().join(", ")
}
