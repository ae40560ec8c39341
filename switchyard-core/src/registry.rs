//! Event kind -> handler table.
//!
//! Built once at startup through [`RegistryBuilder`] and immutable afterwards.
//! `build` refuses to produce a registry that leaves any kind unbound.

use std::collections::HashMap;

use switchyard_types::EventKind;

use crate::handlers::{self, Handler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A kind was bound twice
    Duplicate(EventKind),
    /// Kinds left without a handler at build time
    Unbound(Vec<EventKind>),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(kind) => write!(f, "handler for {} registered twice", kind),
            Self::Unbound(kinds) => {
                let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
                write!(f, "no handler bound for {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Immutable binding of every event kind to exactly one handler.
pub struct HandlerRegistry {
    handlers: HashMap<EventKind, Handler>,
}

impl HandlerRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry with the standard handler for every kind.
    pub fn standard() -> Result<Self, RegistryError> {
        handlers::standard_bindings()
            .into_iter()
            .try_fold(Self::builder(), |builder, (kind, handler)| builder.bind(kind, handler))?
            .build()
    }

    pub fn handler(&self, kind: EventKind) -> Option<Handler> {
        self.handlers.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&EventKind> = self.handlers.keys().collect();
        kinds.sort();
        f.debug_struct("HandlerRegistry").field("kinds", &kinds).finish()
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    handlers: HashMap<EventKind, Handler>,
}

impl RegistryBuilder {
    /// Bind `handler` to `kind`. Binding a kind twice is an error.
    pub fn bind(mut self, kind: EventKind, handler: Handler) -> Result<Self, RegistryError> {
        if self.handlers.insert(kind, handler).is_some() {
            log::error!(target: "registry", "duplicate handler for {}", kind);
            return Err(RegistryError::Duplicate(kind));
        }
        Ok(self)
    }

    /// Finish registration. Every kind in the vocabulary must be bound.
    pub fn build(self) -> Result<HandlerRegistry, RegistryError> {
        let unbound: Vec<EventKind> = EventKind::ALL
            .iter()
            .copied()
            .filter(|kind| !self.handlers.contains_key(kind))
            .collect();
        if !unbound.is_empty() {
            let err = RegistryError::Unbound(unbound);
            log::error!(target: "registry", "{}", err);
            return Err(err);
        }
        log::debug!(target: "registry", "bound {} event kinds", self.handlers.len());
        Ok(HandlerRegistry { handlers: self.handlers })
    }
}
