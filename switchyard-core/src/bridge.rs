//! Host bridge: the intake queue between the transport and the router.
//!
//! Transport threads push [`HostEvent`]s into a bounded channel as they arrive.
//! The bridge drains it on a single thread, routing each event to completion
//! before taking the next, so commands from different events never interleave.
//! A failed event is logged and counted; the bridge keeps going.

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use switchyard_types::{Dispatcher, HostEvent};

use crate::interaction_log::InteractionLog;
use crate::router::{RouteError, Router};

/// Counters for one bridge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeStats {
    /// Events routed successfully
    pub routed: usize,
    /// Events whose name had no handler
    pub unregistered: usize,
    /// Events whose handler failed
    pub failed: usize,
    /// Commands dispatched across all routed events
    pub commands: usize,
}

impl BridgeStats {
    pub fn received(&self) -> usize {
        self.routed + self.unregistered + self.failed
    }
}

pub struct HostBridge {
    router: Router,
    log: Option<InteractionLog>,
}

impl HostBridge {
    pub fn new(router: Router) -> Self {
        Self { router, log: None }
    }

    /// Record every routed event to an interaction log.
    pub fn with_log(mut self, log: InteractionLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Bounded intake channel. The sender half may be cloned across transport threads.
    pub fn channel(capacity: usize) -> (Sender<HostEvent>, Receiver<HostEvent>) {
        crossbeam_channel::bounded(capacity.max(1))
    }

    /// Route one event and fold the outcome into `stats`.
    pub fn handle<D: Dispatcher + ?Sized>(
        &mut self,
        event: &HostEvent,
        dispatcher: &mut D,
        stats: &mut BridgeStats,
    ) {
        match self.router.route(event, dispatcher) {
            Ok(report) => {
                stats.routed += 1;
                stats.commands += report.commands.len();
                if let Some(log) = self.log.as_mut() {
                    log.log_routed(event, &report.commands);
                }
            }
            Err(e) => {
                match e {
                    RouteError::Unregistered(_) => stats.unregistered += 1,
                    RouteError::Handler { .. } => stats.failed += 1,
                }
                if let Some(log) = self.log.as_mut() {
                    log.log_failed(event, &e);
                }
            }
        }
    }

    /// Process events until every sender has been dropped.
    pub fn run<D: Dispatcher + ?Sized>(
        &mut self,
        rx: &Receiver<HostEvent>,
        dispatcher: &mut D,
    ) -> BridgeStats {
        let mut stats = BridgeStats::default();
        for event in rx.iter() {
            self.handle(&event, dispatcher, &mut stats);
        }
        log::info!(
            target: "bridge",
            "host channel closed: {} routed, {} unregistered, {} failed",
            stats.routed,
            stats.unregistered,
            stats.failed
        );
        stats
    }

    /// Process whatever is queued right now without blocking.
    pub fn drain<D: Dispatcher + ?Sized>(
        &mut self,
        rx: &Receiver<HostEvent>,
        dispatcher: &mut D,
    ) -> BridgeStats {
        let mut stats = BridgeStats::default();
        loop {
            match rx.try_recv() {
                Ok(event) => self.handle(&event, dispatcher, &mut stats),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        stats
    }
}
