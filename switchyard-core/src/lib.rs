//! # switchyard-core
//!
//! Routes named host events to ordered store commands.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use switchyard_core::bridge::HostBridge;
//! use switchyard_core::dispatch::LocalDispatcher;
//! use switchyard_core::router::Router;
//! use switchyard_types::{AppState, HostEvent};
//!
//! // 1. Bind every event kind once, at startup
//! let router = Router::standard()?;
//!
//! // 2. Route events one at a time against the store
//! let mut state = AppState::new();
//! let mut dispatcher = LocalDispatcher::new(&mut state);
//! router.route(&HostEvent::bare("SHOULD_TOGGLE_TERM"), &mut dispatcher)?;
//!
//! // 3. Or queue them from other threads through the bridge
//! let (tx, rx) = HostBridge::channel(256);
//! let stats = HostBridge::new(router).run(&rx, &mut dispatcher);
//! ```
//!
//! ## Module Overview
//!
//! - [`focus`]: which tab gains focus when the active one closes
//! - [`handlers`]: one handler per event kind, `(Payload, Snapshot) -> Vec<Command>`
//! - [`registry`]: the immutable event kind -> handler table
//! - [`router`]: lookup, snapshot, handler, in-order dispatch
//! - [`dispatch`]: `LocalDispatcher`, applying commands to an in-process `AppState`
//! - [`bridge`]: single-threaded intake queue for events arriving from any thread
//! - [`config`]: TOML configuration (embedded defaults + user override)
//! - [`interaction_log`]: JSONL log of routed events, and replay

pub mod bridge;
pub mod config;
pub mod dispatch;
pub mod focus;
pub mod handlers;
pub mod interaction_log;
pub mod registry;
pub mod router;
