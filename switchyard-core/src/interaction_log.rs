//! Append-only JSONL log of routed host events, and replay.
//!
//! Default location: `~/.local/share/switchyard/events.jsonl`. Each run starts
//! with a session header line; every routed event follows as one line carrying the
//! event name, its payload and either the commands it produced or the error.
//! Tailable via `tail -f`.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use switchyard_types::{AppState, Command, HostEvent, Payload};

use crate::dispatch::LocalDispatcher;
use crate::router::{RouteError, Router};

/// Log directory: `~/.local/share/switchyard/`
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("switchyard"))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_log_path() -> PathBuf {
    log_dir().join("events.jsonl")
}

/// Append-only JSONL writer for routed events.
pub struct InteractionLog {
    writer: BufWriter<File>,
    session_start: Instant,
}

#[derive(Serialize)]
struct SessionHeader {
    event: &'static str,
    epoch_ms: u128,
    pid: u32,
}

#[derive(Serialize)]
struct RouteLogEntry<'a> {
    t_ms: u128,
    name: &'a str,
    payload: &'a Payload,
    commands: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Deserialized log line for replay. Raw `{name, payload}` lines parse too.
#[derive(Deserialize)]
struct ReplayEntry {
    name: Option<String>,
    #[serde(default)]
    payload: Payload,
    // session headers have `event` instead of `name`
    #[allow(dead_code)]
    event: Option<String>,
}

impl InteractionLog {
    /// Open (or create) the log at `path`, appending a session header.
    pub fn open(path: &Path) -> Option<Self> {
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                log::warn!(target: "interaction_log", "cannot create {}", parent.display());
                return None;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()?;
        let session_start = Instant::now();
        let mut writer = BufWriter::new(file);

        let header = SessionHeader {
            event: "session_start",
            epoch_ms: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            pid: std::process::id(),
        };
        if let Ok(json) = serde_json::to_string(&header) {
            let _ = writeln!(writer, "{}", json);
            let _ = writer.flush();
        }

        Some(Self {
            writer,
            session_start,
        })
    }

    /// Log an event and the commands it dispatched.
    pub fn log_routed(&mut self, event: &HostEvent, commands: &[Command]) {
        self.write(event, commands.iter().map(Command::name).collect(), None);
    }

    /// Log an event that was dropped.
    pub fn log_failed(&mut self, event: &HostEvent, error: &RouteError) {
        self.write(event, Vec::new(), Some(error.to_string()));
    }

    fn write(&mut self, event: &HostEvent, commands: Vec<&'static str>, error: Option<String>) {
        let entry = RouteLogEntry {
            t_ms: self.session_start.elapsed().as_millis(),
            name: &event.name,
            payload: &event.payload,
            commands,
            error,
        };
        if let Ok(json) = serde_json::to_string(&entry) {
            let _ = writeln!(self.writer, "{}", json);
            let _ = self.writer.flush();
        }
    }
}

/// Error type for event log replay.
#[derive(Debug)]
pub enum ReplayError {
    Io(std::io::Error),
}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

/// Summary of a replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub routed: usize,
    pub failed: usize,
    pub skipped_lines: usize,
    /// Commands applied across all routed events
    pub commands: usize,
}

/// Read every event line from `reader`. Session headers, blank and unparseable
/// lines are skipped and counted.
pub fn read_events(reader: impl BufRead) -> Result<(Vec<HostEvent>, usize), ReplayError> {
    let mut events = Vec::new();
    let mut skipped = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry: ReplayEntry = match serde_json::from_str(&line) {
            Ok(e) => e,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        match entry.name {
            Some(name) => events.push(HostEvent {
                name,
                payload: entry.payload,
            }),
            None => skipped += 1,
        }
    }
    Ok((events, skipped))
}

/// Replay an event log through `router` into a fresh state.
///
/// Events that fail to route are skipped, exactly as they were dropped live.
///
/// Usage for deriving fixtures from real sessions:
/// ```bash
/// cp ~/.local/share/switchyard/events.jsonl switchyard-core/tests/fixtures/my_scenario.jsonl
/// ```
pub fn replay_event_log(
    path: &Path,
    router: &Router,
) -> Result<(AppState, ReplayStats), ReplayError> {
    let file = File::open(path)?;
    let (events, skipped_lines) = read_events(BufReader::new(file))?;

    let mut state = AppState::new();
    let mut stats = ReplayStats {
        skipped_lines,
        ..ReplayStats::default()
    };
    let mut dispatcher = LocalDispatcher::new(&mut state);
    for event in &events {
        match router.route(event, &mut dispatcher) {
            Ok(_) => stats.routed += 1,
            Err(_) => stats.failed += 1,
        }
    }
    stats.commands = dispatcher.applied();
    Ok((state, stats))
}
