use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use switchyard_core::bridge::{BridgeStats, HostBridge};
use switchyard_core::config::Config;
use switchyard_core::dispatch::LocalDispatcher;
use switchyard_core::interaction_log::{self, InteractionLog};
use switchyard_core::router::Router;
use switchyard_types::{AppState, EventKind, HostEvent};

const USAGE: &str = "usage: switchyard [-v|--verbose] <command>

commands:
  events          list every host event name the router understands
  replay <file>   route a JSONL event log into a fresh state and print it
  pipe            route JSONL events from stdin and print the final state";

fn init_logging(level: log::LevelFilter) {
    use simplelog::{Config as LogConfig, WriteLogger};

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("switchyard")
        .join("switchyard.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path).or_else(|_| File::create("/tmp/switchyard.log")) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("switchyard: logging disabled, cannot create log file: {}", e);
            return;
        }
    };

    if WriteLogger::init(level, LogConfig::default(), log_file).is_err() {
        eprintln!("switchyard: logger already initialised");
        return;
    }

    log::info!("switchyard starting (log level: {:?})", level);
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let rest: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--verbose" && *a != "-v")
        .collect();

    let config = Config::load();
    init_logging(if verbose { log::LevelFilter::Debug } else { config.log_level() });

    let router = match Router::standard() {
        Ok(router) => router,
        Err(e) => {
            log::error!("router setup failed: {}", e);
            eprintln!("switchyard: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match rest.as_slice() {
        ["events"] => {
            list_events();
            Ok(())
        }
        ["replay", path] => replay(Path::new(*path), &router),
        ["pipe"] => pipe(router, &config),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("switchyard: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn list_events() {
    for kind in EventKind::ALL {
        println!("{:<28} {:?}", kind.name(), kind.group());
    }
}

fn replay(path: &Path, router: &Router) -> Result<(), Box<dyn std::error::Error>> {
    let (state, stats) = interaction_log::replay_event_log(path, router)?;
    eprintln!(
        "replayed {}: {} routed ({} commands), {} failed, {} lines skipped",
        path.display(),
        stats.routed,
        stats.commands,
        stats.failed,
        stats.skipped_lines
    );
    print_state(&state)
}

/// Stdin is read on its own thread and fed through the bridge queue, the same
/// way a transport would deliver events; routing stays on this thread.
fn pipe(router: Router, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, rx) = HostBridge::channel(config.queue_capacity());

    let reader = std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for (n, line) in BufReader::new(stdin.lock()).lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!(target: "pipe", "stdin read failed: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<HostEvent>(&line) {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => log::warn!(target: "pipe", "line {}: not an event: {}", n + 1, e),
            }
        }
    });

    let mut bridge = HostBridge::new(router);
    if config.interaction_log_enabled() {
        let path = config.interaction_log_path();
        match InteractionLog::open(&path) {
            Some(event_log) => bridge = bridge.with_log(event_log),
            None => log::warn!(target: "pipe", "interaction log unavailable at {}", path.display()),
        }
    }

    let mut state = AppState::new();
    let stats = bridge.run(&rx, &mut LocalDispatcher::new(&mut state));
    if reader.join().is_err() {
        log::warn!(target: "pipe", "stdin reader panicked");
    }

    report(&stats);
    print_state(&state)
}

fn report(stats: &BridgeStats) {
    eprintln!(
        "{} events: {} routed ({} commands), {} unregistered, {} failed",
        stats.received(),
        stats.routed,
        stats.commands,
        stats.unregistered,
        stats.failed
    );
}

fn print_state(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}
