use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    bridge: BridgeConfig,
    #[serde(default)]
    interaction_log: InteractionLogConfig,
}

#[derive(Deserialize, Default)]
struct LoggingConfig {
    level: Option<String>,
}

#[derive(Deserialize, Default)]
struct BridgeConfig {
    queue_capacity: Option<usize>,
}

#[derive(Deserialize, Default)]
struct InteractionLogConfig {
    enabled: Option<bool>,
    path: Option<PathBuf>,
}

pub struct Config {
    logging: LoggingConfig,
    bridge: BridgeConfig,
    interaction_log: InteractionLogConfig,
}

impl Config {
    /// Embedded defaults, overridden by `~/.config/switchyard/config.toml` if present.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::embedded(),
        }
    }

    /// Embedded defaults overridden by the file at `path`. A missing or malformed
    /// file is logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::embedded();
        if !path.exists() {
            return config;
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => config.merge(user),
                Err(e) => {
                    log::warn!(
                        target: "config",
                        "ignoring malformed config {}: {}",
                        path.display(),
                        e
                    );
                }
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }
        config
    }

    fn embedded() -> Self {
        let base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");
        Config {
            logging: base.logging,
            bridge: base.bridge,
            interaction_log: base.interaction_log,
        }
    }

    fn merge(&mut self, user: ConfigFile) {
        if user.logging.level.is_some() {
            self.logging.level = user.logging.level;
        }
        if user.bridge.queue_capacity.is_some() {
            self.bridge.queue_capacity = user.bridge.queue_capacity;
        }
        if user.interaction_log.enabled.is_some() {
            self.interaction_log.enabled = user.interaction_log.enabled;
        }
        if user.interaction_log.path.is_some() {
            self.interaction_log.path = user.interaction_log.path;
        }
    }

    /// Log level; unparseable values fall back to `warn`.
    pub fn log_level(&self) -> log::LevelFilter {
        self.logging
            .level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::LevelFilter::Warn)
    }

    /// Bridge queue capacity (clamped to 1..65536).
    pub fn queue_capacity(&self) -> usize {
        self.bridge.queue_capacity.unwrap_or(256).clamp(1, 65_536)
    }

    pub fn interaction_log_enabled(&self) -> bool {
        self.interaction_log.enabled.unwrap_or(false)
    }

    /// Where the interaction log is written: configured path, else the default log dir.
    pub fn interaction_log_path(&self) -> PathBuf {
        self.interaction_log
            .path
            .clone()
            .unwrap_or_else(crate::interaction_log::default_log_path)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("switchyard").join("config.toml"))
}
