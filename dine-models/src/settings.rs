use config::{Config, Environment, File};
use dine_error::DineResult;
use serde::{self, Deserialize};
use std::{ops::Deref, sync::Arc};
use sysinfo::System;

use crate::constants::{DATA_DIR, ENV_PREFIX, SQLITE_MEMORY_PATH};

#[derive(Debug, Clone, Default)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl From<Inner> for Settings {
    fn from(inner: Inner) -> Self {
        Self(Arc::new(inner))
    }
}

impl Settings {
    /// Load settings from an optional TOML file, then `DINE__*` environment overrides.
    pub fn new(config_path: String) -> DineResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path.as_str()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("web.cors.origins"),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "General::log_level_default")]
    pub log_level: String,
    /// Directory receiving the daily rolling log files.
    #[serde(default = "General::log_dir_default")]
    pub log_dir: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            log_level: General::log_level_default(),
            log_dir: General::log_dir_default(),
        }
    }
}

impl General {
    fn log_level_default() -> String {
        "info".into()
    }

    fn log_dir_default() -> String {
        "logs".into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::router_prefix_default")]
    pub router_prefix: String,
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    #[serde(default = "Web::workers_default")]
    pub workers: i32,
    #[serde(default)]
    pub cors: Cors,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            router_prefix: Web::router_prefix_default(),
            host: Web::host_default(),
            port: Web::port_default(),
            workers: Web::workers_default(),
            cors: Default::default(),
        }
    }
}

impl Web {
    fn router_prefix_default() -> String {
        "/api".into()
    }

    fn port_default() -> u16 {
        8000
    }

    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn workers_default() -> i32 {
        0
    }

    /// Get actual number of workers based on configuration.
    ///
    /// `0` means one worker per CPU, a negative value `-n` means CPUs / n (at least one).
    pub fn get_worker_count(&self) -> usize {
        match self.workers {
            0 => System::new_all().cpus().len().max(1),
            n if n > 0 => n as usize,
            n => std::cmp::max(
                1,
                (System::new_all().cpus().len() as i32 / n.abs()) as usize,
            ),
        }
    }
}

/// Cross-origin access to the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Cors {
    #[serde(default)]
    pub mode: CorsMode,
    /// Exact origins admitted in `origins` mode, e.g. `https://menu.example.com`.
    #[serde(default)]
    pub origins: Vec<String>,
    /// Seconds a browser may cache a preflight answer.
    #[serde(default = "Cors::max_age_default")]
    pub max_age: usize,
}

impl Default for Cors {
    fn default() -> Self {
        Cors {
            mode: CorsMode::default(),
            origins: Vec::new(),
            max_age: Cors::max_age_default(),
        }
    }
}

impl Cors {
    fn max_age_default() -> usize {
        3600
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorsMode {
    #[default]
    AllowAll,
    Origins,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Db {
    #[serde(default)]
    pub sqlite: Sqlite,
}

/// Database location and connection URL.
pub trait DbConfig: Send + Sync {
    /// Returns the database file path, or `:memory:`.
    fn db_path(&self) -> String;

    /// Generates a URL for the database connection.
    fn to_url(&self) -> String;

    /// Returns the directory containing the database file, if any.
    fn db_dir(&self) -> Option<String>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    /// Connect timeout in milliseconds.
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            path: Sqlite::path_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
            max_connections: Sqlite::max_connections_default(),
            auto_create: Sqlite::auto_create_default(),
        }
    }
}

impl Sqlite {
    fn path_default() -> String {
        "dine.db".into()
    }

    fn timeout_default() -> u64 {
        5000
    }

    fn idle_timeout_default() -> u64 {
        600_000
    }

    fn max_lifetime_default() -> u64 {
        1_800_000
    }

    fn max_connections_default() -> u32 {
        16
    }

    fn auto_create_default() -> bool {
        true
    }

    /// Whether this configuration selects a private in-memory database.
    pub fn is_memory(&self) -> bool {
        self.path == SQLITE_MEMORY_PATH
    }

    fn resolved_path(&self) -> String {
        let p = self.path.trim();
        if p.starts_with('.') || p.contains('/') {
            p.to_string()
        } else {
            format!("{}/{}", DATA_DIR, p)
        }
    }
}

impl DbConfig for Sqlite {
    fn db_path(&self) -> String {
        if self.is_memory() {
            return SQLITE_MEMORY_PATH.into();
        }
        self.resolved_path()
    }

    fn to_url(&self) -> String {
        if self.is_memory() {
            return "sqlite::memory:".into();
        }
        if self.auto_create {
            // mode=rwc creates the file when missing
            format!("sqlite:{}?mode=rwc", self.resolved_path())
        } else {
            format!("sqlite:{}", self.resolved_path())
        }
    }

    fn db_dir(&self) -> Option<String> {
        if self.is_memory() {
            return None;
        }
        std::path::Path::new(&self.resolved_path())
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .filter(|p| !p.is_empty())
    }
}
