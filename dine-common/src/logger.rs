use dine_error::{DineError, DineResult};
use std::str::FromStr;
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    layer::SubscriberExt,
    Layer, Registry,
};

pub struct Logger {
    level: Level,
    dir: String,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Option<Level>, dir: impl Into<String>) -> Self {
        Logger {
            level: level.unwrap_or(Level::INFO),
            dir: dir.into(),
            _file_guard: None,
        }
    }

    /// Parses a level name such as `debug`; unknown names fall back to `INFO`.
    pub fn parse_level(name: &str) -> Level {
        Level::from_str(name.trim()).unwrap_or(Level::INFO)
    }

    #[inline]
    pub fn get_level(&self) -> Level {
        self.level
    }

    /// Initializes the logger
    ///
    /// Sets up output to both the console and a daily rolling log file,
    /// both filtered by the configured level.
    #[inline]
    pub fn initialize(&mut self) -> DineResult<()> {
        let file_appender = rolling::daily(&self.dir, "dine.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        self._file_guard = Some(guard);

        let filter = LevelFilter::from_level(self.level);

        let console_layer = {
            #[cfg(debug_assertions)]
            let layer = fmt::layer()
                .pretty()
                .with_writer(std::io::stdout)
                .with_file(true)
                .with_line_number(true);

            #[cfg(not(debug_assertions))]
            let layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_file(false)
                .with_line_number(false);

            layer.with_filter(filter)
        };

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(filter);

        let subscriber = Registry::default().with(console_layer).with(file_layer);

        set_global_default(subscriber).map_err(|_| DineError::from("Failed to set logger"))?;
        Ok(())
    }
}
