// Constants shared across the dine crates

/// The default configuration file name for the application.
/// Looked up in the current working directory when no path is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "dine.toml";

/// Prefix of environment variables overriding configuration keys.
pub const ENV_PREFIX: &str = "DINE";

pub const DATA_DIR: &str = "./data";

/// Path value selecting a private in-memory SQLite database.
pub const SQLITE_MEMORY_PATH: &str = ":memory:";
