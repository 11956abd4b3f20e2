// Selection
pub const DEFAULT_VISUALIZATION_COUNT: usize = 10;
pub const DEFAULT_INCLUDE_RANDOM: bool = false;

// Storage
pub const DEFAULT_DB_PATH: &str = "labels.db";

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
