use log::warn;
use std::time::Duration;

pub const DEFAULT_DATABASE_PATH: &str = "swiss_tournament.db";

pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
    /// Deadline for a single store read: pool checkout and SQLite busy wait.
    pub read_timeout: Duration,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: 4,
            read_timeout: Duration::from_millis(5000),
        }
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            path: std::env::var("DATABASE_PATH").unwrap_or(defaults.path),
            pool_size: env_number("SWISS_POOL_SIZE", defaults.pool_size),
            read_timeout: Duration::from_millis(env_number(
                "SWISS_READ_TIMEOUT_MS",
                defaults.read_timeout.as_millis() as u64,
            )),
        }
    }
}

fn env_number<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + PartialEq + Default,
{
    match std::env::var(key) {
        Ok(raw) => parse_or_default(key, &raw, default),
        Err(_) => default,
    }
}

/// Both numeric settings must be positive, so zero counts as invalid.
fn parse_or_default<T>(key: &str, raw: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + PartialEq + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => value,
        _ => {
            warn!("Ignoring invalid value {:?} for {}, using default", raw, key);
            default
        }
    }
}

pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
        }
    }

    pub fn with_database_path(mut self, path: Option<&str>) -> Self {
        if let Some(path) = path {
            self.database.path = path.to_string();
        }
        self
    }
}

// Config is passed explicitly into services and stores rather than read from globals.
