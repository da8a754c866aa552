use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use std::path::Path;
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::errors::TournamentError;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const MIN_TIMEOUT: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Create the database file when it does not exist yet.
    CreateIfMissing,
    /// Fail with `StoreUnavailable` instead of creating a new file.
    ExistingOnly,
}

impl OpenMode {
    fn flags(self) -> OpenFlags {
        let base = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        match self {
            OpenMode::CreateIfMissing => base | OpenFlags::SQLITE_OPEN_CREATE,
            OpenMode::ExistingOnly => base,
        }
    }
}

pub fn create_pool(settings: &DatabaseSettings, mode: OpenMode) -> Result<DbPool> {
    if mode == OpenMode::ExistingOnly && !Path::new(&settings.path).exists() {
        return Err(TournamentError::StoreUnavailable(format!(
            "database file {} does not exist",
            settings.path
        )))
        .context("Failed to open tournament database (run `init` first)");
    }

    let manager = build_manager(settings, mode);
    build_pool(manager, settings)
}

fn build_manager(settings: &DatabaseSettings, mode: OpenMode) -> SqliteConnectionManager {
    let busy_timeout = effective_timeout(settings);
    SqliteConnectionManager::file(&settings.path)
        .with_flags(mode.flags())
        .with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")
        })
}

fn build_pool(manager: SqliteConnectionManager, settings: &DatabaseSettings) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(settings.pool_size.max(1))
        .connection_timeout(effective_timeout(settings))
        .build(manager)
        .map_err(TournamentError::from)
        .context("Failed to create database connection pool")
}

/// r2d2 rejects a zero checkout timeout.
pub fn effective_timeout(settings: &DatabaseSettings) -> Duration {
    settings.read_timeout.max(MIN_TIMEOUT)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .map_err(TournamentError::from)
        .context("Failed to get database connection from pool")
}
