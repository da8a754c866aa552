use log::debug;
use rusqlite::TransactionBehavior;
use std::time::Duration;

use super::connection::DbPool;
use super::{matches, players};
use crate::domain::{Snapshot, TournamentId};
use crate::errors::TournamentError;

/// Read side the standings engine depends on.
///
/// Implementations must return players and matches from one consistent view
/// of the store, so a concurrent write is either fully visible or not at all.
pub trait TournamentStore {
    fn snapshot(&self, tournament_id: Option<TournamentId>) -> Result<Snapshot, TournamentError>;
}

impl<T: TournamentStore + ?Sized> TournamentStore for &T {
    fn snapshot(&self, tournament_id: Option<TournamentId>) -> Result<Snapshot, TournamentError> {
        (**self).snapshot(tournament_id)
    }
}

/// SQLite-backed store sharing a connection pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
    read_timeout: Duration,
}

impl SqliteStore {
    pub fn new(pool: DbPool, read_timeout: Duration) -> Self {
        Self { pool, read_timeout }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl TournamentStore for SqliteStore {
    fn snapshot(&self, tournament_id: Option<TournamentId>) -> Result<Snapshot, TournamentError> {
        let mut conn = self.pool.get_timeout(self.read_timeout)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Deferred)?;

        let players = players::list_all(&tx)?;
        let matches = matches::list_all(&tx, tournament_id)?;
        tx.commit()?;

        debug!(
            "Snapshot read: {} players, {} matches (tournament {:?})",
            players.len(),
            matches.len(),
            tournament_id
        );

        Ok(Snapshot {
            players: players.into_iter().map(Into::into).collect(),
            matches: matches.into_iter().map(Into::into).collect(),
        })
    }
}
