use anyhow::{bail, Context, Result};
use log::info;

use crate::config::settings::AppConfig;
use crate::database::{self, players, matches, setup, DbConn, OpenMode, SqliteStore};
use crate::domain::{MatchRecord, Pairing, Player, PlayerId, StandingRow, TournamentId};
use crate::errors::store_context;
use crate::pairing::PairingGenerator;
use crate::standings::StandingsEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetScope {
    Matches,
    /// Players and, since they reference players, every match.
    Players,
}

pub struct TournamentService {
    store: SqliteStore,
}

impl TournamentService {
    /// Only `init` should pass `OpenMode::CreateIfMissing`; reads never create files.
    pub fn new(config: &AppConfig, mode: OpenMode) -> Result<Self> {
        let pool = database::create_pool(&config.database, mode)
            .with_context(|| format!("Failed to open tournament database {}", config.database.path))?;
        info!("Opened tournament database {}", config.database.path);

        Ok(Self {
            store: SqliteStore::new(pool, config.database.read_timeout),
        })
    }

    pub fn init(&self, fresh: bool) -> Result<()> {
        let conn = self.connection()?;
        if fresh {
            setup::reset_database(&conn)?;
        } else {
            setup::ensure_schema(&conn)?;
            info!("Database schema ready");
        }
        Ok(())
    }

    pub fn register(&self, name: &str) -> Result<Player> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Player name must not be empty");
        }

        let conn = self.connection()?;
        let player = players::register_player(&conn, name)
            .context(store_context("register player"))?;
        info!("Registered player {} as #{}", player.name, player.id);

        Ok(player.into())
    }

    pub fn report(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
        tournament_id: Option<TournamentId>,
    ) -> Result<MatchRecord> {
        if winner_id == loser_id {
            bail!("A player cannot play against themselves (#{})", winner_id);
        }

        let mut conn = self.connection()?;
        let tx = conn.transaction().context(store_context("start match report"))?;
        for player_id in [winner_id, loser_id] {
            if players::find_by_id(&tx, player_id)?.is_none() {
                bail!("No player registered with id {}", player_id);
            }
        }

        let recorded = matches::record_match(&tx, winner_id, loser_id, tournament_id)
            .context(store_context("record match"))?;
        tx.commit().context(store_context("commit match report"))?;
        info!(
            "Recorded match #{}: {} beat {}",
            recorded.id, recorded.winner_id, recorded.loser_id
        );

        Ok(recorded.into())
    }

    pub fn standings(&self, tournament_id: Option<TournamentId>) -> Result<Vec<StandingRow>> {
        let engine = StandingsEngine::new(&self.store);
        Ok(engine.compute_standings(tournament_id)?)
    }

    pub fn pairings(&self, tournament_id: Option<TournamentId>) -> Result<Vec<Pairing>> {
        let generator = PairingGenerator::new(&self.store);
        Ok(generator.generate_pairings(tournament_id)?)
    }

    pub fn count_players(&self) -> Result<i64> {
        let conn = self.connection()?;
        players::count_players(&conn)
    }

    pub fn reset(&self, scope: ResetScope) -> Result<()> {
        let mut conn = self.connection()?;
        let tx = conn.transaction().context(store_context("start reset"))?;

        let deleted_matches = matches::delete_all(&tx)?;
        info!("Deleted {} matches", deleted_matches);

        if scope == ResetScope::Players {
            let deleted_players = players::delete_all(&tx)?;
            info!("Deleted {} players", deleted_players);
        }

        tx.commit().context(store_context("commit reset"))
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(self.store.pool())
    }
}
