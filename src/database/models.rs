use chrono::NaiveDateTime;

use crate::domain::{MatchRecord, Player, PlayerId, TournamentId};

#[derive(Debug, Clone)]
pub struct DbPlayer {
    pub id: PlayerId,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<DbPlayer> for Player {
    fn from(row: DbPlayer) -> Self {
        Player {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DbMatch {
    pub id: i64,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub tournament_id: Option<TournamentId>,
    pub created_at: Option<NaiveDateTime>,
}

impl From<DbMatch> for MatchRecord {
    fn from(row: DbMatch) -> Self {
        MatchRecord {
            winner_id: row.winner_id,
            loser_id: row.loser_id,
            tournament_id: row.tournament_id,
        }
    }
}
