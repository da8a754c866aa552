use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type TournamentId = i64;

/// Registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Recorded match outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub tournament_id: Option<TournamentId>,
}

/// Players and matches read together from the store in one consistent view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,
}

/// A player's derived record, recomputed on every standings query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

impl StandingRow {
    pub fn new(player: &Player) -> Self {
        Self {
            player_id: player.id,
            name: player.name.clone(),
            wins: 0,
            matches: 0,
        }
    }

    pub fn losses(&self) -> u32 {
        self.matches - self.wins
    }

    pub fn entrant(&self) -> Entrant {
        Entrant {
            id: self.player_id,
            name: self.name.clone(),
        }
    }
}

/// One side of a pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: PlayerId,
    pub name: String,
}

/// Next-round matchup between two adjacent players in the standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub first: Entrant,
    pub second: Entrant,
}

impl Pairing {
    pub fn player_ids(&self) -> [PlayerId; 2] {
        [self.first.id, self.second.id]
    }
}
