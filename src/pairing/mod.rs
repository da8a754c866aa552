use log::info;

use crate::database::TournamentStore;
use crate::domain::{Pairing, StandingRow, TournamentId};
use crate::errors::TournamentError;
use crate::standings::StandingsEngine;

/// Builds next-round matchups from the current standings.
pub struct PairingGenerator<S> {
    standings: StandingsEngine<S>,
}

impl<S: TournamentStore> PairingGenerator<S> {
    pub fn new(store: S) -> Self {
        Self {
            standings: StandingsEngine::new(store),
        }
    }

    pub fn generate_pairings(
        &self,
        tournament_id: Option<TournamentId>,
    ) -> Result<Vec<Pairing>, TournamentError> {
        let ranking = self.standings.compute_standings(tournament_id)?;
        let pairings = pair_adjacent(&ranking)?;
        info!("Generated {} pairings from {} players", pairings.len(), ranking.len());
        Ok(pairings)
    }
}

/// Pairs rank 0 with rank 1, rank 2 with rank 3, and so on.
///
/// An odd-sized ranking is rejected outright; nobody is left out silently.
pub fn pair_adjacent(ranking: &[StandingRow]) -> Result<Vec<Pairing>, TournamentError> {
    if ranking.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(ranking.len()));
    }

    Ok(ranking
        .chunks_exact(2)
        .map(|pair| Pairing {
            first: pair[0].entrant(),
            second: pair[1].entrant(),
        })
        .collect())
}
