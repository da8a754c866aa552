//! Standings engine: derives a strict ranking from recorded match outcomes.
//!
//! Rows are ordered by wins descending, then by player id ascending, so two
//! reads of the same data always produce the same ranking.

use log::debug;
use std::collections::HashMap;

use crate::database::TournamentStore;
use crate::domain::{PlayerId, Snapshot, StandingRow, TournamentId};
use crate::errors::TournamentError;

pub struct StandingsEngine<S> {
    store: S,
}

impl<S: TournamentStore> StandingsEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// One row per registered player, including players with no matches.
    pub fn compute_standings(
        &self,
        tournament_id: Option<TournamentId>,
    ) -> Result<Vec<StandingRow>, TournamentError> {
        let snapshot = self.store.snapshot(tournament_id)?;
        let ranking = rank(&snapshot)?;
        debug!("Computed standings for {} players", ranking.len());
        Ok(ranking)
    }
}

/// Tallies a snapshot into a ranking.
pub fn rank(snapshot: &Snapshot) -> Result<Vec<StandingRow>, TournamentError> {
    let mut rows: Vec<StandingRow> = snapshot.players.iter().map(StandingRow::new).collect();
    let index = index_by_player(&rows)?;

    for record in &snapshot.matches {
        if record.winner_id == record.loser_id {
            return Err(TournamentError::SchemaError(format!(
                "player {} is recorded as beating themselves",
                record.winner_id
            )));
        }

        let winner = lookup(&index, record.winner_id)?;
        let loser = lookup(&index, record.loser_id)?;

        rows[winner].wins += 1;
        rows[winner].matches += 1;
        rows[loser].matches += 1;
    }

    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.player_id.cmp(&b.player_id)));
    Ok(rows)
}

fn index_by_player(rows: &[StandingRow]) -> Result<HashMap<PlayerId, usize>, TournamentError> {
    let mut index = HashMap::with_capacity(rows.len());
    for (position, row) in rows.iter().enumerate() {
        if index.insert(row.player_id, position).is_some() {
            return Err(TournamentError::SchemaError(format!(
                "player id {} appears more than once",
                row.player_id
            )));
        }
    }
    Ok(index)
}

fn lookup(index: &HashMap<PlayerId, usize>, player_id: PlayerId) -> Result<usize, TournamentError> {
    index.get(&player_id).copied().ok_or_else(|| {
        TournamentError::SchemaError(format!(
            "match references unregistered player {}",
            player_id
        ))
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{MatchRecord, Player};
    use std::cell::Cell;

    /// In-memory store double.
    pub(crate) struct MemoryStore {
        pub snapshot: Snapshot,
        pub reads: Cell<usize>,
        pub unavailable: bool,
    }

    impl MemoryStore {
        pub fn new(names: &[&str], results: &[(PlayerId, PlayerId)]) -> Self {
            let players = names
                .iter()
                .enumerate()
                .map(|(i, name)| Player {
                    id: i as PlayerId + 1,
                    name: name.to_string(),
                })
                .collect();
            let matches = results
                .iter()
                .map(|&(winner_id, loser_id)| MatchRecord {
                    winner_id,
                    loser_id,
                    tournament_id: None,
                })
                .collect();
            Self {
                snapshot: Snapshot { players, matches },
                reads: Cell::new(0),
                unavailable: false,
            }
        }

        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::new(&[], &[])
            }
        }
    }

    impl TournamentStore for MemoryStore {
        fn snapshot(&self, tournament_id: Option<TournamentId>) -> Result<Snapshot, TournamentError> {
            self.reads.set(self.reads.get() + 1);
            if self.unavailable {
                return Err(TournamentError::StoreUnavailable("connection refused".to_string()));
            }
            let mut snapshot = self.snapshot.clone();
            if tournament_id.is_some() {
                snapshot.matches.retain(|m| m.tournament_id == tournament_id);
            }
            Ok(snapshot)
        }
    }

    fn summary(rows: &[StandingRow]) -> Vec<(PlayerId, u32, u32)> {
        rows.iter().map(|r| (r.player_id, r.wins, r.matches)).collect()
    }

    #[test]
    fn test_fresh_players_have_empty_records() {
        let store = MemoryStore::new(&["A", "B", "C", "D"], &[]);
        let rows = StandingsEngine::new(&store).compute_standings(None).unwrap();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.wins == 0 && r.matches == 0));
    }

    #[test]
    fn test_no_players_gives_empty_standings() {
        let store = MemoryStore::new(&[], &[]);
        let rows = StandingsEngine::new(&store).compute_standings(None).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_four_player_scenario() {
        // A beats B, C beats D, A beats C
        let store = MemoryStore::new(&["A", "B", "C", "D"], &[(1, 2), (3, 4), (1, 3)]);
        let rows = StandingsEngine::new(&store).compute_standings(None).unwrap();

        assert_eq!(summary(&rows), vec![(1, 2, 2), (3, 1, 2), (2, 0, 1), (4, 0, 1)]);
        assert_eq!(rows[0].name, "A");
    }

    #[test]
    fn test_matches_equal_wins_plus_losses() {
        let results = [(1, 2), (2, 3), (3, 1), (1, 4), (4, 2), (5, 6), (6, 5), (1, 6)];
        let store = MemoryStore::new(&["A", "B", "C", "D", "E", "F"], &results);
        let rows = StandingsEngine::new(&store).compute_standings(None).unwrap();

        for row in &rows {
            let wins = results.iter().filter(|(w, _)| *w == row.player_id).count() as u32;
            let losses = results.iter().filter(|(_, l)| *l == row.player_id).count() as u32;
            assert_eq!(row.wins, wins);
            assert_eq!(row.losses(), losses);
            assert_eq!(row.matches, wins + losses);
        }
    }

    #[test]
    fn test_ties_broken_by_player_id() {
        let store = MemoryStore::new(&["A", "B", "C", "D"], &[(4, 1), (2, 3)]);
        let rows = StandingsEngine::new(&store).compute_standings(None).unwrap();

        let ids: Vec<_> = rows.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let store = MemoryStore::new(&["A", "B", "C"], &[(3, 1), (2, 1)]);
        let engine = StandingsEngine::new(&store);

        let first = engine.compute_standings(None).unwrap();
        let second = engine.compute_standings(None).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.reads.get(), 2);
    }

    #[test]
    fn test_tournament_scope_keeps_all_players() {
        let mut store = MemoryStore::new(&["A", "B", "C"], &[(1, 2), (2, 3)]);
        store.snapshot.matches[1].tournament_id = Some(9);

        let rows = StandingsEngine::new(&store).compute_standings(Some(9)).unwrap();
        assert_eq!(summary(&rows), vec![(2, 1, 1), (1, 0, 0), (3, 0, 1)]);
    }

    #[test]
    fn test_unregistered_player_is_schema_error() {
        let store = MemoryStore::new(&["A", "B"], &[(1, 42)]);
        let err = StandingsEngine::new(&store).compute_standings(None).unwrap_err();
        assert!(matches!(err, TournamentError::SchemaError(_)));
    }

    #[test]
    fn test_self_match_is_schema_error() {
        let store = MemoryStore::new(&["A", "B"], &[(2, 2)]);
        let err = StandingsEngine::new(&store).compute_standings(None).unwrap_err();
        assert!(matches!(err, TournamentError::SchemaError(_)));
    }

    #[test]
    fn test_duplicate_player_is_schema_error() {
        let mut store = MemoryStore::new(&["A", "B"], &[]);
        store.snapshot.players[1].id = 1;
        let err = StandingsEngine::new(&store).compute_standings(None).unwrap_err();
        assert!(matches!(err, TournamentError::SchemaError(_)));
    }

    #[test]
    fn test_store_failure_propagates() {
        let store = MemoryStore::unavailable();
        let err = StandingsEngine::new(&store).compute_standings(None).unwrap_err();
        assert!(matches!(err, TournamentError::StoreUnavailable(_)));
    }
}
