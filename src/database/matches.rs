use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::DbMatch;
use crate::domain::{PlayerId, TournamentId};

pub fn record_match(
    conn: &Connection,
    winner_id: PlayerId,
    loser_id: PlayerId,
    tournament_id: Option<TournamentId>,
) -> Result<DbMatch> {
    let sql = "INSERT INTO matches (winner_id, loser_id, tournament_id) VALUES (?1, ?2, ?3) RETURNING id, winner_id, loser_id, tournament_id, created_at";

    conn.query_row(
        sql,
        params![winner_id, loser_id, tournament_id],
        parse_match_row,
    )
    .with_context(|| format!("Failed to record match {} beat {}", winner_id, loser_id))
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<DbMatch> {
    Ok(DbMatch {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        tournament_id: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Lists matches, restricted to one tournament when `tournament_id` is given.
pub fn list_all(
    conn: &Connection,
    tournament_id: Option<TournamentId>,
) -> rusqlite::Result<Vec<DbMatch>> {
    let sql = "SELECT id, winner_id, loser_id, tournament_id, created_at FROM matches WHERE ?1 IS NULL OR tournament_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
}
