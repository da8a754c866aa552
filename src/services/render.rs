use anyhow::{Context, Result};
use colored::Colorize;

use crate::domain::{Pairing, StandingRow};
use crate::errors::render_context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

pub fn render_standings(rows: &[StandingRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(rows).context(render_context("standings"))
        }
        OutputFormat::Text => Ok(standings_table(rows)),
    }
}

pub fn render_pairings(pairings: &[Pairing], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(pairings).context(render_context("pairings"))
        }
        OutputFormat::Text => Ok(pairings_list(pairings)),
    }
}

fn standings_table(rows: &[StandingRow]) -> String {
    if rows.is_empty() {
        return "No players registered.".dimmed().to_string();
    }

    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let header = format!(
        "{:>4}  {:>5}  {:<width$}  {:>4}  {:>4}  {:>4}",
        "Rank",
        "Id",
        "Name",
        "W",
        "L",
        "M",
        width = name_width
    );

    let lines = rows.iter().enumerate().map(|(position, row)| {
        format!(
            "{:>4}  {:>5}  {:<width$}  {:>4}  {:>4}  {:>4}",
            position + 1,
            row.player_id,
            row.name,
            row.wins,
            row.losses(),
            row.matches,
            width = name_width
        )
    });

    std::iter::once(header.bold().to_string())
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

fn pairings_list(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return "No pairings: no players registered.".dimmed().to_string();
    }

    pairings
        .iter()
        .enumerate()
        .map(|(table, pairing)| {
            format!(
                "{:>3}. {} (#{}) {} {} (#{})",
                table + 1,
                pairing.first.name.bold(),
                pairing.first.id,
                "vs".dimmed(),
                pairing.second.name.bold(),
                pairing.second.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
