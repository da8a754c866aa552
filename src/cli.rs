use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::{PlayerId, TournamentId};

#[derive(Parser, Debug)]
#[command(name = "swiss-tournament", author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// SQLite database file (overrides DATABASE_PATH)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create the tournament tables if they do not exist
    Init {
        /// Drop all existing data and recreate the schema
        #[arg(long)]
        fresh: bool,
    },
    /// Register a player and print the assigned id
    Register {
        /// Display name (need not be unique)
        name: String,
    },
    /// Record the outcome of a match
    Report {
        /// Id of the player who won
        winner: PlayerId,
        /// Id of the player who lost
        loser: PlayerId,
        /// Tournament the match belongs to
        #[arg(short, long)]
        tournament: Option<TournamentId>,
    },
    /// Print the current standings, best record first
    Standings {
        /// Only count matches from this tournament
        #[arg(short, long)]
        tournament: Option<TournamentId>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print pairings for the next round
    Pairings {
        /// Only count matches from this tournament
        #[arg(short, long)]
        tournament: Option<TournamentId>,
        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },
    /// Print the number of registered players
    Count,
    /// Delete recorded data
    Reset {
        #[arg(value_enum)]
        target: ResetTarget,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetTarget {
    /// Delete every match result
    Matches,
    /// Delete every player together with their matches
    Players,
}
