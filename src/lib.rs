pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod pairing;
pub mod services;
pub mod standings;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;

use crate::cli::ResetTarget;
use crate::config::settings::AppConfig;
use crate::database::OpenMode;
use crate::domain::{PlayerId, TournamentId};
use crate::services::render::{render_pairings, render_standings};
use crate::services::{OutputFormat, ResetScope, TournamentService};

pub fn interpret() -> Cli {
    Cli::parse()
}

fn open_service(database: Option<&str>, mode: OpenMode) -> Result<TournamentService> {
    let config = AppConfig::new().with_database_path(database);
    TournamentService::new(&config, mode)
}

pub fn handle_init(database: Option<&str>, fresh: bool) -> Result<()> {
    let service = open_service(database, OpenMode::CreateIfMissing)?;
    service.init(fresh)?;
    println!("Database initialised");
    Ok(())
}

pub fn handle_register(database: Option<&str>, name: &str) -> Result<()> {
    let service = open_service(database, OpenMode::ExistingOnly)?;
    let player = service.register(name)?;
    println!("{}", player.id);
    Ok(())
}

pub fn handle_report(
    database: Option<&str>,
    winner: PlayerId,
    loser: PlayerId,
    tournament: Option<TournamentId>,
) -> Result<()> {
    let service = open_service(database, OpenMode::ExistingOnly)?;
    service.report(winner, loser, tournament)?;
    Ok(())
}

pub fn handle_standings(
    database: Option<&str>,
    tournament: Option<TournamentId>,
    json: bool,
) -> Result<()> {
    let service = open_service(database, OpenMode::ExistingOnly)?;
    let rows = service.standings(tournament)?;
    println!("{}", render_standings(&rows, OutputFormat::from_json_flag(json))?);
    Ok(())
}

pub fn handle_pairings(
    database: Option<&str>,
    tournament: Option<TournamentId>,
    json: bool,
) -> Result<()> {
    let service = open_service(database, OpenMode::ExistingOnly)?;
    let pairings = service.pairings(tournament)?;
    println!("{}", render_pairings(&pairings, OutputFormat::from_json_flag(json))?);
    Ok(())
}

pub fn handle_count(database: Option<&str>) -> Result<()> {
    let service = open_service(database, OpenMode::ExistingOnly)?;
    println!("{}", service.count_players()?);
    Ok(())
}

pub fn handle_reset(database: Option<&str>, target: ResetTarget) -> Result<()> {
    let scope = match target {
        ResetTarget::Matches => ResetScope::Matches,
        ResetTarget::Players => ResetScope::Players,
    };
    let service = open_service(database, OpenMode::ExistingOnly)?;
    service.reset(scope)
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
