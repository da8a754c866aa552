use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::{
    handle_completions, handle_count, handle_init, handle_pairings, handle_register,
    handle_report, handle_reset, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let database = cli.database.as_deref();
    match &cli.command {
        Command::Init { fresh } => handle_init(database, *fresh),
        Command::Register { name } => handle_register(database, name),
        Command::Report {
            winner,
            loser,
            tournament,
        } => handle_report(database, *winner, *loser, *tournament),
        Command::Standings { tournament, json } => handle_standings(database, *tournament, *json),
        Command::Pairings { tournament, json } => handle_pairings(database, *tournament, *json),
        Command::Count => handle_count(database),
        Command::Reset { target } => handle_reset(database, *target),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
