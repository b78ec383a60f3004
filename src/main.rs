//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nfl_wins::{
    cli::{Commands, NflWins},
    commands::{
        load::handle_load,
        receivers::handle_receivers,
        report::{handle_list_reports, handle_report},
        schema::{handle_init, handle_schema},
    },
    core::init_logging,
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = NflWins::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Init => handle_init(app.db)?,

        Commands::Schema => handle_schema()?,

        Commands::Load { file, clear } => {
            handle_load(app.db, &file, clear)?;
        }

        Commands::ListReports => handle_list_reports()?,

        Commands::Report { report, ties, json } => {
            handle_report(app.db, report, ties, json)?;
        }

        Commands::Receivers { season, json } => {
            handle_receivers(app.db, season, json)?;
        }
    }

    Ok(())
}
