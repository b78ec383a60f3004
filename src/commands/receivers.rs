//! Leading receivers command

use super::common::open_database;
use crate::{storage::LeadingReceiver, Result, Season};
use std::path::PathBuf;

/// Handle the receivers command
pub fn handle_receivers(
    db: Option<PathBuf>,
    season: Option<Season>,
    as_json: bool,
) -> Result<Vec<LeadingReceiver>> {
    let (_, database) = open_database(db)?;
    let receivers = database.leading_receivers(season)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&receivers)?); // tarpaulin::skip
        return Ok(receivers);
    }

    if receivers.is_empty() {
        match season {
            Some(s) => println!("No receiving stats recorded for {}.", s),
            None => println!("No receiving stats recorded."),
        }
        return Ok(receivers);
    }

    println!(
        "{:<8} {:<6} {:<24} {:<4} {:<8}",
        "Season", "Team", "Player", "Pos", "Yards"
    );
    println!(
        "{:<8} {:<6} {:<24} {:<4} {:<8}",
        "------", "----", "------", "---", "-----"
    );
    for r in &receivers {
        println!(
            "{:<8} {:<6} {:<24} {:<4} {:<8}",
            r.season.to_string(),
            r.team.to_string(),
            r.player_name.chars().take(24).collect::<String>(),
            r.position.to_string(),
            r.receiving_yards
        );
    }

    Ok(receivers)
}
