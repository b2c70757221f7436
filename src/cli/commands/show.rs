use crate::cli::commands::{open_board, print_board};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use serde_json::json;

/// Handle the `show` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let board = open_board(cli, cfg)?;

    if matches!(cli.command, Commands::Show { json: true }) {
        let out = json!({
            "seats": board.snapshot().seats(),
            "dashboard": board.dashboard_counts(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_board(&board, cfg);
    Ok(())
}
