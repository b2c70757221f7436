use crate::cli::commands::{audit, open_board, print_board};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `reset` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut board = open_board(cli, cfg)?;
    board.reset_all_statuses();

    let total = board.dashboard_counts().total;
    audit(
        &board,
        "reset",
        "",
        &format!("Statuses reset for {} seat(s)", total),
    );

    success("All statuses reset.");
    print_board(&board, cfg);
    Ok(())
}
