use crate::cli::commands::{audit, open_board, print_board};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `sort` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut board = open_board(cli, cfg)?;
    board.sort_by_name();

    audit(&board, "sort", "", &board.names_line());

    success("Names sorted (가나다).");
    print_board(&board, cfg);
    Ok(())
}
