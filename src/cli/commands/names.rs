use crate::cli::commands::{audit, open_board, print_board};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `names` command
///
///  - `names "<a>, <b>"` → replace the names (blank text clears the board)
///  - `names --clear`    → clear the board
///  - `names [--print]`  → print the names as an editable list
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Names { text, print, clear } = &cli.command else {
        return Ok(());
    };

    let mut board = open_board(cli, cfg)?;

    if *clear || text.as_deref().is_some_and(|t| t.trim().is_empty()) {
        board.clear_all();
        audit(&board, "clear", "", "All names removed");
        success("Board cleared.");
        print_board(&board, cfg);
        return Ok(());
    }

    match text {
        Some(text) if !*print => {
            board.set_names(text);
            let accepted = board.dashboard_counts().total;
            audit(
                &board,
                "names",
                &format!("{} seats", accepted),
                &board.names_line(),
            );
            success(format!("{} name(s) placed on the board.", accepted));
            print_board(&board, cfg);
        }
        _ => {
            let line = board.names_line();
            if line.is_empty() {
                info("No names on the board.");
            } else {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
