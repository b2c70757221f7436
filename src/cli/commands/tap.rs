use crate::cli::commands::{audit, open_board, print_board};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::CAPACITY;
use crate::ui::messages::info;

/// Convert a user-facing seat number (1-based) into a seat index.
pub fn seat_index(number: usize) -> AppResult<usize> {
    if (1..=CAPACITY).contains(&number) {
        Ok(number - 1)
    } else {
        Err(AppError::InvalidSeatNumber(number, CAPACITY))
    }
}

/// Handle the `tap` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Tap { seats } = &cli.command else {
        return Ok(());
    };

    // validate everything first so a typo does not leave half the taps applied
    let indices = seats
        .iter()
        .map(|n| seat_index(*n))
        .collect::<AppResult<Vec<_>>>()?;

    let mut board = open_board(cli, cfg)?;

    for index in indices {
        match board.cycle_status(index)? {
            Some(t) => audit(
                &board,
                "tap",
                &format!("#{}", index + 1),
                &format!("{}: {} → {}", t.name, t.from, t.to),
            ),
            None => info(format!("Seat #{} is empty, nothing to do.", index + 1)),
        }
    }

    print_board(&board, cfg);
    Ok(())
}
