pub mod config;
pub mod init;
pub mod log;
pub mod names;
pub mod reset;
pub mod show;
pub mod sort;
pub mod tap;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{AttendanceStore, CueSink, SilentCue, TerminalCue};
use crate::db::kv::{BoardKv, MemoryKv, SqliteKv};
use crate::db::log::ttlog_best_effort;
use crate::errors::AppResult;
use crate::ui::grid::render_board;
use crate::ui::messages::warning;

/// The board as the CLI uses it: cue chosen at runtime.
pub type Board = AttendanceStore<BoardKv, Box<dyn CueSink>>;

/// Open the board stored in the configured database.
///
/// A database that cannot be opened or migrated is reported and replaced by
/// an empty in-memory board, so the command still runs.
pub fn open_board(cli: &Cli, cfg: &Config) -> AppResult<Board> {
    let kv = match SqliteKv::open(&cfg.database) {
        Ok(kv) => BoardKv::Sqlite(kv),
        Err(e) => {
            warning(format!(
                "Database {} unavailable ({}), running on an in-memory board; changes will not be kept.",
                cfg.database, e
            ));
            BoardKv::Memory(MemoryKv::new())
        }
    };
    let cue: Box<dyn CueSink> = if cfg.sound_cue && !cli.quiet {
        Box::new(TerminalCue)
    } else {
        Box::new(SilentCue)
    };
    Ok(AttendanceStore::with_cue(kv, cue))
}

/// Redraw the whole board from the store's current snapshot.
pub fn print_board(board: &Board, cfg: &Config) {
    print!(
        "{}",
        render_board(board.snapshot(), cfg.grid_columns, &cfg.separator_char)
    );
}

/// Record a board change in the audit log, when there is one.
pub fn audit(board: &Board, operation: &str, target: &str, message: &str) {
    if let Some(conn) = board.kv().conn() {
        ttlog_best_effort(conn, operation, target, message);
    }
}
