use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        match DbPool::open_initialized(&cfg.database) {
            Ok(pool) => LogLogic::print_log(&pool.conn)?,
            Err(e) => warning(format!(
                "Database {} unavailable ({}), no log to show.",
                cfg.database, e
            )),
        }
    }

    Ok(())
}
