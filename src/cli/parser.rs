use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI attendance board backed by SQLite
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance board CLI: tap seats to cycle their status, persisted in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Do not ring the bell or print the flash line when a seat changes
    #[arg(global = true, long = "quiet", short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the board and the attendance dashboard
    Show {
        /// Print the seats and counters as JSON instead of the grid
        #[arg(long = "json")]
        json: bool,
    },

    /// Set the seat names from a comma-separated list
    ///
    /// Names are trimmed; empty names and names longer than 4 characters are
    /// skipped. An empty list clears the board.
    ///
    /// Examples:
    ///   rattendance names "철수, 영희, 민수"
    ///   rattendance names --print
    ///   rattendance names --clear
    Names {
        /// Comma-separated names, filled from seat 1 onwards
        #[arg(conflicts_with_all = ["print", "clear"])]
        text: Option<String>,

        /// Print the current names as an editable comma-separated list
        #[arg(long = "print", conflicts_with = "clear")]
        print: bool,

        /// Remove every name and status
        #[arg(long = "clear")]
        clear: bool,
    },

    /// Cycle the status of one or more seats (numbered from 1)
    ///
    /// none → present → late → excused → absent → none
    Tap {
        /// Seat numbers; repeat a number to advance it more than once
        #[arg(required = true, num_args = 1..)]
        seats: Vec<usize>,
    },

    /// Reset every seat's status to none, keeping the names
    Reset,

    /// Sort the names in Korean dictionary order (가나다), keeping statuses
    Sort,
}
