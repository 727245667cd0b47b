use crate::models::table_kind::TableKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tenurecalc
/// CLI application to tally specific and general experience from date ranges
#[derive(Parser)]
#[command(
    name = "tenurecalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tally service time from date ranges: overlapping periods are counted once",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Answer "yes" to every confirmation prompt
    #[arg(global = true, long = "yes", short = 'y')]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Switch the interface language (es, en)
    Lang {
        /// Language code
        code: String,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show both tables with per-row durations and totals
    Show,

    /// Add a row to a table
    Add {
        /// Target table (specific|s, general|g)
        #[arg(long, short = 't', value_enum, default_value = "specific")]
        table: TableKind,

        /// Start date (YYYY-MM-DD)
        #[arg(long = "start", help = "Start date (YYYY-MM-DD)")]
        start: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long = "end", help = "End date (YYYY-MM-DD)")]
        end: Option<String>,
    },

    /// Change the dates of an editable row
    Set {
        /// Row id (as printed by `show`)
        id: i64,

        #[arg(long = "start", help = "New start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long = "end", help = "New end date (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(long = "clear-start", conflicts_with = "start", help = "Empty the start date")]
        clear_start: bool,

        #[arg(long = "clear-end", conflicts_with = "end", help = "Empty the end date")]
        clear_end: bool,
    },

    /// Remove an editable row (asks first when it holds dates)
    Del {
        /// Row id (as printed by `show`)
        id: i64,
    },

    /// Empty every editable date of a table
    Clear {
        #[arg(long, short = 't', value_enum)]
        table: TableKind,
    },

    /// Save the worksheet as a calculation
    Save {
        #[arg(long = "registro", help = "Registration number (positive integer)")]
        registro: Option<String>,

        #[arg(long = "first-name", help = "First name")]
        first_name: Option<String>,

        #[arg(long = "last-name", help = "Last name")]
        last_name: Option<String>,

        /// While editing, store a copy under a new id instead of overwriting
        #[arg(long = "as-new")]
        as_new: bool,
    },

    /// Stop editing the loaded calculation without saving
    Cancel,

    /// List saved calculations
    List,

    /// Load a saved calculation into the worksheet for editing
    Edit {
        /// Calculation id (as printed by `list`)
        id: i64,
    },

    /// Delete a saved calculation
    Delete {
        /// Calculation id (as printed by `list`)
        id: i64,
    },
}
