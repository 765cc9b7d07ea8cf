use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rSpendlog
/// CLI application to track personal expenses with SQLite
#[derive(Parser)]
#[command(
    name = "rspendlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple expense tracking CLI: record, filter and summarize spending using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter flags shared by `list`, `summary` and `export`.
/// Every flag is optional and independently combinable; supplied flags are
/// ANDed together.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterOpts {
    /// Earliest date to include (YYYY-MM-DD, inclusive)
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Latest date to include (YYYY-MM-DD, inclusive)
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Minimum amount (inclusive)
    #[arg(long = "min", value_name = "AMOUNT")]
    pub min: Option<f64>,

    /// Maximum amount (inclusive)
    #[arg(long = "max", value_name = "AMOUNT")]
    pub max: Option<f64>,

    /// Category name to include (repeatable, matched case-insensitively)
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Only expenses recorded by this user id
    #[arg(long = "user-id", value_name = "ID")]
    pub user_id: Option<i64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage the database (integrity checks, maintenance, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Record a new expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        date: String,

        /// Short description of the expense
        title: String,

        /// Amount spent (must be positive)
        amount: String,

        #[arg(
            long = "category",
            help = "Category name (created on first use; defaults from config)"
        )]
        category: Option<String>,

        #[arg(long = "user", help = "Name of the user recording the expense")]
        user: Option<String>,
    },

    /// List expenses, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterOpts,
    },

    /// Show totals and per-category / per-user breakdowns
    Summary {
        #[command(flatten)]
        filter: FilterOpts,
    },

    /// List known users or add a new one
    Users {
        #[arg(long = "add", value_name = "NAME", help = "Create a new user")]
        add: Option<String>,
    },

    /// List known categories or add a new one
    Categories {
        #[arg(long = "add", value_name = "NAME", help = "Create a new category")]
        add: Option<String>,
    },

    /// Export expenses to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterOpts,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
