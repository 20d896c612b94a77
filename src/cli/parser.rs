use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Presenza
/// CLI application to manage attendance sheets with SQLite
#[derive(Parser)]
#[command(
    name = "presenza",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage monthly attendance sheets, absences and vacation quotas using SQLite",
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

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "filter", help = "Only show rows matching a regex")]
        filter: Option<String>,
    },

    /// Manage workers
    Worker {
        #[command(subcommand)]
        action: WorkerCmd,
    },

    /// Record a day's working hours
    Set {
        /// Worker id
        worker: i64,

        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long = "morning-in", help = "Morning clock-in time (HH:MM)")]
        morning_in: Option<String>,

        #[arg(long = "morning-out", help = "Morning clock-out time (HH:MM)")]
        morning_out: Option<String>,

        #[arg(long = "afternoon-in", help = "Afternoon clock-in time (HH:MM)")]
        afternoon_in: Option<String>,

        #[arg(long = "afternoon-out", help = "Afternoon clock-out time (HH:MM)")]
        afternoon_out: Option<String>,
    },

    /// Mark a day with an absence (vacation, nonworking, medical, none)
    Absence {
        /// Worker id
        worker: i64,

        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Absence kind: vacation | nonworking | medical | none
        kind: String,

        #[arg(
            long = "justification",
            help = "Reference to an uploaded justification file (medical leave)"
        )]
        justification: Option<String>,
    },

    /// Copy one day's content across a day range of the same month
    Copy {
        /// Worker id
        worker: i64,

        /// Source day (YYYY-MM-DD)
        source: String,

        /// Target day (YYYY-MM-DD), same month as source
        target: String,
    },

    /// Show a worker's month sheet
    Show {
        /// Worker id
        worker: i64,

        #[arg(long, short, help = "Month to show (YYYY-MM, default: current)")]
        period: Option<String>,
    },

    /// Manage vacation requests
    Vacation {
        #[command(subcommand)]
        action: VacationCmd,
    },

    /// Attach a signature image to a month sheet
    Sign {
        /// Worker id
        worker: i64,

        /// Month to sign (YYYY-MM)
        period: String,

        #[arg(long, value_name = "FILE", help = "Signature image file")]
        file: String,
    },

    /// Export a monthly attendance report
    Export {
        /// Worker id
        worker: i64,

        /// Month to export (YYYY-MM)
        period: String,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum WorkerCmd {
    /// Register a new worker
    Add {
        name: String,

        #[arg(long = "vacation-days", help = "Annual vacation allowance (default 23)")]
        vacation_days: Option<i64>,
    },

    /// List all workers
    List,

    /// Delete a worker (cascades to sheets and vacation requests)
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum VacationCmd {
    /// Request one vacation day
    Request {
        /// Worker id
        worker: i64,

        /// Requested day (YYYY-MM-DD)
        date: String,
    },

    /// Request every day from start to end inclusive
    Range {
        /// Worker id
        worker: i64,

        /// First day (YYYY-MM-DD)
        start: String,

        /// Last day (YYYY-MM-DD)
        end: String,
    },

    /// Approve a pending request
    Approve { id: i64 },

    /// Reject a pending request
    Reject { id: i64 },

    /// Delete a request (restores one quota unit)
    Del { id: i64 },

    /// Show remaining vacation days
    Balance {
        /// Worker id
        worker: i64,
    },

    /// List a worker's requests
    List {
        /// Worker id
        worker: i64,
    },
}
