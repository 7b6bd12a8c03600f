use crate::core::backup::ArchiveFormat;
use crate::core::export::{ExportFormat, ExportTarget};
use crate::models::feeding::FeedingField;
use crate::models::health_status::HealthStatus;
use crate::models::livestock::LivestockField;
use crate::models::quantity::Kilograms;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for herdbook
#[derive(Parser)]
#[command(
    name = "herdbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Livestock farm records: inventory, health checks and feeding logs in plain CSV files",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or several farms)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Username to log in with
    #[arg(global = true, long = "user", short = 'u', env = "HERDBOOK_USER")]
    pub user: Option<String>,

    /// Password (prompted when omitted)
    #[arg(
        global = true,
        long = "password",
        env = "HERDBOOK_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Health status accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Healthy,
    Sick,
}

impl From<StatusArg> for HealthStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Healthy => HealthStatus::Healthy,
            StatusArg::Sick => HealthStatus::Sick,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the data files
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the livestock inventory
    Livestock {
        #[command(subcommand)]
        action: LivestockAction,
    },

    /// Record a new weight after weighing an animal
    Weigh {
        /// Livestock id (e.g. S001)
        id: String,

        /// New weight in kg
        weight: Kilograms,
    },

    /// Health checks
    Health {
        #[command(subcommand)]
        action: HealthAction,
    },

    /// Feeding log
    Feed {
        #[command(subcommand)]
        action: FeedAction,
    },

    /// Sorted livestock report
    Report {
        #[arg(long = "by", value_enum, help = "Sort field (default from config)")]
        by: Option<LivestockField>,

        #[arg(long, conflicts_with = "asc", help = "Sort descending")]
        desc: bool,

        #[arg(long, help = "Sort ascending")]
        asc: bool,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Create a backup copy of the data files
    Backup {
        /// Destination (directory, or archive file with --compress)
        #[arg(long, value_name = "PATH")]
        file: String,

        /// Write a single archive instead of plain copies
        #[arg(long)]
        compress: bool,

        /// Archive format (default: zip on Windows, tar.gz elsewhere)
        #[arg(long, value_enum, requires = "compress")]
        archive: Option<ArchiveFormat>,

        /// Overwrite without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export a collection
    Export {
        #[arg(long, value_enum, default_value = "livestock")]
        target: ExportTarget,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "by", value_enum, help = "Sort livestock by field")]
        by: Option<LivestockField>,

        #[arg(long, requires = "by")]
        desc: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the activity log
    Log {
        #[arg(long = "print", help = "Print the activity log")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum LivestockAction {
    /// Register a new animal
    Add {
        #[arg(long)]
        species: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(long = "born")]
        born: String,

        /// Initial weight in kg
        #[arg(long)]
        weight: Kilograms,

        #[arg(long)]
        pen: String,
    },

    /// Change pen, status, species or birth date of an animal
    Edit {
        id: String,

        #[arg(long)]
        pen: Option<String>,

        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        #[arg(long)]
        species: Option<String>,

        /// Birth date (YYYY-MM-DD)
        #[arg(long = "born")]
        born: Option<String>,
    },

    /// Remove an animal (sold or dead)
    Delete {
        id: String,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List all animals in stored order
    List,
}

#[derive(Subcommand)]
pub enum HealthAction {
    /// Record today's health check for an animal
    Record {
        id: String,

        /// Observed symptoms (leave empty for a routine check)
        #[arg(long, default_value = "")]
        symptoms: String,

        /// Treatment given
        #[arg(long, default_value = "")]
        action: String,
    },

    /// Show every health record of an animal
    History { id: String },
}

#[derive(Subcommand)]
pub enum FeedAction {
    /// Record today's feeding of a pen
    Record {
        #[arg(long)]
        pen: String,

        #[arg(long = "feed-type")]
        feed_type: String,

        /// Amount in kg
        #[arg(long)]
        amount: Kilograms,
    },

    /// Show the feeding log
    List {
        #[arg(long, help = "Only this pen")]
        pen: Option<String>,

        #[arg(long = "by", value_enum, help = "Sort by field")]
        by: Option<FeedingField>,

        #[arg(long, requires = "by")]
        desc: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a worker account
    Add {
        username: String,

        #[arg(long = "new-password")]
        new_password: String,
    },

    /// List accounts (without passwords)
    List,
}
