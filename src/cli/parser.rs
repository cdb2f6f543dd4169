use crate::export::ExportFormat;
use crate::models::entry::EntryFields;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for timesheet
/// CLI application to record daily work and overtime hours with SQLite
#[derive(Parser)]
#[command(
    name = "timesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily work and overtime hours, export them or push them to Google Sheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics (same as RUST_LOG=debug)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Raw fields of a day, as typed by the user. Omitted flags are stored empty.
#[derive(Args, Debug, Clone, Default)]
pub struct EntryArgs {
    /// First shift start (HH:MM)
    #[arg(long = "in1", value_name = "HH:MM")]
    pub shift1_start: Option<String>,

    /// First shift end (HH:MM)
    #[arg(long = "out1", value_name = "HH:MM")]
    pub shift1_end: Option<String>,

    /// Second shift start (HH:MM)
    #[arg(long = "in2", value_name = "HH:MM")]
    pub shift2_start: Option<String>,

    /// Second shift end (HH:MM)
    #[arg(long = "out2", value_name = "HH:MM")]
    pub shift2_end: Option<String>,

    /// Overtime start (HH:MM)
    #[arg(long = "ot-in", value_name = "HH:MM")]
    pub overtime_start: Option<String>,

    /// Overtime end (HH:MM), may be past midnight
    #[arg(long = "ot-out", value_name = "HH:MM")]
    pub overtime_end: Option<String>,

    /// Overtime reason (see `timesheet reasons`; free text accepted)
    #[arg(long = "reason")]
    pub overtime_reason: Option<String>,

    /// Overtime work description
    #[arg(long = "description")]
    pub overtime_description: Option<String>,

    /// Additional note
    #[arg(long = "note")]
    pub note: Option<String>,
}

impl EntryArgs {
    pub fn into_fields(self) -> EntryFields {
        EntryFields {
            shift1_start: self.shift1_start.unwrap_or_default(),
            shift1_end: self.shift1_end.unwrap_or_default(),
            shift2_start: self.shift2_start.unwrap_or_default(),
            shift2_end: self.shift2_end.unwrap_or_default(),
            overtime_start: self.overtime_start.unwrap_or_default(),
            overtime_end: self.overtime_end.unwrap_or_default(),
            overtime_reason: self.overtime_reason.unwrap_or_default(),
            overtime_description: self.overtime_description.unwrap_or_default(),
            note: self.note.unwrap_or_default(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Save a day (insert, or replace every field of an existing day)
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: Option<String>,

        #[command(flatten)]
        fields: EntryArgs,
    },

    /// Show one day with its computed totals
    Show {
        /// Date of the entry (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Delete a day
    Del {
        /// Date of the entry (YYYY-MM-DD)
        date: Option<String>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List every day of a month with computed totals
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to list (default: current)")]
        month: Option<String>,
    },

    /// Print the preset overtime reasons
    Reasons,

    /// Export a month to a spreadsheet file (one sheet per day for xlsx)
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[arg(long, short, value_name = "YYYY-MM", help = "Month to export (default: current)")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Push a month to Google Sheets (one tab per day)
    Sync {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to sync (default: current)")]
        month: Option<String>,

        #[arg(long = "delay-ms", help = "Pause between two days (default: sync_delay_ms)")]
        delay_ms: Option<u64>,

        #[arg(long = "dry-run", help = "Show what would be written without contacting Google")]
        dry_run: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
