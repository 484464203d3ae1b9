use crate::export::ExportFormat;
use crate::models::Session;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mark class absentees and review student attendance as a calendar heat-map",
    long_about = None
)]
pub struct Cli {
    /// Override the operation log database path
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the backend base URL (e.g. http://localhost:8000)
    #[arg(global = true, long = "backend")]
    pub backend: Option<String>,

    /// Disable ANSI colours in the calendar
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the operation log
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

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the operation log")]
        print: bool,

        #[arg(long = "op", requires = "print", help = "Only rows of this operation (mark, view, init...)")]
        op: Option<String>,
    },

    /// List the classes known to the backend
    Classes,

    /// List the students enrolled in a class
    Students {
        /// Class id (see `rattendance classes`)
        class_id: i64,
    },

    /// Mark absentees of a class for a date and session
    Mark {
        /// Class id (see `rattendance classes`)
        class_id: i64,

        #[arg(long, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, value_enum, help = "Session, default from config")]
        session: Option<Session>,

        /// Absent roll numbers: `--absent 3 --absent 7` or `--absent 3,7`
        #[arg(long = "absent", short = 'a', value_delimiter = ',', num_args = 1..)]
        absent: Vec<u32>,

        #[arg(long = "marked-by", help = "Id of the user marking attendance, default from config")]
        marked_by: Option<i64>,

        #[arg(long, help = "Print the report and a WhatsApp share link")]
        share: bool,
    },

    /// Show a student's attendance as a calendar heat-map
    View {
        /// Student id / roll number
        student_id: String,

        #[arg(long, help = "First day (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Last day (YYYY-MM-DD)")]
        to: Option<String>,

        /// Period instead of --from/--to.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM               → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD            → specific day (e.g. "2025-06-18")
        /// - start:end in the same format (e.g. "2025-06:2025-08")
        ///
        /// If nothing is given, the current month is shown.
        #[arg(long, short, conflicts_with_all = ["from", "to"])]
        period: Option<String>,

        #[arg(long, value_enum, requires = "file", help = "Export the grid (csv, json)")]
        export: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", requires = "export", help = "Export file (absolute path)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
        force: bool,
    },
}
