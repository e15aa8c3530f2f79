use billzapp::store::SortKey;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "billz",
    bin_name = "billz",
    version,
    disable_help_subcommand = true,
    after_help = "Dates may be written as 2024-03-09, 09.03.2024, 09-03-2024 or 09/03/2024."
)]
#[command(about = "Record billable items and export them as a PDF invoice", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Name,
    Price,
    Date,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Name => SortKey::Name,
            SortField::Price => SortKey::Price,
            SortField::Date => SortKey::Date,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Item name
        name: String,

        /// Price, with `.` or `,` as decimal separator
        #[arg(allow_hyphen_values = true)]
        price: String,

        /// Date of the item
        date: String,
    },

    /// List items
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only show items whose name contains this
        #[arg(short, long)]
        search: Option<String>,

        /// Show item ids
        #[arg(long)]
        ids: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one or more items
    #[command(alias = "v", display_order = 3)]
    View {
        /// Indexes, ranges, ids or a name (e.g. 1 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Change an item in place
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Index, id or name of the item
        index: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New price
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,

        /// New date
        #[arg(long)]
        date: Option<String>,
    },

    /// Remove items
    #[command(alias = "rm", display_order = 5)]
    Remove {
        /// Indexes, ranges, ids or a name
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Reorder the items
    #[command(display_order = 6)]
    Sort {
        /// Field to sort by
        #[arg(value_enum)]
        by: SortField,

        /// Largest, latest or last-in-alphabet first
        #[arg(long)]
        desc: bool,
    },

    /// Show the total of all items
    #[command(display_order = 7)]
    Total,

    /// Show summary statistics
    #[command(display_order = 8)]
    Stats {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the invoice as PDF
    #[command(display_order = 9)]
    Export {
        /// Destination file or directory (default: the configured file name)
        path: Option<PathBuf>,

        /// Print the invoice as text instead of writing a file
        #[arg(long, conflicts_with = "path")]
        preview: bool,
    },

    /// Re-read the items from disk
    #[command(display_order = 10)]
    Reload,

    /// Show or change settings
    #[command(display_order = 11)]
    Config {
        /// company, iban, currency or export-file
        key: Option<String>,

        /// New value (empty string resets)
        value: Option<String>,
    },

    /// Print the location of the data file
    #[command(display_order = 12)]
    Path,
}
