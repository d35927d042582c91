use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "country-match")]
#[command(about = "Resolve genealogical place names to ISO 3166-1 country codes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a single place
    Match {
        /// Place as written in the record
        #[arg(required = true)]
        place: String,

        /// Event year, used to corroborate historical names
        #[arg(short, long)]
        year: Option<i32>,

        /// Parent's birthplace
        #[arg(long)]
        parent_birth: Option<String>,

        /// Spouse's birthplace
        #[arg(long)]
        spouse_birth: Option<String>,

        /// Reference data JSON (default: config, then built-in)
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Match every place in a file and write a report
    Batch {
        /// Input file (.txt one place per line, or JSON array)
        #[arg(required = true)]
        input: PathBuf,

        /// Report file (default: <input>.countries.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reference data JSON
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// Worker threads
        #[arg(short, long)]
        threads: Option<usize>,

        /// Unresolved locations to print
        #[arg(short, long)]
        sample: Option<usize>,

        /// Results below this confidence are reported as unresolved (0.0-1.0)
        #[arg(long)]
        unresolved_threshold: Option<f64>,
    },

    /// Validate and inspect reference data
    Reference {
        /// Reference data JSON (default: built-in)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print one country's record
        #[arg(long)]
        show: Option<String>,
    },

    /// Show or edit settings
    Config {
        /// Set the default reference data file
        #[arg(long)]
        set_reference: Option<PathBuf>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}
