use clap::{Args, Parser, Subcommand};
use strmatch::io::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "strmatch", version, about = "Short tandem repeat profiling and DNA database matching", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Identify whose STR profile matches a DNA sequence
    Identify {
        /// STR database CSV (name column followed by one column per STR)
        database: String,

        /// Query sequence, plain text or FASTA (.gz accepted)
        sequence: String,

        /// Print every matching individual instead of the first
        #[arg(long)]
        all: bool,

        /// Print the match and the computed profile as JSON
        #[arg(long)]
        json: bool,

        /// Number of threads
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,
    },

    /// Report the longest run of each STR in a sequence
    Profile {
        /// Query sequence, plain text or FASTA (.gz accepted)
        sequence: String,

        #[command(flatten)]
        strs: StrSource,

        #[command(flatten)]
        format: FormatArgs,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Number of threads
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,
    },

    /// Locate the leftmost longest run of one STR
    Scan {
        /// Query sequence, plain text or FASTA (.gz accepted)
        sequence: String,

        /// STR pattern to locate
        #[arg(short = 's', long = "str")]
        pattern: String,
    },
}

/// Where the STR patterns to profile come from
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct StrSource {
    /// STR pattern to count (repeatable)
    #[arg(short = 's', long = "str")]
    pub patterns: Vec<String>,

    /// Take the STR columns of this database
    #[arg(short, long)]
    pub database: Option<String>,
}

/// Report layout flags for `profile`
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Output as JSON instead of TSV
    #[arg(long, conflicts_with = "tsv")]
    pub json: bool,

    /// Output as TSV (default)
    #[arg(long)]
    pub tsv: bool,
}

impl FormatArgs {
    pub fn format(&self) -> ReportFormat {
        match (self.json, self.tsv) {
            (true, _) => ReportFormat::Json,
            (false, true) => ReportFormat::Tsv,
            (false, false) => ReportFormat::default(),
        }
    }
}
