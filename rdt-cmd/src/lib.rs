//! Command implementations for the RDT CLI.
//!
//! Provides subcommands for validating, summarising, and converting the
//! roadside drug testing data exports that the dashboard consumes, plus a
//! fetcher for pulling the exports from a hosted deployment.

use clap::Subcommand;

pub mod check_sums;
pub mod convert;
pub mod fetch;
pub mod summarise;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// Validate that the data exports parse and normalize cleanly
    Validate {
        /// Directory containing the JSON exports
        #[arg(short = 'd', long, default_value = "data")]
        data_dir: String,
    },

    /// Print detection totals for a filter selection
    Summarise {
        /// Directory containing the JSON exports
        #[arg(short = 'd', long, default_value = "data")]
        data_dir: String,

        /// First year of the range
        #[arg(long)]
        year_start: Option<i32>,

        /// Last year of the range
        #[arg(long)]
        year_end: Option<i32>,

        /// Restrict to one state/territory code (e.g. NSW)
        #[arg(short = 'j', long)]
        jurisdiction: Option<String>,
    },

    /// Cross-check that per-state totals add up to the national trend
    CheckSums {
        /// Directory containing the JSON exports
        #[arg(short = 'd', long, default_value = "data")]
        data_dir: String,
    },

    /// Convert a CSV export into the JSON array format the dashboard loads
    Convert {
        /// Input CSV path
        #[arg(short = 'i', long)]
        input: String,

        /// Output JSON path
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Download the data exports from a hosted dashboard
    Fetch {
        /// Base URL of the deployment
        #[arg(short = 'u', long)]
        base_url: String,

        /// Directory to write the downloaded files into
        #[arg(short = 'o', long, default_value = ".")]
        out_dir: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Validate { data_dir } => validate::run_validate(&data_dir),
        Command::Summarise {
            data_dir,
            year_start,
            year_end,
            jurisdiction,
        } => summarise::run_summarise(&data_dir, year_start, year_end, jurisdiction.as_deref()),
        Command::CheckSums { data_dir } => check_sums::run_check_sums(&data_dir),
        Command::Convert { input, output } => convert::run_convert(&input, &output),
        Command::Fetch { base_url, out_dir } => fetch::run_fetch(&base_url, &out_dir).await,
    }
}
