use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use quickmerge::quicksort::QuicksortConfig;
use quickmerge::run::{self, SessionConfig};
use sort_test_tools::patterns;

const RECORDS_PER_LINE: usize = 20;

#[derive(Parser)]
#[command(name = "quickmerge", version)]
#[command(about = "Compare instrumented quicksort variants against a linked list natural merge sort")]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    session: SessionArgs,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Args)]
struct SessionArgs {
    /// File with whitespace separated integer records
    #[arg(required = true)]
    input: Option<PathBuf>,

    /// Report file, overwritten if it exists
    #[arg(required = true)]
    output: Option<PathBuf>,

    /// How often the natural merge sort is repeated
    #[arg(long, default_value_t = 5)]
    merge_runs: usize,

    /// Quicksort run as PIVOT:THRESHOLD, e.g. median_of_three:2. Repeat for several runs
    #[arg(long = "quicksort", value_name = "PIVOT:THRESHOLD")]
    quicksort: Vec<QuicksortConfig>,
}

#[derive(Subcommand)]
enum Command {
    /// Write a generated input file
    Generate {
        output: PathBuf,

        /// Number of records
        #[arg(long)]
        len: usize,

        #[arg(long, default_value = "random", value_parser = PossibleValuesParser::new(patterns::PATTERN_NAMES))]
        pattern: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Command::Generate {
            output,
            len,
            pattern,
        }) => {
            let records = patterns::by_name(&pattern, len)
                .with_context(|| format!("unknown pattern '{pattern}'"))?;

            run::write_records(&output, &records, RECORDS_PER_LINE)
                .with_context(|| format!("failed to write {}", output.display()))?;

            info!(len, %pattern, output = %output.display(), "input generated");
        }
        None => {
            let SessionArgs {
                input,
                output,
                merge_runs,
                quicksort,
            } = cli.session;

            let input = input.context("missing input file")?;
            let output = output.context("missing output file")?;

            let mut config = SessionConfig {
                merge_runs,
                ..SessionConfig::default()
            };
            if !quicksort.is_empty() {
                config.quicksort = quicksort;
            }

            run::run_file(&input, &output, &config).with_context(|| {
                format!(
                    "failed to sort {} into {}",
                    input.display(),
                    output.display()
                )
            })?;
        }
    }

    Ok(())
}
