//! A benchmark session: every quicksort configuration and several natural merge sort runs over the
//! same input, rendered into one report.

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::input;
use crate::natural_merge;
use crate::quicksort::{self, PivotStrategy, QuicksortConfig};
use crate::report::{self, Records, RunReport};
use crate::stats::{Stats, MERGE_TRACE_CAP, QUICKSORT_TRACE_CAP, TRACE_LEN_LIMIT};
use crate::timing::{Performance, RunStatus};

const TITLE: &str = "-------Quicksort and Natural Merge Sort Results-------";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// One quicksort run per entry, in order.
    pub quicksort: Vec<QuicksortConfig>,
    /// How often the natural merge sort is repeated.
    pub merge_runs: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            quicksort: vec![
                QuicksortConfig::new(PivotStrategy::First, 2),
                QuicksortConfig::new(PivotStrategy::First, 100),
                QuicksortConfig::new(PivotStrategy::First, 50),
                QuicksortConfig::new(PivotStrategy::MedianOfThree, 2),
            ],
            merge_runs: 5,
        }
    }
}

/// Reads `input_path`, runs the session and writes the report to `output_path`.
///
/// Malformed records are not an error of this function, they end up in the report instead.
pub fn run_file(input_path: &Path, output_path: &Path, config: &SessionConfig) -> Result<()> {
    let report = match input::read_records(input_path) {
        Ok(records) => run_session(&records, config),
        Err(err @ Error::MalformedRecord { .. }) => {
            warn!(%err, "input contains malformed records, see output file");
            error_report(&err)
        }
        Err(err) => return Err(err),
    };

    fs::write(output_path, report)?;
    info!(output = %output_path.display(), "report written");

    Ok(())
}

/// Runs all configured sorts on independent copies of `records` and renders the report.
pub fn run_session(records: &[i64], config: &SessionConfig) -> String {
    info!(
        len = records.len(),
        quicksort_runs = config.quicksort.len(),
        merge_runs = config.merge_runs,
        "starting session"
    );

    let mut performance = Performance::new();
    let show_results = records.len() <= TRACE_LEN_LIMIT;

    let mut out = vec![TITLE.to_owned()];
    if show_results {
        out.extend(report::format_original_records(records));
    } else {
        out.push(report::format_size(records.len()));
    }

    out.push("\n-----Quicksort:".to_owned());
    for (idx, qs_config) in config.quicksort.iter().enumerate() {
        let input = records.to_vec();
        let outcome = performance.measure(records.len(), || quicksort::sort_vec(input, *qs_config));

        out.push(finish_run(
            &mut performance,
            FinishedRun {
                line_number: idx + 1,
                input_len: records.len(),
                sorted: &outcome.sorted,
                stats: &outcome.stats,
                config: Some(*qs_config),
                show_results: show_results && idx == 0,
                trace_cap: QUICKSORT_TRACE_CAP,
            },
        ));
    }

    out.push("\n-----Natural Merge Sort:".to_owned());
    for idx in 0..config.merge_runs {
        let outcome = performance.measure(records.len(), || natural_merge::sort(records));
        let sorted = outcome.sorted.to_vec();

        out.push(finish_run(
            &mut performance,
            FinishedRun {
                line_number: idx + 1,
                input_len: records.len(),
                sorted: &sorted,
                stats: &outcome.stats,
                config: None,
                show_results: show_results && idx == 0,
                trace_cap: MERGE_TRACE_CAP,
            },
        ));
    }

    out.push(report::format_performance_report(&performance, true));
    out.push("Done.".to_owned());

    out.join("\n")
}

/// Report for input that could not be parsed.
pub fn error_report(error: &Error) -> String {
    let mut out = vec![TITLE.to_owned()];
    out.extend(report::format_input_error(error));
    out.push("Done.".to_owned());

    out.join("\n")
}

/// Writes `records` as whitespace separated text, one line per `per_line` values.
pub fn write_records<T: Display>(path: &Path, records: &[T], per_line: usize) -> Result<()> {
    let text = records
        .chunks(per_line.max(1))
        .map(|line| {
            line.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n");

    fs::write(path, text)?;
    Ok(())
}

struct FinishedRun<'a> {
    line_number: usize,
    input_len: usize,
    sorted: &'a [i64],
    stats: &'a Stats<i64>,
    config: Option<QuicksortConfig>,
    show_results: bool,
    trace_cap: usize,
}

/// Checks the output of a measured run, records its outcome and renders it.
fn finish_run(performance: &mut Performance, run: FinishedRun<'_>) -> String {
    let failure = verify_sorted(run.input_len, run.sorted);
    let runtime = performance.runtime();

    match &failure {
        None => performance.record(RunStatus::Success),
        Some(message) => {
            warn!(line_number = run.line_number, reason = %message, "sort run failed");
            performance.record(RunStatus::Failure);
        }
    }

    let engine = run
        .config
        .map_or_else(|| "natural_merge".to_owned(), |config| config.to_string());
    debug!(
        line_number = run.line_number,
        %engine,
        comparisons = run.stats.comparisons,
        exchanges = run.stats.exchanges,
        runtime_us = runtime.as_micros() as u64,
        "sort run done"
    );

    let records = match &failure {
        Some(message) => Records::Error(message),
        None if run.show_results => Records::Sorted(run.sorted),
        None => Records::Sorted(&[]),
    };

    let (comparison_trace, exchange_trace) = if run.show_results {
        (
            run.stats.capped_comparison_trace(run.trace_cap),
            run.stats.capped_exchange_trace(run.trace_cap),
        )
    } else {
        (Vec::new(), Vec::new())
    };

    report::render(&RunReport {
        line_number: run.line_number,
        records,
        runtime: round_to_micros(runtime),
        config: run.config,
        comparisons: run.stats.comparisons,
        exchanges: run.stats.exchanges,
        comparison_trace,
        exchange_trace,
    })
}

fn verify_sorted(input_len: usize, sorted: &[i64]) -> Option<String> {
    if sorted.len() != input_len {
        return Some(format!(
            "sorted output holds {} of {input_len} records",
            sorted.len()
        ));
    }

    sorted
        .windows(2)
        .position(|w| w[1] < w[0])
        .map(|idx| format!("sorted output out of order at position {}", idx + 1))
}

fn round_to_micros(runtime: Duration) -> Duration {
    Duration::from_micros(runtime.as_micros() as u64)
}
