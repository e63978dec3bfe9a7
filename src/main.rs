use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use isochron::cli_util::isochron_cli_error;
use isochron::export::write_matrix_csv;
use isochron::{filter_results, Event, RawData, ReferenceAligner, MIN_RESULTS_PER_PERSON};

/// Align personal-best progressions from WCA result exports onto a shared
/// daily timeline.
#[derive(Parser)]
struct Args {
    /// Results table CSV (personId, eventId, best, competitionId)
    results: PathBuf,
    /// Competitions table CSV (id, year, month, day)
    competitions: PathBuf,
    /// Output CSV path for the aligned matrix
    output: PathBuf,
    /// Event to align
    #[arg(long, default_value = "333")]
    event: String,
    /// Minimum results a competitor needs to be kept
    #[arg(long, default_value_t = MIN_RESULTS_PER_PERSON)]
    min_results: usize,
    /// Show a progress bar while aligning
    #[arg(long)]
    progress: bool,
    /// Print a JSON run summary to stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let event: Event = args
        .event
        .parse()
        .map_err(|e| isochron_cli_error("parsing event", e))?;
    let raw = RawData::load(&args.results, &args.competitions)
        .map_err(|e| isochron_cli_error("loading raw tables", e))?;
    let records = filter_results(&raw, event, args.min_results)
        .map_err(|e| isochron_cli_error("filtering results", e))?;

    let aligner =
        ReferenceAligner::new(records).map_err(|e| isochron_cli_error("seeding reference", e))?;

    let bar = if args.progress {
        let bar = ProgressBar::new(aligner.remaining() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{pos}/{len} competitors [{bar:40}] elapsed {elapsed_precise} remaining {eta_precise}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    } else {
        None
    };

    let (matrix, stats) = aligner
        .process_with(|done, _| {
            if let Some(bar) = bar.as_ref() {
                bar.set_position(done as u64);
            }
        })
        .map_err(|e| isochron_cli_error("aligning", e))?;
    if let Some(bar) = bar.as_ref() {
        bar.finish();
    }

    write_matrix_csv(&matrix, &args.output)
        .map_err(|e| isochron_cli_error("writing output", e))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats.summary(matrix.len()))?
        );
    } else {
        stats.report(matrix.len());
    }
    Ok(())
}
