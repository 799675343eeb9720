//! Whole-dataset token-overlap accuracy.

use std::path::Path;

use sqleval::{EvalError, RowOutcome, aggregate, evaluate_row};

use super::dataset;

#[derive(clap::Args, Debug, serde::Serialize)]
pub struct AccuracyArgs {
    /// Path to the model-output CSV
    #[arg(short, long, env = "SQLEVAL_FILE")]
    pub file: String,

    /// Where to write the augmented per-row results
    #[arg(
        short,
        long,
        default_value = "evaluation_results_detailed.csv",
        env = "SQLEVAL_OUTPUT"
    )]
    pub output: String,

    /// Where to write the one-row aggregate table
    #[arg(
        long,
        default_value = "evaluation_results_summary.csv",
        env = "SQLEVAL_SUMMARY"
    )]
    pub summary: String,

    /// Limit number of rows to process
    #[arg(long, env = "SQLEVAL_LIMIT")]
    pub limit: Option<usize>,
}

pub fn run(args: AccuracyArgs) -> Result<(), EvalError> {
    let data = dataset::load(&args.file, args.limit)?;
    let total = data.rows.len();
    eprintln!("Loaded {total} rows from {}", args.file);

    let pb = super::create_eval_progress(total as u64, "token overlap");
    let outcomes: Vec<RowOutcome> = data
        .rows
        .iter()
        .map(|row| {
            let outcome = evaluate_row(&row.reference_tokens, row.generated_query.as_deref());
            pb.inc(1);
            outcome
        })
        .collect();
    super::finish_eval_progress(&pb, format!("scored {total} rows"));

    let aggregates = aggregate(&outcomes);
    dataset::write_augmented(
        Path::new(&args.output),
        &data.headers,
        &data.all_rows(),
        &outcomes,
    )?;
    dataset::write_aggregates(Path::new(&args.summary), &aggregates)?;

    eprintln!("\n=== Token Overlap (n={total}) ===");
    eprintln!(
        "Average Partial Match Percentage: {:.2}%",
        aggregates.average_partial_match
    );
    eprintln!(
        "Percentage of Exact Matches (Label=1): {:.2}%",
        aggregates.exact_match_percentage
    );
    eprintln!("Results saved to {}", args.output);
    eprintln!("Summary saved to {}", args.summary);

    Ok(())
}
