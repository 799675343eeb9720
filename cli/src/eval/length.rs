//! Token-overlap accuracy bucketed by query length.
//!
//! Splits the dataset into Short/Medium/Long by reference-query word count,
//! writes the raw subset and the augmented results for each bucket, and
//! renders one grouped bar chart comparing exact and partial match rates
//! across buckets.

use std::path::PathBuf;

use sqleval::{Aggregates, EvalError, RowOutcome, aggregate, evaluate_row, length::LengthCategory};

use super::{chart, dataset};

#[derive(clap::Args, Debug, serde::Serialize)]
pub struct LengthArgs {
    /// Path to the model-output CSV
    #[arg(short, long, env = "SQLEVAL_FILE")]
    pub file: String,

    /// Directory for the per-bucket CSVs and the chart
    #[arg(short, long, default_value = ".", env = "SQLEVAL_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// File name of the bar chart image
    #[arg(
        long,
        default_value = "match_percentages_by_length.svg",
        env = "SQLEVAL_CHART"
    )]
    pub chart: String,

    /// Limit number of rows to process
    #[arg(long, env = "SQLEVAL_LIMIT")]
    pub limit: Option<usize>,
}

pub fn run(args: LengthArgs) -> Result<(), EvalError> {
    let data = dataset::load(&args.file, args.limit)?;
    eprintln!("Loaded {} rows from {}", data.rows.len(), args.file);

    let mut final_results: Vec<(LengthCategory, Aggregates)> = Vec::new();
    for category in LengthCategory::ALL {
        let subset: Vec<&dataset::EvalRow> = data
            .rows
            .iter()
            .filter(|row| LengthCategory::of(&row.query) == category)
            .collect();

        let subset_path = args
            .output_dir
            .join(format!("queries_{}.csv", category.file_stem()));
        dataset::write_subset(&subset_path, &data.headers, &subset)?;

        let outcomes: Vec<RowOutcome> = subset
            .iter()
            .map(|row| evaluate_row(&row.reference_tokens, row.generated_query.as_deref()))
            .collect();
        let aggregates = aggregate(&outcomes);

        let results_path = args
            .output_dir
            .join(format!("evaluation_results_{}.csv", category.file_stem()));
        dataset::write_augmented(&results_path, &data.headers, &subset, &outcomes)?;

        eprintln!(
            "\nResults for {category} ({} rows) saved to {}",
            subset.len(),
            results_path.display()
        );
        eprintln!(
            "{category} Exact Match Percentage: {:.2}%",
            aggregates.exact_match_percentage
        );
        eprintln!(
            "{category} Partial Match Percentage: {:.2}%",
            aggregates.average_partial_match
        );

        final_results.push((category, aggregates));
    }

    let chart_path = args.output_dir.join(&args.chart);
    chart::render_match_chart(&chart_path, &final_results)?;
    eprintln!("\nChart saved to {}", chart_path.display());

    Ok(())
}
