//! ROUGE-L and longest-common-substring scoring.
//!
//! Rows without generated text get empty score cells and are left out of the
//! dataset averages.

use std::path::Path;

use anyhow::Context;
use sqleval::{
    EvalError, EvalResult,
    rouge::{RougeL, longest_common_substring, rouge_l},
};

use super::dataset::{self, Dataset};

#[derive(clap::Args, Debug, serde::Serialize)]
pub struct RougeArgs {
    /// Path to the model-output CSV
    #[arg(short, long, env = "SQLEVAL_FILE")]
    pub file: String,

    /// Where to write the per-row scores
    #[arg(
        short,
        long,
        default_value = "detailed_rouge_scores_with_lcs.csv",
        env = "SQLEVAL_OUTPUT"
    )]
    pub output: String,

    /// Where to write the dataset-average scores
    #[arg(
        long,
        default_value = "average_rouge_scores.csv",
        env = "SQLEVAL_AVERAGES"
    )]
    pub averages: String,

    /// Limit number of rows to process
    #[arg(long, env = "SQLEVAL_LIMIT")]
    pub limit: Option<usize>,
}

fn write_detailed(path: &Path, data: &Dataset) -> EvalResult<Vec<RougeL>> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record([
        "query",
        "generated_query",
        "LCS",
        "rouge-l_r",
        "rouge-l_p",
        "rouge-l_f",
    ])?;

    let mut scores = Vec::new();
    for row in &data.rows {
        match &row.generated_query {
            None => {
                writer.write_record([row.query.as_str(), "", "", "", "", ""])?;
            }
            Some(generated) => {
                let score = rouge_l(generated, &row.query);
                let lcs = longest_common_substring(&row.query, generated);
                let (recall, precision, f_score) = (
                    score.recall.to_string(),
                    score.precision.to_string(),
                    score.f_score.to_string(),
                );
                writer.write_record([
                    row.query.as_str(),
                    generated.as_str(),
                    lcs,
                    recall.as_str(),
                    precision.as_str(),
                    f_score.as_str(),
                ])?;
                scores.push(score);
            }
        }
    }
    writer.flush()?;

    Ok(scores)
}

fn average_scores(scores: &[RougeL]) -> RougeL {
    if scores.is_empty() {
        return RougeL {
            recall: 0.0,
            precision: 0.0,
            f_score: 0.0,
        };
    }
    let n = scores.len() as f64;
    RougeL {
        recall: scores.iter().map(|s| s.recall).sum::<f64>() / n,
        precision: scores.iter().map(|s| s.precision).sum::<f64>() / n,
        f_score: scores.iter().map(|s| s.f_score).sum::<f64>() / n,
    }
}

fn write_averages(path: &Path, average: &RougeL) -> EvalResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["rouge-l_r", "rouge-l_p", "rouge-l_f"])?;
    writer.write_record([
        average.recall.to_string(),
        average.precision.to_string(),
        average.f_score.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}

pub fn run(args: RougeArgs) -> Result<(), EvalError> {
    let data = dataset::load(&args.file, args.limit)?;
    let total = data.rows.len();
    eprintln!("Loaded {total} rows from {}", args.file);

    let scores = write_detailed(Path::new(&args.output), &data)?;
    eprintln!("Detailed ROUGE scores with LCS saved to {}", args.output);

    let average = average_scores(&scores);
    write_averages(Path::new(&args.averages), &average)?;

    eprintln!("\n=== Average ROUGE-L Scores (n={}) ===", scores.len());
    eprintln!("rouge-l_r: {:.3}", average.recall);
    eprintln!("rouge-l_p: {:.3}", average.precision);
    eprintln!("rouge-l_f: {:.3}", average.f_score);
    eprintln!("Average ROUGE scores saved to {}", args.averages);

    Ok(())
}
