//! CSV dataset loading and writing.
//!
//! Input files carry at least `query` (reference SQL) and `query_toks` (the
//! Python-list repr of the reference tokens, pre-split upstream), and
//! usually `generated_query` (model output; an absent column or empty cell
//! both mean "no generated text"). Every other column is carried through
//! untouched to the augmented output.

use std::path::Path;

use anyhow::Context;
use csv::StringRecord;
use sqleval::{Aggregates, EvalResult, RowOutcome, literal, tokenize};

/// One input row: the raw record plus the decoded comparison fields.
#[derive(Debug, Clone)]
pub struct EvalRow {
    pub record: StringRecord,
    pub query: String,
    /// Lowercased tokens decoded from `query_toks`.
    pub reference_tokens: Vec<String>,
    pub generated_query: Option<String>,
}

/// A loaded dataset: the header row plus decoded rows, column order intact.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: StringRecord,
    pub rows: Vec<EvalRow>,
}

/// Columns appended to the input table by the accuracy passes.
pub const DETAIL_COLUMNS: [&str; 5] = [
    "generated_tokens",
    "reference_tokens",
    "partial_match_percentage",
    "match_details",
    "exact_match",
];

fn column_index(headers: &StringRecord, name: &str) -> EvalResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("missing required column `{name}`"))
}

/// Load a dataset, decoding the comparison columns of each row.
///
/// A malformed `query_toks` literal or a missing required column aborts the
/// load; there is no row-level recovery.
pub fn load(path: &str, limit: Option<usize>) -> EvalResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open CSV at {path}"))?;

    let headers = rdr.headers()?.clone();
    let query_idx = column_index(&headers, "query")?;
    let toks_idx = column_index(&headers, "query_toks")?;
    let generated_idx = headers.iter().position(|h| h == "generated_query");

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        if let Some(limit) = limit
            && idx >= limit
        {
            break;
        }
        let record = result.with_context(|| format!("CSV parse error at row {idx} of {path}"))?;

        let query = record.get(query_idx).unwrap_or("").to_string();
        let raw_toks = record.get(toks_idx).unwrap_or("");
        let reference_tokens = tokenize::lowercase_tokens(
            &literal::parse_token_list(raw_toks)
                .with_context(|| format!("bad query_toks literal at row {idx} of {path}"))?,
        );
        let generated_query = generated_idx
            .and_then(|i| record.get(i))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        rows.push(EvalRow {
            record,
            query,
            reference_tokens,
            generated_query,
        });
    }

    Ok(Dataset { headers, rows })
}

impl Dataset {
    /// Borrow every row, for passes that run over the whole table.
    pub fn all_rows(&self) -> Vec<&EvalRow> {
        self.rows.iter().collect()
    }
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Write the input rows augmented with the per-row evaluation columns.
pub fn write_augmented(
    path: &Path,
    headers: &StringRecord,
    rows: &[&EvalRow],
    outcomes: &[RowOutcome],
) -> EvalResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut header = headers.clone();
    for column in DETAIL_COLUMNS {
        header.push_field(column);
    }
    writer.write_record(&header)?;

    for (row, outcome) in rows.iter().zip(outcomes) {
        let mut record = row.record.clone();
        record.push_field(&serde_json::to_string(&outcome.generated_tokens)?);
        record.push_field(&serde_json::to_string(&row.reference_tokens)?);
        record.push_field(&outcome.match_percentage.to_string());
        record.push_field(&serde_json::to_string(&outcome.details)?);
        record.push_field(if outcome.exact { "1" } else { "0" });
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a raw subset of the input table (`queries_<category>.csv`).
pub fn write_subset(path: &Path, headers: &StringRecord, rows: &[&EvalRow]) -> EvalResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row.record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the one-row table of dataset-level aggregates.
pub fn write_aggregates(path: &Path, aggregates: &Aggregates) -> EvalResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["average_partial_match_percentage", "exact_match_percentage"])?;
    writer.write_record([
        aggregates.average_partial_match.to_string(),
        aggregates.exact_match_percentage.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}
