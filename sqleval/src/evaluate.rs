//! Row-level evaluation and dataset aggregates.

use indexmap::IndexMap;

use crate::matcher::{self, MatchResult};
use crate::tokenize;

pub type EvalError = anyhow::Error;
pub type EvalResult<T> = anyhow::Result<T>;

/// Evaluation output for one dataset row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RowOutcome {
    /// Tokens lexed from the generated query; empty when it was absent.
    pub generated_tokens: Vec<String>,
    pub match_percentage: f64,
    pub details: IndexMap<String, bool>,
    pub exact: bool,
}

impl RowOutcome {
    /// The null outcome for rows whose generated query is absent: zero
    /// percentage, empty detail map, and explicitly non-exact.
    fn missing() -> Self {
        let null = MatchResult::missing();
        Self {
            generated_tokens: Vec::new(),
            match_percentage: null.match_percentage,
            details: null.presence,
            exact: false,
        }
    }
}

/// Evaluate one row against its reference token sequence.
///
/// `reference_tokens` come pre-split upstream and must already be
/// case-normalized (see [`tokenize::lowercase_tokens`]). The generated query
/// is lexed here.
pub fn evaluate_row(reference_tokens: &[String], generated_query: Option<&str>) -> RowOutcome {
    let Some(generated_query) = generated_query else {
        return RowOutcome::missing();
    };

    let generated_tokens = tokenize::tokenize_sql(generated_query);
    let result = matcher::compare_tokens(reference_tokens, &generated_tokens);
    let exact = result.is_exact();
    RowOutcome {
        generated_tokens,
        match_percentage: result.match_percentage,
        details: result.presence,
        exact,
    }
}

/// Dataset-level aggregates over per-row outcomes.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Aggregates {
    /// Mean of the per-row match percentages.
    pub average_partial_match: f64,
    /// Share of rows that matched exactly, in [0, 100].
    pub exact_match_percentage: f64,
}

/// Aggregate outcomes; an empty set aggregates to zeros.
pub fn aggregate(outcomes: &[RowOutcome]) -> Aggregates {
    if outcomes.is_empty() {
        return Aggregates {
            average_partial_match: 0.0,
            exact_match_percentage: 0.0,
        };
    }

    let n = outcomes.len() as f64;
    let average_partial_match = outcomes.iter().map(|o| o.match_percentage).sum::<f64>() / n;
    let exact = outcomes.iter().filter(|o| o.exact).count() as f64;
    Aggregates {
        average_partial_match,
        exact_match_percentage: exact / n * 100.0,
    }
}
