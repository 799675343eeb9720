//! Token-set overlap scoring.

use std::collections::HashSet;

use indexmap::IndexMap;

/// Outcome of comparing one reference token sequence against one generated
/// token sequence.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MatchResult {
    /// Share of reference tokens present in the generated set, in [0, 100].
    pub match_percentage: f64,
    /// Per-token presence, keyed by reference token in first-seen order.
    /// Duplicate reference tokens collapse to a single entry (last write
    /// wins); the percentage above still counts every occurrence.
    pub presence: IndexMap<String, bool>,
}

impl MatchResult {
    /// The null result for rows without generated text.
    pub fn missing() -> Self {
        Self {
            match_percentage: 0.0,
            presence: IndexMap::new(),
        }
    }

    /// Every reference token was found. Vacuously true for an empty map.
    pub fn is_exact(&self) -> bool {
        self.presence.values().all(|&present| present)
    }
}

/// Score how much of `reference` appears in `generated`.
///
/// Membership is by set lookup over the generated sequence, so token order
/// and repetition on the generated side are irrelevant. An empty reference
/// scores 0.
pub fn compare_tokens(reference: &[String], generated: &[String]) -> MatchResult {
    let generated_set: HashSet<&str> = generated.iter().map(String::as_str).collect();

    let mut presence = IndexMap::new();
    let mut matched = 0usize;
    for token in reference {
        let present = generated_set.contains(token.as_str());
        presence.insert(token.clone(), present);
        if present {
            matched += 1;
        }
    }

    let match_percentage = if reference.is_empty() {
        0.0
    } else {
        matched as f64 / reference.len() as f64 * 100.0
    };

    MatchResult {
        match_percentage,
        presence,
    }
}
