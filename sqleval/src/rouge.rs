//! ROUGE-L and longest-common-substring metrics.
//!
//! ROUGE-L works over lowercase whitespace tokens with a
//! longest-common-subsequence dynamic program: recall against the reference
//! length, precision against the generated length, F = 2pr/(p+r). The
//! substring matcher is character-level and reports the matched text itself.

/// ROUGE-L recall, precision, and F-score, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RougeL {
    pub recall: f64,
    pub precision: f64,
    pub f_score: f64,
}

fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn lcs_length(a: &[String], b: &[String]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for a_token in a {
        for (j, b_token) in b.iter().enumerate() {
            curr[j + 1] = if a_token == b_token {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Score a generated string against a reference.
pub fn rouge_l(generated: &str, reference: &str) -> RougeL {
    let generated_tokens = words(generated);
    let reference_tokens = words(reference);

    if generated_tokens.is_empty() || reference_tokens.is_empty() {
        let score = if generated_tokens.is_empty() && reference_tokens.is_empty() {
            1.0
        } else {
            0.0
        };
        return RougeL {
            recall: score,
            precision: score,
            f_score: score,
        };
    }

    let lcs = lcs_length(&generated_tokens, &reference_tokens) as f64;
    let precision = lcs / generated_tokens.len() as f64;
    let recall = lcs / reference_tokens.len() as f64;
    let f_score = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    RougeL {
        recall,
        precision,
        f_score,
    }
}

/// Longest common substring of `a` and `b`, as a slice of `a`.
///
/// Ties resolve to the earliest occurrence in `a`. Comparison is
/// case-sensitive and character-level, so the result is reportable text.
pub fn longest_common_substring<'a>(a: &'a str, b: &str) -> &'a str {
    let a_chars: Vec<(usize, char)> = a.char_indices().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() || b_chars.is_empty() {
        return "";
    }

    let mut prev = vec![0usize; b_chars.len() + 1];
    let mut curr = vec![0usize; b_chars.len() + 1];
    let mut best_len = 0usize;
    let mut best_end = 0usize; // exclusive char position in `a`

    for (i, &(_, a_char)) in a_chars.iter().enumerate() {
        for (j, &b_char) in b_chars.iter().enumerate() {
            curr[j + 1] = if a_char == b_char { prev[j] + 1 } else { 0 };
            if curr[j + 1] > best_len {
                best_len = curr[j + 1];
                best_end = i + 1;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    if best_len == 0 {
        return "";
    }
    let start = a_chars[best_end - best_len].0;
    let end = match a_chars.get(best_end) {
        Some(&(byte_idx, _)) => byte_idx,
        None => a.len(),
    };
    &a[start..end]
}
