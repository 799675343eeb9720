//! Lexical tokenization of SQL text.
//!
//! Two alternating token shapes: maximal runs of word characters, and single
//! non-word, non-whitespace characters. Whitespace only separates. There is
//! no SQL awareness here: keywords are ordinary words, quoted literals are
//! not special-cased, and a two-character operator such as `<=` comes out as
//! the two tokens `<` and `=`.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a SQL string into lowercase tokens.
pub fn tokenize_sql(sql: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in sql.char_indices() {
        if is_word_char(c) {
            if word_start.is_none() {
                word_start = Some(i);
            }
        } else {
            if let Some(start) = word_start.take() {
                tokens.push(sql[start..i].to_lowercase());
            }
            if !c.is_whitespace() {
                tokens.push(c.to_lowercase().to_string());
            }
        }
    }
    if let Some(start) = word_start {
        tokens.push(sql[start..].to_lowercase());
    }

    tokens
}

/// Case-normalize a token sequence that was split upstream.
pub fn lowercase_tokens(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|t| t.to_lowercase()).collect()
}
