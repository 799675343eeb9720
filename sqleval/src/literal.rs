//! Decoding of the pre-tokenized `query_toks` column.
//!
//! Datasets carry reference tokens as the Python repr of a list of strings,
//! e.g. `['SELECT', 'count', '(', '*', ')']`. This is a direct parser for
//! that shape: a bracketed, comma-separated sequence of single- or
//! double-quoted strings with backslash escapes. A malformed cell is an
//! error; callers propagate it and the whole run aborts rather than scoring
//! a dataset with silently dropped rows.

use anyhow::{Result, bail};

/// Parse a Python-list literal of strings into a token sequence.
pub fn parse_token_list(input: &str) -> Result<Vec<String>> {
    let trimmed = input.trim();
    let Some(body) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        bail!("expected a bracketed token list, got {input:?}");
    };

    let mut tokens = Vec::new();
    let mut chars = body.chars().peekable();
    let mut expect_separator = false;

    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }
        let Some(&c) = chars.peek() else {
            return Ok(tokens);
        };

        if expect_separator {
            if c != ',' {
                bail!("expected `,` between tokens in {input:?}");
            }
            chars.next();
            expect_separator = false;
            continue;
        }

        let quote = match c {
            '\'' | '"' => c,
            _ => bail!("expected a quoted token in {input:?}"),
        };
        chars.next();

        let mut token = String::new();
        loop {
            match chars.next() {
                Some('\\') => match chars.next() {
                    Some('n') => token.push('\n'),
                    Some('t') => token.push('\t'),
                    Some(escaped) => token.push(escaped),
                    None => bail!("unterminated escape in {input:?}"),
                },
                Some(c) if c == quote => break,
                Some(c) => token.push(c),
                None => bail!("unterminated string in {input:?}"),
            }
        }
        tokens.push(token);
        expect_separator = true;
    }
}
