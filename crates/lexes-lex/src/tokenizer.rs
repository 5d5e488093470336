//! Tokenizer: scans a preprocessed query string into [`RawToken`]s.
//!
//! Scanning rules:
//! - `(` and `)` are always their own token, even when glued to other
//!   characters (`(damages)` tokenizes as `(`, `damages`, `)`).
//! - A `"` toggles quote mode; everything between a matching pair of `"`
//!   (including whitespace, `(`, and `)`) becomes a single `Atom` with the
//!   quotes stripped.
//! - Outside quotes, whitespace separates atoms.
//! - A trailing `!` on an atom is rewritten to `*` (the truncation glyph
//!   is just an alternate spelling of wildcard/prefix truncation).

use lexes_util::TokenizeError;

use crate::token::RawToken;

/// Tokenize a preprocessed query string.
pub fn tokenize(input: &str) -> Result<Vec<RawToken>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut depth: i32 = 0;
    let mut in_quotes = false;
    let mut current = String::new();

    let flush = |current: &mut String, tokens: &mut Vec<RawToken>| {
        if !current.is_empty() {
            tokens.push(RawToken::Atom(std::mem::take(current)));
        }
    };

    for ch in input.chars() {
        if in_quotes {
            if ch == '"' {
                in_quotes = false;
                flush(&mut current, &mut tokens);
            } else {
                current.push(ch);
            }
            continue;
        }

        match ch {
            '"' => {
                flush(&mut current, &mut tokens);
                in_quotes = true;
            }
            '(' => {
                flush(&mut current, &mut tokens);
                depth += 1;
                tokens.push(RawToken::LParen);
            }
            ')' => {
                flush(&mut current, &mut tokens);
                depth -= 1;
                if depth < 0 {
                    return Err(TokenizeError::UnmatchedClose);
                }
                tokens.push(RawToken::RParen);
            }
            c if c.is_whitespace() => {
                flush(&mut current, &mut tokens);
            }
            '!' => {
                current.push('*');
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(TokenizeError::UnclosedQuote);
    }
    flush(&mut current, &mut tokens);

    if depth != 0 {
        return Err(TokenizeError::UnclosedGroup);
    }

    Ok(tokens)
}
