//! Token Rewriter: `and not` normalization and implicit-`or` adjacency
//! handling.

use lexes_util::RewriteError;

use crate::token::{classify_connector, RawToken};

/// Whether a token is itself a term (so a pair of adjacent terms
/// triggers implicit-`or` insertion). Only a non-connector atom
/// qualifies - `(` and `)` are neither operator nor term, so they never
/// trigger adjacency on either side, per spec.md §4.3's literal rule
/// ("neither operator nor parenthesis").
fn is_term(tok: &RawToken) -> bool {
    match tok {
        RawToken::Atom(s) => classify_connector(s).is_none(),
        RawToken::LParen | RawToken::RParen => false,
    }
}

/// Collapse `and not` into a single `not`, then either insert an
/// implicit `or` between two adjacent term positions or report
/// [`RewriteError::MissingOperator`], depending on `insert_operators`.
pub fn rewrite(tokens: Vec<RawToken>, insert_operators: bool) -> Result<Vec<RawToken>, RewriteError> {
    let collapsed = collapse_and_not(tokens);
    insert_adjacency(collapsed, insert_operators)
}

fn collapse_and_not(tokens: Vec<RawToken>) -> Vec<RawToken> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(tok) = iter.next() {
        if let RawToken::Atom(s) = &tok {
            if s == "and" {
                if let Some(RawToken::Atom(next)) = iter.peek() {
                    if next == "not" {
                        continue;
                    }
                }
            }
        }
        out.push(tok);
    }
    out
}

fn insert_adjacency(
    tokens: Vec<RawToken>,
    insert_operators: bool,
) -> Result<Vec<RawToken>, RewriteError> {
    let mut out = Vec::with_capacity(tokens.len());

    for tok in tokens {
        if let Some(prev) = out.last() {
            if is_term(prev) && is_term(&tok) {
                if insert_operators {
                    out.push(RawToken::Atom("or".to_string()));
                } else {
                    return Err(RewriteError::MissingOperator {
                        left: prev.to_string(),
                        right: tok.to_string(),
                    });
                }
            }
        }
        out.push(tok);
    }

    Ok(out)
}
