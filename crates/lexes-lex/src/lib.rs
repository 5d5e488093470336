//! lexes-lex - preprocessing, tokenizing, and rewriting for LexisNexis
//! boolean/proximity query strings.
//!
//! This crate owns everything up through a flat, infix token stream ready
//! for the shunting yard in `lexes-par`: [`preprocess::preprocess`] ->
//! [`tokenizer::tokenize`] -> [`rewrite::rewrite`].

pub mod preprocess;
pub mod rewrite;
pub mod token;
pub mod tokenizer;

pub use preprocess::preprocess;
pub use rewrite::rewrite;
pub use token::{classify_connector, looks_like_proximity, Connector, RawToken};
pub use tokenizer::tokenize;

use lexes_util::TranslateResult;

/// Run the preprocess -> tokenize -> rewrite stages in sequence,
/// producing the infix token stream the shunting yard consumes.
pub fn lex(input: &str, insert_operators: bool) -> TranslateResult<Vec<RawToken>> {
    let normalized = preprocess(input);
    let tokens = tokenize(&normalized)?;
    tracing::debug!(raw_token_count = tokens.len(), "tokenized query");
    let rewritten = rewrite(tokens, insert_operators)?;
    tracing::debug!(token_count = rewritten.len(), "rewrote token stream");
    Ok(rewritten)
}
