//! Error types for the query translation pipeline.
//!
//! Each pipeline stage gets its own focused error enum so the stage that
//! detects a problem can report it precisely; [`TranslateError`] unifies
//! them behind a single type for callers of the top-level `translate()`
//! entry point.

use thiserror::Error;

/// Errors raised while tokenizing a preprocessed query string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A `)` was seen before any matching `(`.
    #[error("unmatched closing parenthesis")]
    UnmatchedClose,

    /// Parentheses were not balanced by end-of-input.
    #[error("unclosed parenthetical group")]
    UnclosedGroup,

    /// An odd number of `"` were seen by end-of-input.
    #[error("unclosed quotation")]
    UnclosedQuote,
}

/// Errors raised while rewriting the token stream (adjacency handling).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    /// Two adjacent term tokens with no connecting operator, and
    /// `insert_operators` was disabled.
    #[error("missing operator between adjacent terms \"{left}\" and \"{right}\"")]
    MissingOperator { left: String, right: String },
}

/// Errors raised while converting the infix token list to postfix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShuntError {
    /// A `w/...` token whose suffix is neither `s`, `p`, nor a positive
    /// integer.
    #[error("malformed proximity operator \"{token}\"")]
    MalformedProximity { token: String },
}

/// Errors raised while folding the postfix sequence into an AST.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AstError {
    /// The work stack held other than exactly one entry once the postfix
    /// sequence was fully consumed.
    #[error("stack shape invalid: {remaining} entries remained on the work stack")]
    InternalConsistency { remaining: usize },
}

/// Unified error type for the whole translation pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error(transparent)]
    Shunt(#[from] ShuntError),

    #[error(transparent)]
    Ast(#[from] AstError),
}

/// Result alias for the top-level translation pipeline.
pub type TranslateResult<T> = std::result::Result<T, TranslateError>;
