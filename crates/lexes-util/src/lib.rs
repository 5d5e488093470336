//! lexes-util - shared error types for the query translation pipeline.
//!
//! Every pipeline crate (`lexes-lex`, `lexes-par`) reports failures through
//! one of the focused error enums in [`error`]; callers of the top-level
//! `translate()` entry point only ever see [`error::TranslateError`].

pub mod error;

pub use error::{
    AstError, RewriteError, ShuntError, TokenizeError, TranslateError, TranslateResult,
};
