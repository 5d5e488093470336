//! lexes-par - Shunting Yard, AST Builder, Lowering, and Envelope
//! Assembler for LexisNexis boolean/proximity query strings.
//!
//! [`translate`] is the single entry point: it runs `lexes-lex`'s
//! preprocess -> tokenize -> rewrite stages, then this crate's
//! shunt -> build_ast -> lower -> assemble stages, producing the final
//! clause-tree document.

pub mod ast;
pub mod envelope;
pub mod lower;
pub mod options;
pub mod shunt;

pub use ast::{build_ast, AstNode, ChildSlot, Op, TermClass};
pub use options::Options;
pub use shunt::{shunt, PostfixToken};

use lexes_util::TranslateResult;
use lower::Lowerer;

/// Translate a Lexis connector-dialect query string into a clause-tree
/// document, per the caller-supplied [`Options`].
pub fn translate(query: &str, options: &Options) -> TranslateResult<serde_json::Value> {
    let tokens = lexes_lex::lex(query, options.insert_operators)?;
    tracing::debug!(token_count = tokens.len(), "lexed query");

    let postfix = shunt::shunt(tokens)?;
    tracing::debug!(postfix_len = postfix.len(), "converted to postfix");

    let ast = ast::build_ast(postfix)?;

    let lowered = Lowerer::new(&options.field).lower(&ast, false);
    tracing::debug!("lowered AST to clause tree");

    Ok(envelope::assemble(lowered, options))
}
