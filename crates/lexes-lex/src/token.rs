//! Token types shared across tokenizing, rewriting, and shunting.

use std::fmt;

/// A token produced by the tokenizer, before any operator/term
/// classification has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken {
    LParen,
    RParen,
    /// A run of non-whitespace, non-paren characters (or a quoted phrase
    /// with its surrounding `"` stripped). Case is already normalized by
    /// the preprocessor.
    Atom(String),
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawToken::LParen => write!(f, "("),
            RawToken::RParen => write!(f, ")"),
            RawToken::Atom(s) => write!(f, "{s}"),
        }
    }
}

/// A recognized connector keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Or,
    And,
    Not,
    WithinParagraph,
    WithinSentence,
    /// `w/<n>`, carrying the parsed slop value.
    WithinN(u32),
}

impl Connector {
    /// Whether this connector is positional (span-mode) rather than
    /// boolean.
    pub fn is_proximity(self) -> bool {
        !matches!(self, Connector::Or | Connector::And | Connector::Not)
    }
}

/// Classify an atom string as a connector keyword, if it is one.
///
/// A `w/`-prefixed atom whose suffix fails to parse as a positive `u32`
/// (including `w/0`: the family is `n ∈ ℕ₊`, zero is not positive) is NOT
/// a connector here: only the numeric and `w/p`/`w/s` forms classify. It
/// is left to the shunting yard to notice the `w/` prefix and raise
/// `MalformedProximity` once it reaches that stage. Until then, the token
/// rewriter treats such an atom as an ordinary term for adjacency
/// purposes.
pub fn classify_connector(atom: &str) -> Option<Connector> {
    match atom {
        "or" => Some(Connector::Or),
        "and" => Some(Connector::And),
        "not" => Some(Connector::Not),
        "w/p" => Some(Connector::WithinParagraph),
        "w/s" => Some(Connector::WithinSentence),
        _ => atom
            .strip_prefix("w/")
            .and_then(|suffix| suffix.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .map(Connector::WithinN),
    }
}

/// Whether an atom looks like a proximity operator (`w/`-prefixed, not
/// `w/p` or `w/s`) but failed to classify as one - the shape the
/// Shunting Yard reports as `MalformedProximity`.
pub fn looks_like_proximity(atom: &str) -> bool {
    atom.starts_with("w/") && atom != "w/p" && atom != "w/s"
}
