//! Preprocessor (query string normalization).
//!
//! Lowercases the input, replaces every `.` with a space, and trims
//! leading/trailing whitespace. Connector keywords are matched
//! case-insensitively and a period never carries meaning in this dialect,
//! so both must be gone before the tokenizer sees the string.

/// Normalize a raw query string before tokenizing.
pub fn preprocess(input: &str) -> String {
    input
        .chars()
        .map(|c| if c == '.' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}
