//! Tokenizer for bracketed tree descriptions.
//!
//! Parentheses are single-character delimiters, everything else is split
//! on whitespace. A label is thus any maximal run of characters that are
//! neither whitespace nor parentheses.

use std::fmt;

/// A token of the tree grammar `T = ( <label> T* )`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `(`
    Open,
    /// `)`
    Close,
    /// Any other maximal run of non-whitespace characters
    Label(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Label(label) => f.write_str(label),
        }
    }
}

/// Splits `text` into tokens.
///
/// Every parenthesis is padded with spaces before splitting on whitespace,
/// so `(a(b))` and `( a ( b ) )` yield the same tokens.
///
/// # Example
/// ```
/// use treeplot::parser::tokenizer::{tokenize, Token};
///
/// let tokens = tokenize("(root(leaf))");
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[1], Token::Label("root".to_string()));
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let normalized = text.replace('(', " ( ").replace(')', " ) ");
    normalized
        .split_whitespace()
        .map(|word| match word {
            "(" => Token::Open,
            ")" => Token::Close,
            label => Token::Label(label.to_string()),
        })
        .collect()
}

/// Returns `true` if `text` is read back as a single label token,
/// i.e. it is non-empty and holds neither whitespace nor parentheses.
///
/// # Example
/// ```
/// use treeplot::parser::tokenizer::is_label;
///
/// assert!(is_label("x:1.5,y"));
/// assert!(!is_label("two words"));
/// assert!(!is_label(""));
/// ```
pub fn is_label(text: &str) -> bool {
    !text.is_empty() && !text.chars().any(|c| c.is_whitespace() || c == '(' || c == ')')
}
