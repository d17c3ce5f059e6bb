//! Error types for the tree parser.
//!
//! This module provides [ParsingError] for representing and reporting
//! errors that occur while parsing a bracketed tree description.

use thiserror::Error;

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Errors that can occur while parsing a tree description.
///
/// All variants are fatal for the current input: no partial tree is returned.
#[derive(Debug, Error)]
pub enum ParsingError {
    /// First token is not `(`.
    #[error("input must start with '(' but found {token:?} at index 0")]
    MissingOpeningParen { token: String },

    /// Fewer tokens than one complete node `( label )` needs.
    #[error("input too short: expected at least 3 tokens, found {num_tokens}")]
    TooShort { num_tokens: usize },

    /// Token does not fit the parser state at this position.
    #[error("unexpected token {token:?} at index {index}")]
    UnexpectedToken { token: String, index: usize },

    /// Parentheses do not balance at end of input.
    ///
    /// `open` counts unclosed `(`; it is negative if there are surplus `)`.
    #[error("bracket mismatch: {}", describe_balance(.open))]
    BracketMismatch { open: i64 },

    /// Reading the input failed.
    #[error("IO error - {0}")]
    Io(#[from] std::io::Error),
}

impl ParsingError {
    /// Convenience constructor for UnexpectedToken
    pub fn unexpected_token<S: Into<String>>(token: S, index: usize) -> Self {
        ParsingError::UnexpectedToken {
            token: token.into(),
            index,
        }
    }

    /// Returns the index of the offending token, if the error has one.
    pub fn token_index(&self) -> Option<usize> {
        match self {
            ParsingError::MissingOpeningParen { .. } => Some(0),
            ParsingError::UnexpectedToken { index, .. } => Some(*index),
            _ => None,
        }
    }
}

fn describe_balance(open: &i64) -> String {
    if *open >= 0 {
        format!("{open} unclosed '(' at end of input")
    } else {
        format!("{} surplus ')' at end of input", -open)
    }
}
