//! Parser turning a token stream into a [PlotTree].
//!
//! # Format
//! The grammar is:
//! * `tree ::= '(' label tree* ')'`
//!
//! Furthermore:
//! * Whitespace is insignificant, also around parentheses
//! * A label is any maximal run of non-whitespace, non-parenthesis characters
//! * Labels need not be unique
//!
//! The parser is a small state machine over the tokens. It keeps an
//! insertion cursor (the node new children get attached to) and a counter
//! of open parentheses, so it never recurses and nesting depth is unbounded.

use crate::model::{NodeIndex, PlotTree};
use crate::parser::parsing_error::ParsingError;
use crate::parser::tokenizer::{Token, tokenize};
use std::path::Path;
use tracing::debug;

/// Minimum number of tokens of a tree: `(`, root label, `)`.
const MIN_NUM_TOKENS: usize = 3;

/// What the parser accepts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Just saw `(`, a label must follow
    ExpectLabel,
    /// Just saw a label or `)`, children `(` or a closing `)` may follow
    AfterLabel,
}

// =#========================================================================#=
// TREE PARSER
// =#========================================================================#=
/// Parser for bracketed tree descriptions.
///
/// The parser returns a tree whose statistics
/// (subtree width, depth, height) are already computed, unless configured
/// otherwise with [TreeParser::without_statistics].
///
/// # Example
/// ```
/// use treeplot::parser::TreeParser;
///
/// let tree = TreeParser::new().parse_str("( 0 ( 1 ( 2 ) ( 3 ) ) )").unwrap();
/// assert_eq!(tree.num_nodes(), 4);
/// assert_eq!(tree.root().subtree_width(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct TreeParser {
    compute_statistics: bool,
}

impl Default for TreeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParser {
    /// Creates a new `TreeParser` that computes statistics after parsing.
    pub fn new() -> Self {
        Self {
            compute_statistics: true,
        }
    }

    /// Leaves width, depth and height unset on the returned tree.
    pub fn without_statistics(mut self) -> Self {
        self.compute_statistics = false;
        self
    }

    /// Reads the file at `path` and parses its content.
    ///
    /// # Errors
    /// Returns [ParsingError::Io] if the file cannot be read,
    /// otherwise see [TreeParser::parse_str].
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<PlotTree, ParsingError> {
        let text = std::fs::read_to_string(path)?;
        self.parse_str(&text)
    }

    /// Parses a single tree description.
    ///
    /// # Errors
    /// * [ParsingError::TooShort] - fewer than 3 tokens
    ///   (or no tokens at all)
    /// * [ParsingError::MissingOpeningParen] - first token is not `(`
    /// * [ParsingError::UnexpectedToken] - token does not fit the grammar
    /// * [ParsingError::BracketMismatch] - parentheses unbalanced at end of input
    pub fn parse_str(&self, text: &str) -> Result<PlotTree, ParsingError> {
        let tokens = tokenize(text);
        debug!(num_tokens = tokens.len(), "tokenized tree description");
        self.parse_tokens(&tokens)
    }

    /// Parses a tree from an already tokenized description.
    ///
    /// See [TreeParser::parse_str] for errors.
    pub fn parse_tokens(&self, tokens: &[Token]) -> Result<PlotTree, ParsingError> {
        match tokens.first() {
            None => return Err(ParsingError::TooShort { num_tokens: 0 }),
            Some(Token::Open) => {}
            Some(other) => {
                return Err(ParsingError::MissingOpeningParen {
                    token: other.to_string(),
                });
            }
        }
        if tokens.len() < MIN_NUM_TOKENS {
            return Err(ParsingError::TooShort {
                num_tokens: tokens.len(),
            });
        }

        let mut tree = PlotTree::with_capacity(tokens.len() / 3);
        let root = match &tokens[1] {
            Token::Label(label) => tree.add_root(label.clone()),
            other => return Err(ParsingError::unexpected_token(other.to_string(), 1)),
        };

        // Node that receives new children; `None` once the root is closed
        let mut cursor: Option<NodeIndex> = Some(root);
        let mut open: i64 = 1;
        let mut state = ParseState::AfterLabel;

        for (index, token) in tokens.iter().enumerate().skip(2) {
            match (state, token, cursor) {
                // Close current node, move up to its parent
                (ParseState::AfterLabel, Token::Close, Some(current)) => {
                    cursor = tree[current].parent();
                    open -= 1;
                }
                // Surplus `)` after the root closed
                (ParseState::AfterLabel, Token::Close, None) => {
                    open -= 1;
                }
                // Open a new child subtree, label must follow
                (ParseState::AfterLabel, Token::Open, Some(_)) => {
                    state = ParseState::ExpectLabel;
                    open += 1;
                }
                // Create child and descend into it
                (ParseState::ExpectLabel, Token::Label(label), Some(current)) => {
                    cursor = Some(tree.add_child(current, label.clone()));
                    state = ParseState::AfterLabel;
                }
                _ => return Err(ParsingError::unexpected_token(token.to_string(), index)),
            }
        }

        if open != 0 {
            return Err(ParsingError::BracketMismatch { open });
        }

        if self.compute_statistics {
            tree.compute_statistics();
        }

        debug!(
            num_nodes = tree.num_nodes(),
            num_leaves = tree.num_leaves(),
            "parsed tree"
        );

        Ok(tree)
    }
}
