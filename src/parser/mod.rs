//! Parser for bracketed tree descriptions.
//!
//! This module turns text of the form `( label child* )` into a
//! [PlotTree](crate::model::PlotTree): the [tokenizer] splits the text,
//! the [TreeParser] builds the tree and computes its statistics.

pub mod parsing_error;
pub mod tokenizer;
pub mod tree_parser;

pub use parsing_error::ParsingError;
pub use tokenizer::{Token, is_label, tokenize};
pub use tree_parser::TreeParser;
