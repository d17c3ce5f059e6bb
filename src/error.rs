//! Error type of the full parse, layout and render pipeline.

use crate::parser::ParsingError;
use thiserror::Error;

/// Errors that can end a plotting run.
///
/// Layout and rendering do not fail on a parsed tree, so only usage,
/// parsing and I/O problems surface here.
#[derive(Debug, Error)]
pub enum PlotError {
    /// No input file given.
    #[error("Specify input file name")]
    Usage,

    /// Input is not a valid tree description.
    #[error(transparent)]
    Parse(#[from] ParsingError),

    /// Writing the output failed.
    #[error("IO error - {0}")]
    Io(#[from] std::io::Error),
}
