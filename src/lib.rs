//! Treeplot is a library to plot trees given as bracketed text as SVG.
//!
//! A tree is described by the grammar `T = ( <label> T* )`, for example
//! `( 0 ( 1 ( 2 ) ( 3 ) ) )` is a root `0` with one child `1`, which has
//! the two children `2` and `3`. Core functionality provided:
//! - Parser: Turn a description into a [PlotTree] with subtree widths,
//!   depths and heights computed. See [crate::parser].
//! - Layout: Place every node such that sibling subtrees never overlap,
//!   in a single pre-order pass driven by subtree widths. See [crate::layout].
//! - Render: Draw a circle and a centred label per node and a line per edge
//!   into an SVG [Drawing](svg::Drawing). See [crate::render].
//! - Writer: Turn a tree back into its bracketed description.
//!
//! Trees use the arena pattern, so nodes only refer to each other by index.
//! See [crate::model] for details.
//!
//! # Usage patterns
//! 1. [plot_file] runs the whole pipeline with default settings and writes
//!    `<input>.svg` next to the input file; [plot_str] does the same for a
//!    string and returns the SVG document.
//! 2. Run the steps yourself for control over spacing and style:
//!
//! ```
//! use treeplot::layout::{layout, LayoutConfig};
//! use treeplot::render::{render, RenderStyle};
//!
//! let mut tree = treeplot::parse_str("( 0 ( 1 ( 2 ) ( 3 ) ) )")?;
//! let config = LayoutConfig::default().with_horizontal_spacing(80.0);
//! layout(&mut tree, &config);
//! let drawing = render(&tree, &RenderStyle::from_layout(&config));
//! // Rightmost leaf centred at 120, plus the circle radius
//! assert_eq!(drawing.width(), 140.0);
//! # Ok::<(), treeplot::parser::ParsingError>(())
//! ```

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod svg;
pub mod writer;

use crate::layout::LayoutConfig;
use crate::model::PlotTree;
use crate::parser::{ParsingError, TreeParser};
use crate::render::RenderStyle;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use crate::error::PlotError;

/// Suffix appended to the input path to obtain the output path
pub const OUTPUT_SUFFIX: &str = ".svg";

// ============================================================================
// Quick parsing API
// ============================================================================
/// Parses a tree description using default settings.
///
/// The returned tree has subtree widths, depths and heights computed.
///
/// # Example
/// ```
/// let tree = treeplot::parse_str("( 0 ( 1 ) ( 2 ) )").unwrap();
/// assert_eq!(tree.num_leaves(), 2);
/// ```
pub fn parse_str<S: AsRef<str>>(text: S) -> Result<PlotTree, ParsingError> {
    TreeParser::new().parse_str(text.as_ref())
}

/// Reads and parses a file containing one tree description.
///
/// See [parse_str].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PlotTree, ParsingError> {
    TreeParser::new().parse_file(path)
}

// ============================================================================
// Quick plotting API
// ============================================================================
/// Parses, lays out and renders `text` with default settings,
/// returning the SVG document.
///
/// # Example
/// ```
/// let svg = treeplot::plot_str("( 0 )").unwrap();
/// assert_eq!(svg.matches("<circle").count(), 1);
/// assert_eq!(svg.matches("<line").count(), 0);
/// ```
pub fn plot_str<S: AsRef<str>>(text: S) -> Result<String, ParsingError> {
    let mut tree = parse_str(text)?;
    Ok(plot_tree(&mut tree).to_svg_string())
}

/// Lays out and renders a parsed tree with default settings.
pub fn plot_tree(tree: &mut PlotTree) -> svg::Drawing {
    let config = LayoutConfig::default();
    layout::layout(tree, &config);
    render::render(tree, &RenderStyle::from_layout(&config))
}

/// Plots the tree described in the file at `input` and writes the SVG
/// document to [output_path]`(input)`, which gets returned.
///
/// Nothing is written if reading or parsing the input fails.
///
/// # Errors
/// * [PlotError::Parse] - input cannot be read or is no valid tree
/// * [PlotError::Io] - output cannot be written
pub fn plot_file<P: AsRef<Path>>(input: P) -> Result<PathBuf, PlotError> {
    let input = input.as_ref();
    let mut tree = parse_file(input)?;
    let drawing = plot_tree(&mut tree);

    let output = output_path(input);
    render::write_svg_file(&output, &drawing)?;
    Ok(output)
}

/// Returns `input` with [OUTPUT_SUFFIX] appended, e.g. `tree.txt` → `tree.txt.svg`.
pub fn output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let mut output = OsString::from(input.as_ref().as_os_str());
    output.push(OUTPUT_SUFFIX);
    PathBuf::from(output)
}
