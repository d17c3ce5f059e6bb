//! Data model for plotted trees.
//!
//! # Tree representation
//! Trees are represented by [PlotTree], which uses the arena pattern to store
//! [TreeNode]s referenced by [NodeIndex]. Each node owns the ordered list of
//! its children's indices and refers back to its parent by index, so there
//! are no reference cycles and no shared ownership.
//!
//! # Decoration
//! Nodes are decorated in place in two steps:
//! 1. [PlotTree::compute_statistics] sets subtree width, depth and height
//!    (the parser does this before returning a tree).
//! 2. [layout](crate::layout::layout) sets the [Point] position of each node.
//!
//! Each decoration is `None` until its step ran.

pub mod node;
pub mod tree;

pub use node::{Point, TreeNode};
pub use tree::{NodeIndex, PlotTree, PostOrderIter, PreOrderIter};
