//! Node module for plotted tree representation.

use crate::model::tree::NodeIndex;

// =#========================================================================#=
// POINT
// =#========================================================================#=
/// A position in drawing coordinates (origin top-left, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Returns the Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// =#========================================================================#=
// TREE NODE
// =#========================================================================#=
/// Represents a node of a [PlotTree](crate::model::PlotTree).
///
/// A node is created during parsing with its label and parent, gets its
/// children appended while the parser descends, is then decorated by
/// [`PlotTree::compute_statistics`](crate::model::PlotTree::compute_statistics)
/// and finally receives its position from [layout](crate::layout::layout).
///
/// # Invariants
/// - `index` is index in arena
/// - `parent` is `None` exactly for the root; set once at attachment time
/// - `children` keep the order of appearance in the source text
/// - `subtree_width`, `depth` and `height` are `None` until statistics are
///   computed, `position` is `None` until layout ran
#[derive(PartialEq, Debug, Clone)]
pub struct TreeNode {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Literal label token; not necessarily unique
    label: String,
    /// Index of the parent node, `None` for the root
    parent: Option<NodeIndex>,
    /// Indices of the child nodes, left to right
    children: Vec<NodeIndex>,
    /// Number of leaves in the subtree rooted here
    subtree_width: Option<usize>,
    /// Number of edges from the root
    depth: Option<usize>,
    /// Levels on the longest downward path, a leaf counting as 1
    height: Option<usize>,
    /// Final plotting coordinates
    position: Option<Point>,
}

impl TreeNode {
    /// Creates a new undecorated node.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `label` - The label text of this node
    /// * `parent` - Index of the parent, `None` for the root
    pub fn new(index: NodeIndex, label: String, parent: Option<NodeIndex>) -> Self {
        TreeNode {
            index,
            label,
            parent,
            children: Vec::new(),
            subtree_width: None,
            depth: None,
            height: None,
            position: None,
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the label of this node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns the child indices in left-to-right order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the subtree width, or `None` if statistics are not computed yet.
    pub fn subtree_width(&self) -> Option<usize> {
        self.subtree_width
    }

    /// Returns the depth, or `None` if statistics are not computed yet.
    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    /// Returns the height, or `None` if statistics are not computed yet.
    pub fn height(&self) -> Option<usize> {
        self.height
    }

    /// Returns the plotting position, or `None` if layout has not run yet.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Returns `true` if width, depth and height are all set.
    pub fn has_statistics(&self) -> bool {
        self.subtree_width.is_some() && self.depth.is_some() && self.height.is_some()
    }

    pub(crate) fn push_child(&mut self, child: NodeIndex) {
        self.children.push(child);
    }

    pub(crate) fn set_subtree_width(&mut self, width: usize) {
        self.subtree_width = Some(width);
    }

    pub(crate) fn set_depth(&mut self, depth: usize) {
        self.depth = Some(depth);
    }

    pub(crate) fn set_height(&mut self, height: usize) {
        self.height = Some(height);
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = Some(position);
    }
}
