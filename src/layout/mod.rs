//! Layout of plotted trees.
//!
//! Assigns every node of a [PlotTree] a position such that sibling subtrees
//! never overlap horizontally. The placement is a single pre-order walk with
//! an explicit stack:
//! * a running leaf cursor counts the leaves visited so far
//! * a node is centred over the `subtree_width` leaf slots starting at the cursor
//! * a node is placed one vertical spacing per level below the root
//!
//! Children are pushed right to left so the leftmost child is visited next,
//! which numbers the leaf slots left to right. There is no iteration to a
//! fixed point: each node is visited once, and the stack never holds more
//! than the pending siblings along one root-to-leaf path.

use crate::model::{NodeIndex, PlotTree, Point};
use std::ops::Range;
use tracing::{debug, trace};

/// Default radius of a node circle.
pub const DEFAULT_NODE_RADIUS: f64 = 20.0;

/// Default horizontal distance between neighbouring leaves.
pub const DEFAULT_HORIZONTAL_SPACING: f64 = 50.0;

/// Default vertical distance between neighbouring levels.
pub const DEFAULT_VERTICAL_SPACING: f64 = 60.0;

// =#========================================================================#=
// LAYOUT CONFIG
// =#========================================================================#=
/// Dimensions used by [layout] and the edge geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Radius of a node circle; edges end on the circle boundary
    pub node_radius: f64,
    /// Width of one leaf slot
    pub horizontal_spacing: f64,
    /// Height of one level
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            node_radius: DEFAULT_NODE_RADIUS,
            horizontal_spacing: DEFAULT_HORIZONTAL_SPACING,
            vertical_spacing: DEFAULT_VERTICAL_SPACING,
        }
    }
}

impl LayoutConfig {
    /// Sets the node radius.
    pub fn with_node_radius(mut self, node_radius: f64) -> Self {
        self.node_radius = node_radius;
        self
    }

    /// Sets the horizontal spacing (width of one leaf slot).
    pub fn with_horizontal_spacing(mut self, horizontal_spacing: f64) -> Self {
        self.horizontal_spacing = horizontal_spacing;
        self
    }

    /// Sets the vertical spacing (height of one level).
    pub fn with_vertical_spacing(mut self, vertical_spacing: f64) -> Self {
        self.vertical_spacing = vertical_spacing;
        self
    }
}

// =#========================================================================#=
// PLACEMENT
// =#========================================================================#=
/// Assigns a position to every node of `tree`.
///
/// For a node with depth `d` and subtree width `w`, visited while the leaf
/// cursor stands at `c`:
/// * `x = c * horizontal_spacing + w * horizontal_spacing / 2`
/// * `y = d * vertical_spacing + vertical_spacing / 2`
///
/// Running it again on the same tree yields identical positions.
///
/// # Panics
/// Panics if the root is not set or statistics have not been computed
/// (see [PlotTree::compute_statistics]).
///
/// # Example
/// ```
/// use treeplot::layout::{layout, LayoutConfig};
/// use treeplot::parse_str;
///
/// let mut tree = parse_str("( 0 ( 1 ) ( 2 ) )").unwrap();
/// layout(&mut tree, &LayoutConfig::default());
///
/// let root = tree.root().position().unwrap();
/// assert_eq!((root.x, root.y), (50.0, 30.0));
/// ```
pub fn layout(tree: &mut PlotTree, config: &LayoutConfig) {
    let mut leaf_cursor: usize = 0;
    let mut stack: Vec<NodeIndex> = vec![tree.root_index()];

    while let Some(index) = stack.pop() {
        let node = &tree[index];
        let width = node
            .subtree_width()
            .expect("subtree width must be computed before layout");
        let depth = node
            .depth()
            .expect("depth must be computed before layout");

        let x = leaf_cursor as f64 * config.horizontal_spacing
            + (width as f64 * config.horizontal_spacing) / 2.0;
        let y = depth as f64 * config.vertical_spacing + config.vertical_spacing / 2.0;
        trace!(index, label = node.label(), x, y, "placed node");

        if node.is_leaf() {
            leaf_cursor += 1;
        }
        stack.extend(node.children().iter().rev());

        tree[index].set_position(Point::new(x, y));
    }

    debug!(
        num_nodes = tree.num_nodes(),
        num_leaf_slots = leaf_cursor,
        "laid out tree"
    );
}

/// Returns the leaf slots reserved by each node, indexed by [NodeIndex].
///
/// The slot range of a node starts at the leaf cursor when the node is
/// visited and spans its subtree width. Ranges of two nodes either nest
/// (ancestor and descendant) or are disjoint.
///
/// # Panics
/// Panics if the root is not set or subtree widths have not been computed.
pub fn leaf_slots(tree: &PlotTree) -> Vec<Range<usize>> {
    let mut slots = vec![0..0; tree.num_nodes()];
    let mut leaf_cursor: usize = 0;
    let mut stack: Vec<NodeIndex> = vec![tree.root_index()];

    while let Some(index) = stack.pop() {
        let node = &tree[index];
        let width = node
            .subtree_width()
            .expect("subtree width must be computed before computing leaf slots");
        slots[index] = leaf_cursor..leaf_cursor + width;

        if node.is_leaf() {
            leaf_cursor += 1;
        }
        stack.extend(node.children().iter().rev());
    }

    slots
}

// =#========================================================================#=
// GEOMETRY
// =#========================================================================#=
/// Returns the edge from `index`'s parent to `index` as `(start, end)`.
///
/// The edge runs from the bottom of the parent's circle to the top of the
/// node's circle. Returns `None` for the root or if either node has no
/// position yet.
pub fn edge_endpoints(tree: &PlotTree, index: NodeIndex, node_radius: f64) -> Option<(Point, Point)> {
    let node = &tree[index];
    let parent = tree[node.parent()?].position()?;
    let child = node.position()?;

    Some((
        Point::new(parent.x, parent.y + node_radius),
        Point::new(child.x, child.y - node_radius),
    ))
}

/// Extent of a laid-out tree, measured from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

/// Returns the smallest box from the origin containing every node circle,
/// i.e. the maximum of `x + radius` and `y + radius` over all positioned nodes.
///
/// Nodes without position are ignored; a tree without any positioned node
/// yields an empty box.
pub fn bounding_box(tree: &PlotTree, node_radius: f64) -> BoundingBox {
    tree.nodes()
        .iter()
        .filter_map(|n| n.position())
        .fold(BoundingBox::default(), |bb, p| BoundingBox {
            width: bb.width.max(p.x + node_radius),
            height: bb.height.max(p.y + node_radius),
        })
}
