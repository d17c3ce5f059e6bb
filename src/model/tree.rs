//! Tree module for plotted tree representation.
//!
//! This module provides the core data structure:
//! - [PlotTree]: an unranked, ordered tree using the arena pattern.
//! - [NodeIndex] is used to index nodes.
//! - [PreOrderIter] and [PostOrderIter] traverse without recursion.

use crate::model::node::TreeNode;
use std::io::{self, BufWriter, Write};

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: NodeIndex = usize::MAX;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// An ordered tree with arbitrary branching, represented using the arena
/// pattern on [TreeNode].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// A parent owns its children through the list of their indices, children
/// refer back to their parent by index only.
///
/// # Structure
/// - All nodes are stored in the arena, in order of creation
/// - Index of root is maintained
/// - Sibling order is the order in which children were added
/// - Nodes are never removed or reparented
///
/// # Construction
/// Add the root first with [PlotTree::add_root], then attach children with
/// [PlotTree::add_child]. Afterwards call [PlotTree::compute_statistics]
/// before handing the tree to [layout](crate::layout::layout).
/// Test validity with [PlotTree::is_valid].
///
/// # Example
/// ```
/// use treeplot::model::PlotTree;
///
/// // ( 0 ( 1 ( 2 ) ( 3 ) ) )
/// let mut tree = PlotTree::new();
/// let root = tree.add_root("0".to_string());
/// let one = tree.add_child(root, "1".to_string());
/// tree.add_child(one, "2".to_string());
/// tree.add_child(one, "3".to_string());
/// tree.compute_statistics();
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.root().subtree_width(), Some(2));
/// assert_eq!(tree.root().height(), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct PlotTree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<TreeNode>,

    /// Index of the root of this tree
    root_index: NodeIndex,
}

impl Default for PlotTree {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl PlotTree {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty tree with room for `num_nodes` nodes.
    pub fn with_capacity(num_nodes: usize) -> Self {
        PlotTree {
            nodes: Vec::with_capacity(num_nodes),
            root_index: NO_ROOT_SET_INDEX,
        }
    }

    /// Adds the root to the tree, assigning a unique index, which gets returned.
    ///
    /// # Panics
    /// Panics if a root has already been added.
    pub fn add_root(&mut self, label: String) -> NodeIndex {
        assert!(!self.is_root_set(), "Tree already has a root");
        let index = self.nodes.len();
        self.nodes.push(TreeNode::new(index, label, None));
        self.root_index = index;
        index
    }

    /// Adds a node as last child of `parent`, assigning a unique index, which gets returned.
    ///
    /// # Arguments
    /// * `parent` - Index of the node the new node gets attached to
    /// * `label` - Label of the new node
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds.
    pub fn add_child(&mut self, parent: NodeIndex, label: String) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes[parent].push_child(index);
        self.nodes.push(TreeNode::new(index, label, Some(parent)));
        index
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns the index of the root.
    ///
    /// # Panics
    /// Panics if the root hasn't been set.
    pub fn root_index(&self) -> NodeIndex {
        assert!(self.is_root_set(), "Tree has no root");
        self.root_index
    }

    /// Returns a reference to the root node.
    ///
    /// # Panics
    /// Panics if the root hasn't been set and thus tree hasn't been constructed yet.
    pub fn root(&self) -> &TreeNode {
        &self[self.root_index]
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &TreeNode {
        &self[index]
    }

    /// Returns all nodes in arena order.
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Returns the number of non-leaf nodes in this tree (root included).
    pub fn num_internal(&self) -> usize {
        self.nodes.len() - self.num_leaves()
    }

    /// Returns the largest node depth, or `None` if depths are not computed.
    pub fn max_depth(&self) -> Option<usize> {
        self.nodes.iter().map(TreeNode::depth).max().flatten()
    }

    /// Returns `true` if every node carries width, depth and height.
    pub fn has_statistics(&self) -> bool {
        self.is_root_set() && self.nodes.iter().all(TreeNode::has_statistics)
    }

    /// Returns `true` if every node has been given a position.
    pub fn is_laid_out(&self) -> bool {
        self.is_root_set() && self.nodes.iter().all(|n| n.position().is_some())
    }

    /// Computes subtree width, height and depth of every node.
    ///
    /// - Subtree width (post-order): a leaf has width 1,
    ///   an internal node the sum of its children's widths.
    /// - Height (post-order): a leaf has height 1,
    ///   an internal node 1 + the maximum of its children's heights.
    /// - Depth (pre-order): the root has depth 0, a child its parent's depth + 1.
    ///
    /// Calling this again yields the same values.
    ///
    /// # Panics
    /// Panics if the root hasn't been set.
    pub fn compute_statistics(&mut self) {
        assert!(self.is_root_set(), "Cannot compute statistics without root");

        let post_order: Vec<NodeIndex> = self.post_order_iter().map(TreeNode::index).collect();
        for index in post_order {
            let (width, height) = if self[index].is_leaf() {
                (1, 1)
            } else {
                let children = self[index].children();
                let width = children
                    .iter()
                    .map(|&c| self.nodes[c].subtree_width().unwrap_or(0))
                    .sum();
                let height = children
                    .iter()
                    .map(|&c| self.nodes[c].height().unwrap_or(0))
                    .max()
                    .unwrap_or(0)
                    + 1;
                (width, height)
            };
            self.nodes[index].set_subtree_width(width);
            self.nodes[index].set_height(height);
        }

        let pre_order: Vec<NodeIndex> = self.pre_order_iter().map(TreeNode::index).collect();
        for index in pre_order {
            let depth = match self[index].parent() {
                None => 0,
                Some(parent) => self.nodes[parent].depth().unwrap_or(0) + 1,
            };
            self.nodes[index].set_depth(depth);
        }
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is valid and points to the only node without parent
    /// - All node indices match their position in the arena
    /// - All child indices are valid and point back to correct parent
    /// - Each non-root node appears exactly once among its parent's children
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        // Check root index is set and within bounds
        if !self.is_root_set() || self.root_index >= self.nodes.len() {
            return false;
        }

        // Check root has no parent
        if !self.nodes[self.root_index].is_root() {
            return false;
        }

        for (index, node) in self.nodes.iter().enumerate() {
            // Check node index matches its arena position
            if node.index() != index {
                return false;
            }

            // Check children references
            for &child in node.children() {
                if child >= self.nodes.len() || self.nodes[child].parent() != Some(index) {
                    return false;
                }
            }

            // Check parent references
            match node.parent() {
                None => {
                    if index != self.root_index {
                        return false;
                    }
                }
                Some(parent) => {
                    if parent >= self.nodes.len() {
                        return false;
                    }
                    let occurrences = self.nodes[parent]
                        .children()
                        .iter()
                        .filter(|&&c| c == index)
                        .count();
                    if occurrences != 1 {
                        return false;
                    }
                }
            }
        }

        true
    }
}

impl std::ops::Index<NodeIndex> for PlotTree {
    type Output = TreeNode;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

impl std::ops::IndexMut<NodeIndex> for PlotTree {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
impl PlotTree {
    /// Prints a visual representation of the tree to the console.
    ///
    /// See [PlotTree::write_tree] for the format.
    ///
    /// # Panics
    /// Panics if writing to stdout fails, like [println!].
    pub fn print_tree(&self) {
        let stdout = io::stdout();
        self.write_tree(BufWriter::new(stdout.lock()))
            .expect("failed printing to stdout");
    }

    /// Writes a visual representation of the tree to `writer`.
    ///
    /// Nodes are written in pre-order with an explicit stack,
    /// so arbitrarily deep trees can be written.
    ///
    /// # Example Output
    /// ```text
    /// Tree with 4 nodes (2 leaves):
    /// [0] "0" (width 2, depth 0, height 3)
    ///   └─ [1] "1" (width 2, depth 1, height 2)
    ///       ├─ [2] "2" (width 1, depth 2, height 1)
    ///       └─ [3] "3" (width 1, depth 2, height 1)
    /// ```
    ///
    /// # Errors
    /// Returns an I/O error if writing fails.
    pub fn write_tree<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(
            writer,
            "Tree with {} nodes ({} leaves):",
            self.num_nodes(),
            self.num_leaves()
        )?;

        if !self.is_root_set() {
            writeln!(writer, "(No root set)")?;
            return writer.flush();
        }

        // (index, prefix, is_last child of its parent)
        let mut stack: Vec<(NodeIndex, String, bool)> = vec![(self.root_index, String::new(), true)];
        while let Some((index, prefix, is_last)) = stack.pop() {
            let node = &self.nodes[index];

            let connector = if node.is_root() {
                ""
            } else if is_last {
                "└─ "
            } else {
                "├─ "
            };

            let stats = match (node.subtree_width(), node.depth(), node.height()) {
                (Some(w), Some(d), Some(h)) => format!("(width {w}, depth {d}, height {h})"),
                _ => "(no statistics)".to_string(),
            };

            writeln!(
                writer,
                "{prefix}{connector}[{index}] \"{}\" {stats}",
                node.label()
            )?;

            let child_prefix = if node.is_root() {
                "  ".to_string()
            } else {
                format!("{prefix}{}   ", if is_last { " " } else { "│" })
            };

            // Rightmost first, so leftmost is written next
            let num_children = node.children().len();
            for (i, &child) in node.children().iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), i + 1 == num_children));
            }
        }

        writer.flush()
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
impl PlotTree {
    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// Post-order traversal visits each node's children before visiting the node itself.
    /// This is useful for aggregating data from leaves upward, such as widths and heights.
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Pre-order traversal visits each node before visiting its children,
    /// leftmost child first. This is useful for propagating data from root
    /// to leaves, such as depths and positions.
    ///
    /// # Example
    /// ```
    /// use treeplot::parse_str;
    ///
    /// let tree = parse_str("( a ( b ( c ) ) ( d ) )").unwrap();
    /// let labels: Vec<_> = tree.pre_order_iter().map(|n| n.label()).collect();
    /// assert_eq!(labels, ["a", "b", "c", "d"]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited after all its descendants have been visited.
pub struct PostOrderIter<'a> {
    tree: &'a PlotTree,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a PlotTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push((tree.root_index, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.tree[index];

            if children_visited || node.is_leaf() {
                // Either we've already processed children, or this is a leaf
                return Some(node);
            }

            // Mark this node as "children will be visited"
            self.stack.push((index, true));

            // Push children (rightmost first, so leftmost is processed first)
            for &child in node.children().iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited before any of its descendants.
pub struct PreOrderIter<'a> {
    tree: &'a PlotTree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a PlotTree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push(tree.root_index);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        // Push children onto stack (rightmost first, so leftmost is processed first)
        self.stack.extend(node.children().iter().rev());

        Some(node)
    }
}
