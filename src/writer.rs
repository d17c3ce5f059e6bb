//! Writing trees back into the bracketed text format.

use crate::model::{NodeIndex, PlotTree};
use crate::parser::tokenizer::is_label;

/// Extra buffer in string length/capacity estimate
const BUFFER_CHARS: usize = 10;

/// Returns the canonical bracketed representation of `tree`.
///
/// Every token is separated by a single space. If every label satisfies
/// [is_label], as is the case for any tree returned by the parser, parsing
/// the result yields a tree of the same shape and labels. Labels added with
/// [PlotTree::add_root] or [PlotTree::add_child] that are empty or contain
/// whitespace or parentheses are written as is and do not survive a round
/// trip; check them with [all_labels_writable].
///
/// # Example
/// ```
/// use treeplot::parse_str;
/// use treeplot::writer::to_bracket_string;
///
/// let tree = parse_str("(0(1(2)(3)))").unwrap();
/// assert_eq!(to_bracket_string(&tree), "( 0 ( 1 ( 2 ) ( 3 ) ) )");
/// ```
///
/// # Panics
/// Panics if the root hasn't been set.
pub fn to_bracket_string(tree: &PlotTree) -> String {
    // Each node contributes "( ", its label, and " )" plus a separating space
    let label_chars: usize = tree.nodes().iter().map(|n| n.label().len()).sum();
    let estimated_capacity = label_chars + 5 * tree.num_nodes() + BUFFER_CHARS;
    let mut text = String::with_capacity(estimated_capacity);

    // (index, closing); closing entries emit the `)` after all children
    let mut stack: Vec<(NodeIndex, bool)> = vec![(tree.root_index(), false)];
    while let Some((index, closing)) = stack.pop() {
        if closing {
            text.push_str(" )");
            continue;
        }

        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str("( ");
        text.push_str(tree[index].label());

        stack.push((index, true));
        for &child in tree[index].children().iter().rev() {
            stack.push((child, false));
        }
    }

    text
}

/// Returns `true` if every label of `tree` satisfies [is_label], so that
/// [to_bracket_string] output parses back to the same tree.
pub fn all_labels_writable(tree: &PlotTree) -> bool {
    tree.nodes().iter().all(|n| is_label(n.label()))
}
