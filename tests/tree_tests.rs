use std::io;
use treeplot::model::{PlotTree, Point};
use treeplot::parse_str;

fn build_sample_tree() -> PlotTree {
    // ( a ( b ( d ) ( e ) ) ( c ) )
    let mut tree = PlotTree::new();
    let a = tree.add_root("a".to_string());
    let b = tree.add_child(a, "b".to_string());
    tree.add_child(a, "c".to_string());
    tree.add_child(b, "d".to_string());
    tree.add_child(b, "e".to_string());
    tree
}

#[test]
fn test_building_tree() {
    let mut tree = build_sample_tree();

    // Counts
    assert_eq!(tree.num_nodes(), 5);
    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(tree.num_internal(), 2);
    assert!(tree.is_valid());

    // Root
    let root = tree.root();
    assert_eq!(root.index(), tree.root_index());
    assert!(root.is_root());
    assert_eq!(root.children(), &[1, 2]);

    // Statistics are only set on request
    assert!(!tree.has_statistics());
    tree.compute_statistics();
    assert!(tree.has_statistics());
    assert_eq!(tree.root().subtree_width(), Some(3));
    assert_eq!(tree.root().height(), Some(3));
    assert_eq!(tree[3].depth(), Some(2));
    assert_eq!(tree.max_depth(), Some(2));
}

#[test]
fn test_compute_statistics_twice() {
    let mut tree = build_sample_tree();
    tree.compute_statistics();
    let first = tree.clone();
    tree.compute_statistics();
    assert_eq!(tree.nodes(), first.nodes());
}

#[test]
fn test_pre_order_iter() {
    let tree = build_sample_tree();
    let labels: Vec<_> = tree.pre_order_iter().map(|n| n.label()).collect();
    assert_eq!(labels, ["a", "b", "d", "e", "c"]);
}

#[test]
fn test_post_order_iter() {
    let tree = build_sample_tree();
    let labels: Vec<_> = tree.post_order_iter().map(|n| n.label()).collect();
    assert_eq!(labels, ["d", "e", "b", "c", "a"]);
}

#[test]
fn test_iterators_on_empty_tree() {
    let tree = PlotTree::new();
    assert_eq!(tree.pre_order_iter().count(), 0);
    assert_eq!(tree.post_order_iter().count(), 0);
    assert!(!tree.is_valid());
    assert!(!tree.has_statistics());
}

#[test]
#[should_panic]
fn test_get_root_panics_on_empty_tree() {
    let tree = PlotTree::new();
    tree.root(); // Should panic
}

#[test]
#[should_panic]
fn test_second_root_panics() {
    let mut tree = build_sample_tree();
    tree.add_root("z".to_string());
}

#[test]
#[should_panic]
fn test_get_node_out_of_bounds() {
    let tree = build_sample_tree();
    let _ = &tree[55];
}

#[test]
fn test_point_distance() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance_to(&b), 5.0);
}

#[test]
fn test_print_tree_smoke() {
    let mut tree = build_sample_tree();
    tree.print_tree();
    tree.compute_statistics();
    tree.print_tree();
    PlotTree::new().print_tree();
}

#[test]
fn test_write_tree_output() {
    let tree = parse_str("( 0 ( 1 ( 2 ) ( 3 ) ) )").unwrap();
    let mut buffer = Vec::new();
    tree.write_tree(&mut buffer).unwrap();

    let expected = "\
Tree with 4 nodes (2 leaves):
[0] \"0\" (width 2, depth 0, height 3)
  └─ [1] \"1\" (width 2, depth 1, height 2)
      ├─ [2] \"2\" (width 1, depth 2, height 1)
      └─ [3] \"3\" (width 1, depth 2, height 1)
";
    assert_eq!(String::from_utf8(buffer).unwrap(), expected);
}

#[test]
fn test_write_tree_without_statistics_or_root() {
    let mut buffer = Vec::new();
    build_sample_tree().write_tree(&mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text.lines().count(), 6);
    assert!(text.lines().skip(1).all(|l| l.ends_with("(no statistics)")));

    let mut buffer = Vec::new();
    PlotTree::new().write_tree(&mut buffer).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "Tree with 0 nodes (0 leaves):\n(No root set)\n"
    );
}

#[test]
fn test_write_deep_tree() {
    let depth = 20_000;
    let text = format!("{}{}", "( n ".repeat(depth), ")".repeat(depth));
    let tree = parse_str(text).unwrap();
    tree.write_tree(io::sink()).unwrap();
}
