use treeplot::layout::{LayoutConfig, bounding_box, edge_endpoints, layout, leaf_slots};
use treeplot::model::{PlotTree, Point};
use treeplot::parse_str;

/// Float comparison tolerance
const EPSILON: f64 = 1e-9;

const INPUTS: &[&str] = &[
    "( 0 )",
    "( 0 ( 1 ( 2 ) ( 3 ) ) )",
    "( a ( b ) ( c ( d ) ( e ) ( f ) ) ( g ( h ( i ) ) ) )",
    "( r ( x ( x1 ) ( x2 ( x3 ) ( x4 ) ) ) ( y ) ( z ( z1 ) ) )",
];

fn laid_out(input: &str) -> PlotTree {
    let mut tree = parse_str(input).unwrap();
    layout(&mut tree, &LayoutConfig::default());
    tree
}

fn position(tree: &PlotTree, index: usize) -> Point {
    tree[index].position().unwrap()
}

fn is_ancestor(tree: &PlotTree, ancestor: usize, mut node: usize) -> bool {
    while let Some(parent) = tree[node].parent() {
        if parent == ancestor {
            return true;
        }
        node = parent;
    }
    false
}

// --- TESTS PLACEMENT ---
#[test]
fn test_single_node_position() {
    let tree = laid_out("( 0 )");
    assert_eq!(position(&tree, 0), Point::new(25.0, 30.0));
}

#[test]
fn test_two_leaves() {
    let tree = laid_out("( 0 ( 1 ) ( 2 ) )");
    let root = position(&tree, 0);
    let one = position(&tree, 1);
    let two = position(&tree, 2);

    assert_eq!(root, Point::new(50.0, 30.0));
    assert_eq!(one, Point::new(25.0, 90.0));
    assert_eq!(two, Point::new(75.0, 90.0));
    assert!(one.x < two.x);
}

#[test]
fn test_internal_node_centred_over_its_leaves() {
    let tree = laid_out("( 0 ( 1 ( 2 ) ( 3 ) ) )");
    // Only child with two leaves: same slot range as the root
    assert_eq!(position(&tree, 0).x, 50.0);
    assert_eq!(position(&tree, 1).x, 50.0);
    assert_eq!(position(&tree, 2).x, 25.0);
    assert_eq!(position(&tree, 3).x, 75.0);
    assert_eq!(position(&tree, 3).y, 150.0);
}

#[test]
fn test_custom_spacing() {
    let mut tree = parse_str("( 0 ( 1 ) ( 2 ) ( 3 ) )").unwrap();
    let config = LayoutConfig::default()
        .with_horizontal_spacing(10.0)
        .with_vertical_spacing(100.0);
    layout(&mut tree, &config);

    assert_eq!(position(&tree, 0), Point::new(15.0, 50.0));
    assert_eq!(position(&tree, 1), Point::new(5.0, 150.0));
    assert_eq!(position(&tree, 3), Point::new(25.0, 150.0));
}

#[test]
fn test_every_node_positioned() {
    for input in INPUTS {
        let tree = laid_out(input);
        assert!(tree.is_laid_out(), "missing positions for {input}");
    }
}

#[test]
fn test_y_follows_depth() {
    let config = LayoutConfig::default();
    for input in INPUTS {
        let tree = laid_out(input);
        for node in tree.nodes() {
            let depth = node.depth().unwrap() as f64;
            let expected = depth * config.vertical_spacing + config.vertical_spacing / 2.0;
            assert_eq!(node.position().unwrap().y, expected);
        }
    }
}

#[test]
fn test_idempotent() {
    for input in INPUTS {
        let mut tree = laid_out(input);
        let first: Vec<_> = tree.nodes().iter().map(|n| n.position()).collect();
        layout(&mut tree, &LayoutConfig::default());
        let second: Vec<_> = tree.nodes().iter().map(|n| n.position()).collect();
        assert_eq!(first, second);
    }
}

#[test]
fn test_deep_tree() {
    let depth = 20_000;
    let text = format!("{}{}", "( n ".repeat(depth), ")".repeat(depth));
    let mut tree = parse_str(text).unwrap();
    layout(&mut tree, &LayoutConfig::default());

    let deepest = tree.nodes().last().unwrap().position().unwrap();
    assert_eq!(deepest.x, 25.0);
    assert_eq!(deepest.y, (depth - 1) as f64 * 60.0 + 30.0);
}

#[test]
#[should_panic]
fn test_layout_without_statistics_panics() {
    let mut tree = PlotTree::new();
    tree.add_root("r".to_string());
    layout(&mut tree, &LayoutConfig::default());
}

// --- TESTS LEAF SLOTS ---
#[test]
fn test_leaf_slots_of_siblings_are_disjoint() {
    for input in INPUTS {
        let tree = parse_str(input).unwrap();
        let slots = leaf_slots(&tree);

        for a in 0..tree.num_nodes() {
            assert_eq!(slots[a].len(), tree[a].subtree_width().unwrap());
            for b in 0..tree.num_nodes() {
                if a == b || is_ancestor(&tree, a, b) || is_ancestor(&tree, b, a) {
                    continue;
                }
                let disjoint = slots[a].end <= slots[b].start || slots[b].end <= slots[a].start;
                assert!(disjoint, "{input}: {:?} and {:?} overlap", slots[a], slots[b]);
            }
        }
    }
}

#[test]
fn test_leaf_slots_nest_for_descendants() {
    for input in INPUTS {
        let tree = parse_str(input).unwrap();
        let slots = leaf_slots(&tree);
        for node in tree.nodes() {
            if let Some(parent) = node.parent() {
                let own = &slots[node.index()];
                assert!(slots[parent].start <= own.start && own.end <= slots[parent].end);
            }
        }
        assert_eq!(slots[tree.root_index()], 0..tree.num_leaves());
    }
}

#[test]
fn test_x_is_centre_of_leaf_slots() {
    let config = LayoutConfig::default();
    for input in INPUTS {
        let tree = laid_out(input);
        let slots = leaf_slots(&tree);
        for node in tree.nodes() {
            let range = &slots[node.index()];
            let centre = (range.start + range.end) as f64 / 2.0 * config.horizontal_spacing;
            assert!((node.position().unwrap().x - centre).abs() < EPSILON);
        }
    }
}

// --- TESTS GEOMETRY ---
#[test]
fn test_edge_endpoints_touch_circles() {
    let radius = LayoutConfig::default().node_radius;
    let tree = laid_out("( 0 ( 1 ) ( 2 ) )");
    let root = position(&tree, 0);

    assert_eq!(edge_endpoints(&tree, 0, radius), None);
    for child in [1, 2] {
        let (start, end) = edge_endpoints(&tree, child, radius).unwrap();
        assert!((start.distance_to(&root) - radius).abs() < EPSILON);
        assert!((end.distance_to(&position(&tree, child)) - radius).abs() < EPSILON);
        assert_eq!(start, Point::new(root.x, root.y + radius));
    }
}

#[test]
fn test_edge_endpoints_before_layout() {
    let tree = parse_str("( 0 ( 1 ) )").unwrap();
    assert_eq!(edge_endpoints(&tree, 1, 20.0), None);
}

#[test]
fn test_bounding_box() {
    let tree = laid_out("( 0 ( 1 ( 2 ) ( 3 ) ) )");
    let bb = bounding_box(&tree, 20.0);
    assert_eq!(bb.width, 95.0);
    assert_eq!(bb.height, 170.0);

    let unplaced = parse_str("( 0 )").unwrap();
    assert_eq!(bounding_box(&unplaced, 20.0).width, 0.0);
}
