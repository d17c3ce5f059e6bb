//! Rendering of laid-out trees into SVG.
//!
//! [render] walks the tree in pre-order and emits, per node, the edge to its
//! parent (non-root nodes only), the node circle and the centred label.
//! Coordinates come from [layout](crate::layout::layout) and are not
//! changed here; the traversal order only decides the paint order.

use crate::layout::{DEFAULT_NODE_RADIUS, LayoutConfig, bounding_box, edge_endpoints};
use crate::model::PlotTree;
use crate::svg::{Drawing, Stroke};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Fill color of node circles
pub const DEFAULT_NODE_FILL: &str = "#b0b0b0";

/// Stroke color of node circles and edges
pub const DEFAULT_STROKE_COLOR: &str = "black";

/// Stroke width of node circles and edges
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Font size of node labels
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

// =#========================================================================#=
// RENDER STYLE
// =#========================================================================#=
/// Fixed styling of rendered trees.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub node_radius: f64,
    pub node_fill: String,
    pub node_stroke: Stroke,
    pub edge_stroke: Stroke,
    pub font_size: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            node_radius: DEFAULT_NODE_RADIUS,
            node_fill: DEFAULT_NODE_FILL.to_string(),
            node_stroke: Stroke::new(DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH),
            edge_stroke: Stroke::new(DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl RenderStyle {
    /// Default style with the circle radius taken from `config`,
    /// so edges end exactly on the drawn circles.
    pub fn from_layout(config: &LayoutConfig) -> Self {
        Self::default().with_node_radius(config.node_radius)
    }

    /// Sets the node circle radius.
    pub fn with_node_radius(mut self, node_radius: f64) -> Self {
        self.node_radius = node_radius;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

// =#========================================================================#=
// RENDER
// =#========================================================================#=
/// Renders a laid-out tree into a [Drawing].
///
/// The canvas spans the [bounding box](crate::layout::bounding_box) of all
/// node circles. Per node, in pre-order:
/// 1. a line from the parent's circle bottom to this circle's top (non-root only)
/// 2. a filled circle centred on the node position
/// 3. the node label centred on the node position
///
/// # Panics
/// Panics if the tree has no root or has not been laid out.
pub fn render(tree: &PlotTree, style: &RenderStyle) -> Drawing {
    assert!(tree.is_laid_out(), "Tree must be laid out before rendering");

    let bounds = bounding_box(tree, style.node_radius);
    let mut drawing = Drawing::new(bounds.width, bounds.height);

    for node in tree.pre_order_iter() {
        if let Some((start, end)) = edge_endpoints(tree, node.index(), style.node_radius) {
            drawing.add_line(start.x, start.y, end.x, end.y, style.edge_stroke.clone());
        }

        let center = node
            .position()
            .expect("every node is positioned after layout");
        drawing.add_circle(
            center.x,
            center.y,
            style.node_radius,
            style.node_fill.as_str(),
            style.node_stroke.clone(),
        );
        drawing.add_text(center.x, center.y, style.font_size, node.label());
    }

    debug!(
        num_elements = drawing.elements().len(),
        width = bounds.width,
        height = bounds.height,
        "rendered tree"
    );

    drawing
}

/// Writes `drawing` as SVG to a newly created (or truncated) file at `path`.
///
/// The document is serialized before the file is created,
/// so a failing caller never leaves a partial file behind.
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn write_svg_file<P: AsRef<Path>>(path: P, drawing: &Drawing) -> io::Result<()> {
    let path = path.as_ref();
    let svg = drawing.to_svg_string();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(svg.as_bytes())?;
    writer.flush()?;

    info!(path = %path.display(), bytes = svg.len(), "wrote SVG");
    Ok(())
}
