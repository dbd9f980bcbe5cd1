//! Debug map: every tree edge stroked in its source color.

use std::io::{self, Write};

use svg::node::element::Line;
use svg::Document;

use crate::{BspTree, FnVisitor};

/// Landscape US-letter page width, in points.
pub const PAGE_WIDTH: f64 = 792.0;
/// Landscape US-letter page height, in points.
pub const PAGE_HEIGHT: f64 = 612.0;

/// Renders the tree's edges as an SVG page.
///
/// Image coordinates grow downwards while the page origin is at the
/// bottom, so y is flipped to `PAGE_HEIGHT - y`.
pub fn render_map(tree: &BspTree) -> Document {
    let mut lines = Vec::with_capacity(tree.edge_count());
    tree.walk(&mut FnVisitor::new(|node| {
        let (x1, y1, x2, y2) = node.edge().coords();
        lines.push(
            Line::new()
                .set("x1", x1)
                .set("y1", PAGE_HEIGHT - y1)
                .set("x2", x2)
                .set("y2", PAGE_HEIGHT - y2)
                .set("stroke", node.edge().color().to_string())
                .set("stroke-width", 1)
                .set("id", node.name()),
        );
    }));

    lines.into_iter().fold(
        Document::new()
            .set("width", PAGE_WIDTH)
            .set("height", PAGE_HEIGHT)
            .set("viewBox", (0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT)),
        |document, line| document.add(line),
    )
}

/// Writes the debug map to `writer`.
pub fn write_map<W: Write>(tree: &BspTree, writer: W) -> io::Result<()> {
    svg::write(writer, &render_map(tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorKey, Edge};

    fn render(tree: &BspTree) -> String {
        let mut out = Vec::new();
        write_map(tree, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_tree_is_blank_page() {
        let svg = render(&BspTree::new());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("viewBox=\"0 0 792 612\""));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn edges_are_flipped_and_colored() {
        let edge = Edge::new(10.0, 2.0, 30.0, 2.0, ColorKey::new(0, 128, 255));
        let tree = BspTree::from_edges(vec![edge]).unwrap();
        let svg = render(&tree);

        assert_eq!(svg.matches("<line").count(), 1);
        assert!(svg.contains("y1=\"610\""));
        assert!(svg.contains("stroke=\"rgb(0, 128, 255)\""));
        assert!(svg.contains("id=\"n0000\""));
    }
}
