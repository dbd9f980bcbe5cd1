//! Debug graph of the tree's parent/child structure in Graphviz DOT.

use std::io::{self, Write};

use crate::{BspNode, BspTree};

/// Writes the tree as a DOT `digraph`.
///
/// One vertex per node, labelled with its name and edge; arcs point from a
/// node to its children and are labelled `front` or `back`. Render with
/// `dot -Tpdf`.
pub fn write_graph<W: Write>(tree: &BspTree, mut writer: W) -> io::Result<()> {
    writeln!(writer, "digraph bsp {{")?;
    writeln!(writer, "    node [shape=box, fontname=monospace];")?;
    if let Some(root) = tree.root() {
        write_node(root, &mut writer)?;
    }
    writeln!(writer, "}}")
}

fn write_node<W: Write>(node: &BspNode, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "    {name} [label=\"{name}\\n{edge}\"];",
        name = node.name(),
        edge = node.edge()
    )?;

    for (child, label) in [(node.front(), "front"), (node.back(), "back")] {
        if let Some(child) = child {
            writeln!(
                writer,
                "    {} -> {} [label=\"{}\"];",
                node.name(),
                child.name(),
                label
            )?;
            write_node(child, writer)?;
        }
    }
    Ok(())
}
