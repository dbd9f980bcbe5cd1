//! BSP tree node implementation.

use nalgebra::Point2;

use super::visitor::walk_node;
use crate::{BspVisitor, Edge, LineSide, PartitionLine};

/// Which child of a node to descend into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Front,
    Back,
}

/// A node in the BSP tree.
///
/// Each node holds exactly one edge; the edge's infinite line separates the
/// edges of its subtrees. Edges on the front side of the line (including
/// edges lying on the line) live in the front subtree, the rest in the back
/// subtree.
#[derive(Debug, Clone)]
pub struct BspNode {
    /// The partition line, built from this node's edge.
    line: PartitionLine,

    /// Debug name, unique within one tree.
    name: String,

    /// Subtree containing edges in FRONT of the partition line.
    front: Option<Box<BspNode>>,

    /// Subtree containing edges BEHIND the partition line.
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a childless node.
    pub fn new(line: PartitionLine, name: impl Into<String>) -> Self {
        Self {
            line,
            name: name.into(),
            front: None,
            back: None,
        }
    }

    /// Returns the partition edge stored at this node.
    #[inline]
    pub fn edge(&self) -> &Edge {
        self.line.edge()
    }

    /// Returns the partition line.
    #[inline]
    pub fn line(&self) -> &PartitionLine {
        &self.line
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the front child subtree.
    #[inline]
    pub fn front(&self) -> Option<&BspNode> {
        self.front.as_deref()
    }

    /// Returns a reference to the back child subtree.
    #[inline]
    pub fn back(&self) -> Option<&BspNode> {
        self.back.as_deref()
    }

    /// Returns the child in `direction`.
    #[inline]
    pub fn child(&self, direction: Direction) -> Option<&BspNode> {
        match direction {
            Direction::Front => self.front(),
            Direction::Back => self.back(),
        }
    }

    /// Sets the front child subtree.
    #[inline]
    pub fn set_front(&mut self, node: Option<BspNode>) {
        self.front = node.map(Box::new);
    }

    /// Sets the back child subtree.
    #[inline]
    pub fn set_back(&mut self, node: Option<BspNode>) {
        self.back = node.map(Box::new);
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Which child a point falls into. Points on the line go front.
    pub fn side_of(&self, point: Point2<f64>) -> Direction {
        match self.line.classify_point(point) {
            LineSide::Front | LineSide::OnLine => Direction::Front,
            LineSide::Back => Direction::Back,
        }
    }

    /// Visits this node and its descendants in pre-order.
    pub fn walk<V: BspVisitor + ?Sized>(&self, visitor: &mut V) {
        walk_node(self, visitor);
    }

    /// Returns the number of edges (= nodes) in this subtree.
    pub fn edge_count(&self) -> usize {
        1 + self.front.as_ref().map_or(0, |n| n.edge_count())
            + self.back.as_ref().map_or(0, |n| n.edge_count())
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let front_depth = self.front.as_ref().map_or(0, |n| n.depth());
        let back_depth = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front_depth.max(back_depth)
    }
}
