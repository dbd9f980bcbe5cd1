//! BSP tree container and construction.

use log::debug;
use nalgebra::Point2;

use crate::{Cuttable, Edge, PartitionLine, Result};

use super::naming::NodeNamer;
use super::node::{BspNode, Direction};
use super::selector::{EdgeSelector, FirstEdge};
use super::visitor::{walk_node, BspVisitor, CollectingVisitor};

/// A Binary Space Partitioning tree over 2D boundary edges.
///
/// Every input edge ends up at exactly one node, either whole or as one of
/// the fragments it was split into. Fragments of one edge never share a
/// subtree with each other beyond the node that split them.
///
/// # Construction
///
/// ```ignore
/// use city_bsp::{BspTree, FirstEdge};
///
/// let edges: Vec<Edge> = /* ... */;
/// let tree = BspTree::build(edges, &FirstEdge)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BspTree {
    root: Option<BspNode>,
    input_edges: usize,
    splits: usize,
}

impl BspTree {
    /// Creates an empty BSP tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a BSP tree from a list of edges.
    ///
    /// Uses `selector` to choose the partition edge at each node. Edges that
    /// cross a partition line are split in two. Node names are numbered in
    /// pre-order starting from `n0000`.
    ///
    /// Returns an empty tree for empty input. Fails if a degenerate edge is
    /// chosen as a partition, or if a split would need a general oblique
    /// intersection.
    pub fn build<S: EdgeSelector + ?Sized>(edges: Vec<Edge>, selector: &S) -> Result<Self> {
        let input_edges = edges.len();
        let mut builder = Builder {
            selector,
            namer: NodeNamer::new(),
            splits: 0,
        };
        let root = builder.build_node(edges)?;

        debug!(
            "built BSP tree: {} input edges, {} splits, {} nodes",
            input_edges,
            builder.splits,
            builder.namer.issued()
        );

        Ok(Self {
            root,
            input_edges,
            splits: builder.splits,
        })
    }

    /// Builds a BSP tree using the default selector ([`FirstEdge`]).
    pub fn from_edges(edges: Vec<Edge>) -> Result<Self> {
        Self::build(edges, &FirstEdge)
    }

    /// Returns `true` if the tree contains no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&BspNode> {
        self.root.as_ref()
    }

    /// Returns the total number of edges (= nodes) in the tree.
    pub fn edge_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.edge_count())
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    /// Number of edges the tree was built from.
    #[inline]
    pub fn input_edge_count(&self) -> usize {
        self.input_edges
    }

    /// Number of splits performed during construction.
    ///
    /// Each split turns one edge into two, so
    /// `edge_count() == input_edge_count() + split_count()`.
    #[inline]
    pub fn split_count(&self) -> usize {
        self.splits
    }

    /// Walks every node in pre-order (node, front subtree, back subtree).
    pub fn walk<V: BspVisitor + ?Sized>(&self, visitor: &mut V) {
        if let Some(ref root) = self.root {
            walk_node(root, visitor);
        }
    }

    /// Collects all edges in the tree, in pre-order.
    pub fn collect_edges(&self) -> Vec<Edge> {
        let mut visitor = CollectingVisitor::new();
        self.walk(&mut visitor);
        visitor.into_edges()
    }

    /// Returns the node reached by following `path` from the root.
    ///
    /// Returns `None` if the tree is empty or the path leaves the tree.
    pub fn node_at(&self, path: &[Direction]) -> Option<&BspNode> {
        let mut current = self.root.as_ref()?;
        for &direction in path {
            current = current.child(direction)?;
        }
        Some(current)
    }

    /// Descends from the root towards `point` and returns the decisions taken.
    ///
    /// The walk stops where the next child would be absent, so the returned
    /// path always names an existing node (or is empty for an empty tree
    /// and for a point whose side of the root has no subtree). Points on a
    /// partition line go front.
    pub fn locate(&self, point: Point2<f64>) -> Vec<Direction> {
        let mut path = Vec::new();
        let mut current = self.root.as_ref();
        while let Some(node) = current {
            let direction = node.side_of(point);
            current = node.child(direction);
            if current.is_some() {
                path.push(direction);
            }
        }
        path
    }
}

/// State for one tree build: the strategy, the name sequence, and counters.
struct Builder<'s, S: ?Sized> {
    selector: &'s S,
    namer: NodeNamer,
    splits: usize,
}

impl<S: EdgeSelector + ?Sized> Builder<'_, S> {
    /// Recursively builds a BSP node from a list of edges.
    fn build_node(&mut self, mut edges: Vec<Edge>) -> Result<Option<BspNode>> {
        let Some(idx) = self.selector.select(&edges) else {
            return Ok(None);
        };

        let partition = edges.remove(idx);
        let line = PartitionLine::from_edge(partition)?;
        debug!("partitioning {} edges by {}", edges.len(), partition);

        let mut front_list = Vec::new();
        let mut back_list = Vec::new();

        for edge in edges {
            match edge.cut(&line)? {
                (Some(front), Some(back)) => {
                    self.splits += 1;
                    front_list.push(front);
                    back_list.push(back);
                }
                (Some(front), None) => front_list.push(front),
                (None, Some(back)) => back_list.push(back),
                (None, None) => {}
            }
        }

        // Named before the children so names follow pre-order.
        let mut node = BspNode::new(line, self.namer.next_name());
        node.set_front(self.build_node(front_list)?);
        node.set_back(self.build_node(back_list)?);

        Ok(Some(node))
    }
}
