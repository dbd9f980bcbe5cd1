//! Visitor pattern for BSP tree traversal.
//!
//! Visitors allow custom processing of nodes during tree traversal without
//! coupling traversal logic to specific consumers (exporters, renderers).

use crate::Edge;

use super::node::BspNode;

/// Visitor for processing nodes during a pre-order walk of the tree.
pub trait BspVisitor {
    /// Called once per node, parents before children, front before back.
    fn visit(&mut self, node: &BspNode);
}

/// A simple visitor that collects the partition edge of every visited node.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Edge>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected edges.
    pub fn into_edges(self) -> Vec<Edge> {
        self.collected
    }

    /// Returns a reference to the collected edges.
    pub fn edges(&self) -> &[Edge] {
        &self.collected
    }
}

impl BspVisitor for CollectingVisitor {
    fn visit(&mut self, node: &BspNode) {
        self.collected.push(*node.edge());
    }
}

/// A visitor that calls a closure for each node.
pub struct FnVisitor<F>
where
    F: FnMut(&BspNode),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&BspNode),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> BspVisitor for FnVisitor<F>
where
    F: FnMut(&BspNode),
{
    fn visit(&mut self, node: &BspNode) {
        (self.func)(node);
    }
}

/// Walks `node` and its descendants in pre-order.
pub(crate) fn walk_node<V: BspVisitor + ?Sized>(node: &BspNode, visitor: &mut V) {
    visitor.visit(node);
    if let Some(front) = node.front() {
        walk_node(front, visitor);
    }
    if let Some(back) = node.back() {
        walk_node(back, visitor);
    }
}
