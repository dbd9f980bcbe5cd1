//! Binary Space Partitioning tree over 2D boundary edges.
//!
//! The tree recursively partitions the plane using the infinite lines of
//! its own edges. It is built offline and consumed by a runtime that does
//! point-location and visibility queries against building footprints.
//!
//! # Example
//!
//! ```ignore
//! use city_bsp::{build_edges, BspTree, FirstEdge};
//!
//! let edges = build_edges(&rectangles);
//! let tree = BspTree::build(edges, &FirstEdge)?;
//! for edge in tree.collect_edges() {
//!     println!("{edge}");
//! }
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: the container holding the root node and build counters
//! - [`BspNode`]: one partition edge and its front/back subtrees
//! - [`EdgeSelector`]: strategy trait for choosing partition edges
//! - [`BspVisitor`]: visitor trait for custom traversal behavior
//! - [`NodeNamer`]: per-build sequence of debug names

mod naming;
mod node;
mod selector;
mod tree;
mod visitor;

pub use naming::NodeNamer;
pub use node::{BspNode, Direction};
pub use selector::{EdgeSelector, FewestSplits, FirstEdge};
pub use tree::BspTree;
pub use visitor::{BspVisitor, CollectingVisitor, FnVisitor};
