//! Partition edge selection strategies for BSP tree construction.
//!
//! The choice of partition edge affects tree balance and the number of edge
//! splits during construction. It never affects correctness: every strategy
//! feeds the same classification and splitting code.

use crate::{Classification, Edge, PartitionLine};

/// Strategy for selecting which edge's line to use for partitioning.
pub trait EdgeSelector {
    /// Returns the index of the edge to partition by.
    ///
    /// Returns `None` if the slice is empty. Any returned index must be in
    /// bounds for `edges`.
    fn select(&self, edges: &[Edge]) -> Option<usize>;
}

/// Selects the first edge in the list.
///
/// The simplest and fastest selector, and the default. Tree quality depends
/// entirely on input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEdge;

impl EdgeSelector for FirstEdge {
    fn select(&self, edges: &[Edge]) -> Option<usize> {
        if edges.is_empty() { None } else { Some(0) }
    }
}

/// Selects the edge whose line splits the fewest other edges.
///
/// Ties go to the candidate with the smallest front/back imbalance, then to
/// the earliest one in the list. Costs `O(n²)` per node, so it suits the
/// few-thousand-edge inputs a single city image produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct FewestSplits;

impl EdgeSelector for FewestSplits {
    fn select(&self, edges: &[Edge]) -> Option<usize> {
        if edges.is_empty() {
            return None;
        }

        let best = edges
            .iter()
            .enumerate()
            .filter_map(|(idx, candidate)| {
                let line = PartitionLine::from_edge(*candidate).ok()?;
                Some((score(&line, idx, edges), idx))
            })
            .min()
            .map(|(_, idx)| idx);

        // Only degenerate edges left: hand one back so the builder reports it.
        Some(best.unwrap_or(0))
    }
}

/// `(splits, |front - back|)` for partitioning `edges` by `line`.
fn score(line: &PartitionLine, skip: usize, edges: &[Edge]) -> (usize, usize) {
    let mut splits = 0;
    let mut front = 0usize;
    let mut back = 0usize;

    for (idx, edge) in edges.iter().enumerate() {
        if idx == skip {
            continue;
        }
        match line.classify_edge(edge) {
            Classification::Front | Classification::Collinear => front += 1,
            Classification::Back => back += 1,
            Classification::Spanning => {
                splits += 1;
                front += 1;
                back += 1;
            }
        }
    }

    (splits, front.abs_diff(back))
}
