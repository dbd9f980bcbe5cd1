//! Edge cutting operations for BSP trees.

use log::trace;

use crate::{Classification, Edge, LineSide, PartitionLine, Result};

/// Trait for geometry that can be cut by a partition line.
pub trait Cuttable: Sized {
    /// Cuts the geometry by a line.
    ///
    /// Returns `(front, back)` where:
    /// - **Front**: `(Some(self), None)`
    /// - **Back**: `(None, Some(self))`
    /// - **Collinear**: `(Some(self), None)` - treated as front
    /// - **Spanning**: `(Some(front_part), Some(back_part))`
    fn cut(&self, line: &PartitionLine) -> Result<(Option<Self>, Option<Self>)>;
}

impl Cuttable for Edge {
    fn cut(&self, line: &PartitionLine) -> Result<(Option<Edge>, Option<Edge>)> {
        match line.classify_edge(self) {
            Classification::Front | Classification::Collinear => Ok((Some(*self), None)),
            Classification::Back => Ok((None, Some(*self))),
            Classification::Spanning => {
                let (front, back) = split_edge(self, line)?;
                Ok((Some(front), Some(back)))
            }
        }
    }
}

/// Splits a spanning edge at its crossing with `line`.
///
/// Both fragments keep the original direction and color and share the
/// split point. Returns `(front_fragment, back_fragment)`.
fn split_edge(edge: &Edge, line: &PartitionLine) -> Result<(Edge, Edge)> {
    let split = line.intersect(edge)?;
    let head = Edge::from_points(edge.start(), split, edge.color());
    let tail = Edge::from_points(split, edge.end(), edge.color());

    trace!("split {} at ({}, {}) by {}", edge, split.x, split.y, line.edge());

    if line.classify_point(edge.start()) == LineSide::Front {
        Ok((head, tail))
    } else {
        Ok((tail, head))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BspError, ColorKey};
    use nalgebra::Point2;

    const RED: ColorKey = ColorKey::new(255, 0, 0);
    const GREEN: ColorKey = ColorKey::new(0, 255, 0);

    fn horizontal_line() -> PartitionLine {
        // Along y = 2, pointing +x: normal (0, 4), so y > 2 is front.
        PartitionLine::from_edge(Edge::new(0.0, 2.0, 4.0, 2.0, RED)).unwrap()
    }

    #[test]
    fn front_edge_is_kept_whole() {
        let edge = Edge::new(0.0, 3.0, 5.0, 3.0, GREEN);
        assert_eq!(edge.cut(&horizontal_line()).unwrap(), (Some(edge), None));
    }

    #[test]
    fn back_edge_is_kept_whole() {
        let edge = Edge::new(0.0, 1.0, 5.0, 0.0, GREEN);
        assert_eq!(edge.cut(&horizontal_line()).unwrap(), (None, Some(edge)));
    }

    #[test]
    fn collinear_edge_goes_front() {
        let edge = Edge::new(9.0, 2.0, 6.0, 2.0, GREEN);
        assert_eq!(edge.cut(&horizontal_line()).unwrap(), (Some(edge), None));
    }

    #[test]
    fn spanning_edge_upward() {
        let edge = Edge::new(1.0, 0.0, 1.0, 5.0, GREEN);
        let (front, back) = edge.cut(&horizontal_line()).unwrap();
        let (front, back) = (front.unwrap(), back.unwrap());

        assert_eq!(back, Edge::new(1.0, 0.0, 1.0, 2.0, GREEN));
        assert_eq!(front, Edge::new(1.0, 2.0, 1.0, 5.0, GREEN));
    }

    #[test]
    fn spanning_edge_downward() {
        let edge = Edge::new(1.0, 5.0, 1.0, 0.0, GREEN);
        let (front, back) = edge.cut(&horizontal_line()).unwrap();
        let (front, back) = (front.unwrap(), back.unwrap());

        // The fragment at the positive endpoint goes front.
        assert_eq!(front, Edge::new(1.0, 5.0, 1.0, 2.0, GREEN));
        assert_eq!(back, Edge::new(1.0, 2.0, 1.0, 0.0, GREEN));
        assert_eq!(front.end(), back.start());
        assert_eq!(front.length() + back.length(), edge.length());
    }

    #[test]
    fn split_point_is_exact_on_vertical_line() {
        let line = PartitionLine::from_edge(Edge::new(3.0, 7.0, 3.0, 0.0, RED)).unwrap();
        let edge = Edge::new(0.0, 1.0, 7.0, 1.0, GREEN);
        let (front, back) = edge.cut(&line).unwrap();
        let (front, back) = (front.unwrap(), back.unwrap());

        // Downward line has normal (7, 0): x > 3 is front.
        assert_eq!(back.end(), Point2::new(3.0, 1.0));
        assert_eq!(front.start(), Point2::new(3.0, 1.0));
        assert_eq!(front.end(), Point2::new(7.0, 1.0));
    }

    #[test]
    fn unsupported_split_propagates() {
        let line = PartitionLine::from_edge(Edge::new(0.0, 0.0, 1.0, 1.0, RED)).unwrap();
        let edge = Edge::new(0.0, 4.0, 4.0, 0.0, GREEN);
        assert!(matches!(
            edge.cut(&line),
            Err(BspError::UnsupportedGeometry { .. })
        ));
    }
}
