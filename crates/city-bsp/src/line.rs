//! Partition lines and side classification for BSP construction.

use nalgebra::{Point2, Vector2};

use crate::{BspError, Edge, Result};

/// Side scalars closer to zero than this are treated as lying on the line.
///
/// Inputs are integer pixel coordinates, so the only values this absorbs
/// are rounding residue from oblique split points.
pub const SIDE_EPSILON: f64 = 1e-9;

/// Which side of a partition line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSide {
    /// Point is on the side the line's normal points to.
    Front,
    /// Point is on the opposite side.
    Back,
    /// Point lies on the line (within `SIDE_EPSILON`).
    OnLine,
}

/// Classification of an edge relative to a partition line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No endpoint is behind the line, and at least one is in front.
    Front,
    /// No endpoint is in front of the line, and at least one is behind.
    Back,
    /// Both endpoints lie on the line.
    Collinear,
    /// One endpoint is strictly in front, the other strictly behind.
    Spanning,
}

/// The infinite extension of a partition edge.
///
/// The front side is the one the edge's normal `(-dy, dx)` points to.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionLine {
    edge: Edge,
    normal: Vector2<f64>,
    normal_sq: f64,
}

impl PartitionLine {
    /// Builds the line through `edge`.
    ///
    /// Fails with [`BspError::DegenerateEdge`] if the edge has zero length.
    pub fn from_edge(edge: Edge) -> Result<Self> {
        if edge.is_degenerate() {
            return Err(BspError::DegenerateEdge { edge });
        }
        let normal = edge.normal();
        Ok(Self {
            edge,
            normal,
            normal_sq: normal.norm_squared(),
        })
    }

    /// The edge this line was built from.
    #[inline]
    pub fn edge(&self) -> &Edge {
        &self.edge
    }

    /// A point on the line (the partition edge's start).
    #[inline]
    pub fn origin(&self) -> Point2<f64> {
        self.edge.start()
    }

    /// The (unnormalized) front-facing normal.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        self.normal
    }

    /// Returns `true` if the line runs parallel to the x axis.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.normal.x == 0.0
    }

    /// Returns `true` if the line runs parallel to the y axis.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.normal.y == 0.0
    }

    /// Projects `point - origin` onto the normal: `((p - s) · n) / (n · n)`.
    ///
    /// Positive in front, negative behind, zero on the line.
    #[inline]
    pub fn side_scalar(&self, point: Point2<f64>) -> f64 {
        (point - self.origin()).dot(&self.normal) / self.normal_sq
    }

    /// Classifies which side of the line a point lies on.
    pub fn classify_point(&self, point: Point2<f64>) -> LineSide {
        let scalar = self.side_scalar(point);
        if scalar > SIDE_EPSILON {
            LineSide::Front
        } else if scalar < -SIDE_EPSILON {
            LineSide::Back
        } else {
            LineSide::OnLine
        }
    }

    /// Classifies an edge by the sides of its two endpoints.
    pub fn classify_edge(&self, edge: &Edge) -> Classification {
        match (
            self.classify_point(edge.start()),
            self.classify_point(edge.end()),
        ) {
            (LineSide::OnLine, LineSide::OnLine) => Classification::Collinear,
            (LineSide::Front, LineSide::Back) | (LineSide::Back, LineSide::Front) => {
                Classification::Spanning
            }
            (LineSide::Back, _) | (_, LineSide::Back) => Classification::Back,
            _ => Classification::Front,
        }
    }

    /// Finds where a spanning edge crosses the line.
    ///
    /// Axis-parallel lines are solved along their varying axis and the
    /// crossing point is snapped onto the line exactly. An oblique line is
    /// solved in general form only against an axis-aligned edge; two oblique
    /// segments fail with [`BspError::UnsupportedGeometry`].
    pub fn intersect(&self, edge: &Edge) -> Result<Point2<f64>> {
        let origin = self.origin();
        let t1 = edge.start();
        let d = edge.direction();

        if self.is_horizontal() {
            debug_assert!(d.y != 0.0, "edge crossing a horizontal line must vary in y");
            let k = (origin.y - t1.y) / d.y;
            Ok(Point2::new(t1.x + k * d.x, origin.y))
        } else if self.is_vertical() {
            debug_assert!(d.x != 0.0, "edge crossing a vertical line must vary in x");
            let k = (origin.x - t1.x) / d.x;
            Ok(Point2::new(origin.x, t1.y + k * d.y))
        } else if edge.is_axis_aligned() {
            let k = self.normal.dot(&(origin - t1)) / self.normal.dot(&d);
            Ok(t1 + d * k)
        } else {
            Err(BspError::UnsupportedGeometry {
                partition: self.edge,
                edge: *edge,
            })
        }
    }
}
