//! Directed boundary edges.

use std::fmt;

use nalgebra::{Point2, Vector2};

use crate::ColorKey;

/// A directed line segment tagged with the color of the region it bounds.
///
/// Edges built from rectangles are axis-aligned; fragments produced by
/// splitting keep the orientation of the edge they came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    start: Point2<f64>,
    end: Point2<f64>,
    color: ColorKey,
}

impl Edge {
    /// Creates an edge from `(x1, y1)` to `(x2, y2)`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, color: ColorKey) -> Self {
        Self::from_points(Point2::new(x1, y1), Point2::new(x2, y2), color)
    }

    pub fn from_points(start: Point2<f64>, end: Point2<f64>, color: ColorKey) -> Self {
        Self { start, end, color }
    }

    #[inline]
    pub fn start(&self) -> Point2<f64> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point2<f64> {
        self.end
    }

    #[inline]
    pub fn color(&self) -> ColorKey {
        self.color
    }

    /// Returns `(x1, y1, x2, y2)`.
    #[inline]
    pub fn coords(&self) -> (f64, f64, f64, f64) {
        (self.start.x, self.start.y, self.end.x, self.end.y)
    }

    /// `end - start`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }

    /// The direction rotated a quarter turn counter-clockwise: `(-dy, dx)`.
    ///
    /// Not normalized. Points on this side of the edge's line are "front".
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        let d = self.direction();
        Vector2::new(-d.y, d.x)
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns `true` if both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` for horizontal or vertical edges.
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    pub fn midpoint(&self) -> Point2<f64> {
        nalgebra::center(&self.start, &self.end)
    }

    /// The same segment traversed the other way.
    pub fn reversed(&self) -> Self {
        Self::from_points(self.end, self.start, self.color)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})->({}, {}) {}",
            self.start.x, self.start.y, self.end.x, self.end.y, self.color
        )
    }
}
