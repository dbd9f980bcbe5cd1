//! Axis-aligned pixel rectangles and their boundary edges.

use crate::{ColorKey, Edge, Pixel};

/// An axis-aligned block of pixels of one color.
///
/// `x_max` and `y_max` are exclusive: the rectangle covers the pixels
/// `x_min..x_max` × `y_min..y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x_min: u32,
    x_max: u32,
    y_min: u32,
    y_max: u32,
    color: ColorKey,
}

impl Rectangle {
    /// Creates a new rectangle from its bounds.
    ///
    /// # Panics (debug builds only)
    /// Panics if the rectangle would be empty.
    pub fn new(x_min: u32, x_max: u32, y_min: u32, y_max: u32, color: ColorKey) -> Self {
        debug_assert!(x_min < x_max, "Rectangle must have positive width");
        debug_assert!(y_min < y_max, "Rectangle must have positive height");
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            color,
        }
    }

    #[inline]
    pub fn x_min(&self) -> u32 {
        self.x_min
    }

    #[inline]
    pub fn x_max(&self) -> u32 {
        self.x_max
    }

    #[inline]
    pub fn y_min(&self) -> u32 {
        self.y_min
    }

    #[inline]
    pub fn y_max(&self) -> u32 {
        self.y_max
    }

    #[inline]
    pub fn color(&self) -> ColorKey {
        self.color
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y_max - self.y_min
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns `true` if the pixel `(x, y)` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x_min..self.x_max).contains(&x) && (self.y_min..self.y_max).contains(&y)
    }

    /// Iterates over every covered pixel, column by column.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        (self.x_min..self.x_max).flat_map(move |x| (self.y_min..self.y_max).map(move |y| (x, y)))
    }

    /// Returns the four boundary edges, tagged with the rectangle's color.
    ///
    /// The winding is fixed: `(x1,y1)→(x1,y2)→(x2,y2)→(x2,y1)→(x1,y1)`.
    pub fn edges(&self) -> [Edge; 4] {
        let (x1, x2) = (self.x_min as f64, self.x_max as f64);
        let (y1, y2) = (self.y_min as f64, self.y_max as f64);
        let c = self.color;
        [
            Edge::new(x1, y1, x1, y2, c),
            Edge::new(x1, y2, x2, y2, c),
            Edge::new(x2, y2, x2, y1, c),
            Edge::new(x2, y1, x1, y1, c),
        ]
    }
}

/// Converts rectangles into the flat list of their boundary edges.
pub fn build_edges(rectangles: &[Rectangle]) -> Vec<Edge> {
    rectangles.iter().flat_map(Rectangle::edges).collect()
}
