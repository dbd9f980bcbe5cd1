//! Drawing helpers for viewing a city BSP tree with macroquad.
//!
//! All geometry lives in image coordinates (pixels, y growing downward), the
//! same orientation as the screen, so a [`Viewport`] only scales and shifts.

use city_bsp::{BspNode, BspTree, BspVisitor, ColorKey, Edge, PartitionLine};
use macroquad::prelude::*;
use nalgebra::Point2;

pub mod navigator;
pub use navigator::TreeNavigator;

/// Axis-aligned bounding box of every edge in a tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Bounds {
    /// Bounds of all tree edges, or `None` for an empty tree.
    pub fn of_tree(tree: &BspTree) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for edge in tree.collect_edges() {
            for p in [edge.start(), edge.end()] {
                bounds = Some(match bounds {
                    None => Self { min: p, max: p },
                    Some(b) => Self {
                        min: Point2::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                        max: Point2::new(b.max.x.max(p.x), b.max.y.max(p.y)),
                    },
                });
            }
        }
        bounds
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Clips the infinite line through `line` to this box.
    ///
    /// Returns the two ends of the visible chord, or `None` if the line misses
    /// the box entirely.
    pub fn clip_line(&self, line: &PartitionLine) -> Option<(Point2<f64>, Point2<f64>)> {
        let origin = line.origin();
        let d = line.edge().direction();

        let mut t0 = f64::NEG_INFINITY;
        let mut t1 = f64::INFINITY;
        for (o, dir, lo, hi) in [
            (origin.x, d.x, self.min.x, self.max.x),
            (origin.y, d.y, self.min.y, self.max.y),
        ] {
            if dir == 0.0 {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let (a, b) = ((lo - o) / dir, (hi - o) / dir);
            t0 = t0.max(a.min(b));
            t1 = t1.min(a.max(b));
        }

        (t0 <= t1).then(|| (origin + d * t0, origin + d * t1))
    }
}

/// Maps image coordinates onto the screen, preserving aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    offset: Vec2,
    scale: f32,
    origin: Point2<f64>,
}

impl Viewport {
    /// Fits `bounds` into a `width` x `height` screen area with `margin`
    /// pixels left free on every side.
    pub fn fit(bounds: &Bounds, width: f32, height: f32, margin: f32) -> Self {
        let avail_w = (width - 2.0 * margin).max(1.0);
        let avail_h = (height - 2.0 * margin).max(1.0);
        let span_w = bounds.width().max(1.0) as f32;
        let span_h = bounds.height().max(1.0) as f32;
        let scale = (avail_w / span_w).min(avail_h / span_h);

        // Center the drawing in the leftover space.
        let offset = vec2(
            margin + (avail_w - span_w * scale) / 2.0,
            margin + (avail_h - span_h * scale) / 2.0,
        );
        Self {
            offset,
            scale,
            origin: bounds.min,
        }
    }

    /// Fits `bounds` into the current window.
    pub fn fit_screen(bounds: &Bounds, margin: f32) -> Self {
        Self::fit(bounds, screen_width(), screen_height(), margin)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, p: Point2<f64>) -> Vec2 {
        let local = p - self.origin;
        self.offset + vec2(local.x as f32, local.y as f32) * self.scale
    }
}

/// The macroquad color of a region.
pub fn region_color(color: ColorKey) -> Color {
    let [r, g, b] = color.to_unit_rgb();
    Color::new(r, g, b, 1.0)
}

/// Draws one edge in its region color.
pub fn draw_edge(edge: &Edge, viewport: &Viewport, thickness: f32) {
    draw_edge_colored(edge, viewport, thickness, region_color(edge.color()));
}

pub fn draw_edge_colored(edge: &Edge, viewport: &Viewport, thickness: f32, color: Color) {
    let a = viewport.to_screen(edge.start());
    let b = viewport.to_screen(edge.end());
    draw_line(a.x, a.y, b.x, b.y, thickness, color);
}

/// Visitor that draws every visited node's edge.
pub struct RenderVisitor<'a> {
    viewport: &'a Viewport,
    thickness: f32,
    tint: Option<Color>,
}

impl<'a> RenderVisitor<'a> {
    pub fn new(viewport: &'a Viewport, thickness: f32) -> Self {
        Self {
            viewport,
            thickness,
            tint: None,
        }
    }

    /// Draws every edge in `tint` instead of its region color.
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }
}

impl BspVisitor for RenderVisitor<'_> {
    fn visit(&mut self, node: &BspNode) {
        match self.tint {
            Some(tint) => draw_edge_colored(node.edge(), self.viewport, self.thickness, tint),
            None => draw_edge(node.edge(), self.viewport, self.thickness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: ColorKey = ColorKey::new(255, 0, 0);

    fn square_tree() -> BspTree {
        BspTree::from_edges(vec![
            Edge::new(2.0, 1.0, 2.0, 5.0, RED),
            Edge::new(2.0, 5.0, 6.0, 5.0, RED),
            Edge::new(6.0, 5.0, 6.0, 1.0, RED),
            Edge::new(6.0, 1.0, 2.0, 1.0, RED),
        ])
        .unwrap()
    }

    #[test]
    fn bounds_cover_all_edges() {
        let bounds = Bounds::of_tree(&square_tree()).unwrap();
        assert_eq!(bounds.min, Point2::new(2.0, 1.0));
        assert_eq!(bounds.max, Point2::new(6.0, 5.0));
        assert!(Bounds::of_tree(&BspTree::new()).is_none());
    }

    #[test]
    fn viewport_keeps_aspect_and_centers() {
        let bounds = Bounds {
            min: Point2::new(0.0, 0.0),
            max: Point2::new(10.0, 5.0),
        };
        let viewport = Viewport::fit(&bounds, 220.0, 220.0, 10.0);

        assert_eq!(viewport.scale(), 20.0);
        assert_eq!(viewport.to_screen(Point2::new(0.0, 0.0)), vec2(10.0, 60.0));
        assert_eq!(viewport.to_screen(Point2::new(10.0, 5.0)), vec2(210.0, 160.0));
    }

    #[test]
    fn clip_axis_aligned_lines() {
        let tree = square_tree();
        let bounds = Bounds::of_tree(&tree).unwrap();
        let root = tree.root().unwrap();

        let (a, b) = bounds.clip_line(root.line()).unwrap();
        assert_eq!(a, Point2::new(2.0, 1.0));
        assert_eq!(b, Point2::new(2.0, 5.0));

        let outside = PartitionLine::from_edge(Edge::new(9.0, 0.0, 9.0, 1.0, RED)).unwrap();
        assert!(bounds.clip_line(&outside).is_none());
    }

    #[test]
    fn clip_oblique_line() {
        let bounds = Bounds {
            min: Point2::new(0.0, 0.0),
            max: Point2::new(4.0, 4.0),
        };
        let diagonal = PartitionLine::from_edge(Edge::new(1.0, 1.0, 2.0, 2.0, RED)).unwrap();
        let (a, b) = bounds.clip_line(&diagonal).unwrap();
        assert_eq!(a, Point2::new(0.0, 0.0));
        assert_eq!(b, Point2::new(4.0, 4.0));
    }

    #[test]
    fn region_color_is_opaque() {
        let c = region_color(ColorKey::new(255, 0, 51));
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.2, 1.0));
    }
}
