//! End-to-end conversion of one image.

use std::path::Path;

use log::info;

use crate::export::{write_outputs, OutputPaths};
use crate::{
    build_edges, classify_pixels, extract_rectangles, load_image, BspTree, EdgeSelector,
    FirstEdge, PixelSource, Rectangle, Result,
};

/// The result of converting one image: its rectangles and their BSP tree.
#[derive(Debug, Clone, Default)]
pub struct City {
    rectangles: Vec<Rectangle>,
    tree: BspTree,
}

impl City {
    /// All rectangles, grouped by color in ascending color order.
    #[inline]
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    #[inline]
    pub fn tree(&self) -> &BspTree {
        &self.tree
    }

    pub fn into_parts(self) -> (Vec<Rectangle>, BspTree) {
        (self.rectangles, self.tree)
    }
}

/// Runs classification, rectangle extraction, edge building, and tree
/// construction with a chosen partition strategy.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<S = FirstEdge> {
    selector: S,
}

impl Pipeline {
    /// A pipeline using the default [`FirstEdge`] selector.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EdgeSelector> Pipeline<S> {
    pub fn with_selector(selector: S) -> Self {
        Self { selector }
    }

    /// Converts an in-memory image.
    pub fn run<P: PixelSource + ?Sized>(&self, source: &P) -> Result<City> {
        let by_color = classify_pixels(source);

        let rectangles: Vec<Rectangle> = by_color
            .iter()
            .flat_map(|(&color, pixels)| extract_rectangles(pixels, color))
            .collect();
        let edges = build_edges(&rectangles);
        info!(
            "{} colors -> {} rectangles -> {} edges",
            by_color.len(),
            rectangles.len(),
            edges.len()
        );

        let tree = BspTree::build(edges, &self.selector)?;
        info!(
            "BSP tree: {} nodes, depth {}, {} splits",
            tree.edge_count(),
            tree.depth(),
            tree.split_count()
        );

        Ok(City { rectangles, tree })
    }

    /// Loads `input`, converts it, and writes the enabled outputs.
    pub fn process_file(&self, input: impl AsRef<Path>, outputs: &OutputPaths) -> Result<City> {
        let image = load_image(input)?;
        let city = self.run(&image)?;
        write_outputs(&city, outputs)?;
        Ok(city)
    }
}
