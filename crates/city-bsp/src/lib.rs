//! Building footprint BSP construction.
//!
//! Converts a flat-colored raster image, where each color marks one building
//! footprint, into a 2D BSP tree of boundary edges:
//!
//! 1. [`classify_pixels`] groups foreground pixels by color;
//! 2. [`extract_rectangles`] tiles each color with axis-aligned rectangles;
//! 3. [`build_edges`] turns rectangles into directed boundary edges;
//! 4. [`BspTree::build`] partitions the edges, splitting the ones that cross
//!    a partition line;
//! 5. [`export`] writes the result for a runtime or for debugging.
//!
//! [`Pipeline`] runs all stages for one image.

pub mod bsp;
mod color;
mod cuttable;
mod edge;
mod error;
pub mod export;
mod extract;
mod line;
mod pipeline;
mod raster;
mod rectangle;

pub use bsp::{
    BspNode, BspTree, BspVisitor, CollectingVisitor, Direction, EdgeSelector, FewestSplits,
    FirstEdge, FnVisitor, NodeNamer,
};
pub use color::ColorKey;
pub use cuttable::Cuttable;
pub use edge::Edge;
pub use error::{BspError, Result};
pub use export::OutputPaths;
pub use extract::{continuous_spans, extract_rectangles, span_is_supported, Span};
pub use line::{Classification, LineSide, PartitionLine, SIDE_EPSILON};
pub use pipeline::{City, Pipeline};
pub use raster::{classify_pixels, load_image, Pixel, PixelGrid, PixelSource, PixelsByColor};
pub use rectangle::{build_edges, Rectangle};
