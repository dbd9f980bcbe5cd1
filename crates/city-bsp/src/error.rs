//! Error type shared by every stage of the conversion.

use std::path::PathBuf;

use crate::Edge;

/// Everything that can abort a conversion.
///
/// The pipeline never retries and never returns a partial tree: the first
/// error ends the run for that image.
#[derive(Debug, thiserror::Error)]
pub enum BspError {
    /// The input image is missing or could not be decoded.
    #[error("failed to read input image {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A zero-length edge was chosen as a partition line.
    #[error("degenerate partition edge {edge}")]
    DegenerateEdge { edge: Edge },

    /// Splitting `edge` against `partition` needs a general line intersection.
    #[error("cannot split oblique edge {edge} against oblique partition {partition}")]
    UnsupportedGeometry { partition: Edge, edge: Edge },

    /// An output sink failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding of the structured export failed.
    #[error("structured export: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BspError>;

impl BspError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
