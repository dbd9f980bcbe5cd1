//! Output sinks for a converted city.
//!
//! Three independent outputs, each optional:
//!
//! - [`record`]: the structured JSON export a runtime loads;
//! - [`map`]: an SVG drawing of every tree edge in its source color;
//! - [`graph`]: a Graphviz DOT description of the tree's shape.

pub mod graph;
pub mod map;
pub mod record;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::{BspError, City, Result};

pub use graph::write_graph;
pub use map::{render_map, write_map};
pub use record::{CityRecord, NodeRecord, RectRecord};

/// Where to write each output. `None` disables that output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub export: Option<PathBuf>,
    pub map: Option<PathBuf>,
    pub graph: Option<PathBuf>,
}

impl OutputPaths {
    /// No outputs at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_export(mut self, path: impl Into<PathBuf>) -> Self {
        self.export = Some(path.into());
        self
    }

    pub fn with_map(mut self, path: impl Into<PathBuf>) -> Self {
        self.map = Some(path.into());
        self
    }

    pub fn with_graph(mut self, path: impl Into<PathBuf>) -> Self {
        self.graph = Some(path.into());
        self
    }
}

/// Writes every enabled output for `city`.
///
/// Stops at the first failure. Files already written stay on disk; the file
/// being written when the failure happens is closed before returning.
pub fn write_outputs(city: &City, outputs: &OutputPaths) -> Result<()> {
    if let Some(path) = &outputs.graph {
        write_file(path, |w| {
            write_graph(city.tree(), w).map_err(|e| BspError::io(path, e))
        })?;
    }
    if let Some(path) = &outputs.map {
        write_file(path, |w| {
            write_map(city.tree(), w).map_err(|e| BspError::io(path, e))
        })?;
    }
    if let Some(path) = &outputs.export {
        write_file(path, |w| CityRecord::from_city(city).write_json(w))?;
    }
    Ok(())
}

/// Creates `path`, hands a buffered writer to `write`, and flushes it.
///
/// The file is closed when this returns, whether `write` succeeded or not.
fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = File::create(path).map_err(|e| BspError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush().map_err(|e| BspError::io(path, e))?;
    info!("wrote {}", path.display());
    Ok(())
}
