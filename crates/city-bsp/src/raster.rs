//! Raster input and grouping of foreground pixels by color.

use std::collections::BTreeMap;
use std::path::Path;

use image::RgbaImage;
use log::info;

use crate::{BspError, ColorKey, Result};

/// Integer pixel coordinate.
pub type Pixel = (u32, u32);

/// Pixels of one image grouped by their color.
pub type PixelsByColor = BTreeMap<ColorKey, Vec<Pixel>>;

/// A 2D grid of RGBA samples.
pub trait PixelSource {
    /// Returns `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Returns the `[r, g, b, a]` sample at `(x, y)`.
    ///
    /// Callers only ask for coordinates inside [`dimensions`](Self::dimensions).
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }
}

/// A row-major in-memory grid. Handy for building small inputs by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    samples: Vec<[u8; 4]>,
}

impl PixelGrid {
    /// Creates a fully transparent grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            samples: vec![[0; 4]; width as usize * height as usize],
        }
    }

    /// Sets one sample.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, sample: [u8; 4]) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let idx = self.index(x, y);
        self.samples[idx] = sample;
    }

    /// Paints the opaque block `[x_min, x_max) × [y_min, y_max)` with `color`.
    pub fn fill(&mut self, x_min: u32, x_max: u32, y_min: u32, y_max: u32, color: ColorKey) {
        for x in x_min..x_max {
            for y in y_min..y_max {
                self.set(x, y, [color.red, color.green, color.blue, 255]);
            }
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl PixelSource for PixelGrid {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.samples[self.index(x, y)]
    }
}

/// Decodes an image file into RGBA samples.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| BspError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image.to_rgba8())
}

/// Groups every pixel with non-zero alpha by its color.
///
/// A fully transparent source yields an empty map.
pub fn classify_pixels<S: PixelSource + ?Sized>(source: &S) -> PixelsByColor {
    let (width, height) = source.dimensions();
    let mut by_color = PixelsByColor::new();

    for x in 0..width {
        for y in 0..height {
            let sample = source.pixel(x, y);
            if sample[3] > 0 {
                by_color
                    .entry(ColorKey::from_rgba(sample))
                    .or_default()
                    .push((x, y));
            }
        }
    }

    info!(
        "classified {} foreground pixels into {} colors",
        by_color.values().map(Vec::len).sum::<usize>(),
        by_color.len()
    );
    by_color
}
