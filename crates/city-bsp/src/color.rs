//! Region colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB triple identifying one logical region of the source image.
///
/// Alpha is not part of the key: it only decides whether a pixel is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColorKey {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorKey {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Builds a key from an RGBA sample, dropping alpha.
    #[inline]
    pub fn from_rgba(sample: [u8; 4]) -> Self {
        Self::new(sample[0], sample[1], sample[2])
    }

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
        ]
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl From<[u8; 3]> for ColorKey {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}
