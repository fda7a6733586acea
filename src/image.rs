#![forbid(unsafe_code)]

//! Provides a heap-allocated image type, for when you want the pixels copied
//! out of the file.

use alloc::vec::Vec;
use pixel_formats::r8g8b8a8_Srgb;

use crate::{PixelFormat, UnpngImage};

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
///
/// This is how [`Bitmap`] converts 2d coordinates into index values within
/// its pixel vector.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  y as usize * width as usize + x as usize
}

/// An owned direct-color image, tightly packed.
///
/// The fields are public, but if you put them together weirdly the methods of
/// this type will just return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct Bitmap<P = r8g8b8a8_Srgb> {
  pub width: u32,
  pub height: u32,
  pub pixels: Vec<P>,
}
impl<P> Bitmap<P> {
  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> Option<&P> {
    if x < self.width && y < self.height {
      self.pixels.get(xy_width_to_index(x, y, self.width))
    } else {
      None
    }
  }
}

impl UnpngImage<'_> {
  /// Copies the pixels out into a tightly packed RGBA bitmap.
  ///
  /// RGB images get an alpha of 255 on every pixel. The parse itself never
  /// allocates, this is purely for convenience when something downstream
  /// wants packed pixels.
  pub fn to_bitmap(&self) -> Bitmap<r8g8b8a8_Srgb> {
    let mut pixels = Vec::with_capacity(self.width() as usize * self.height() as usize);
    for row in self.rows() {
      match self.pixel_format() {
        PixelFormat::RGB888 => pixels.extend(
          bytemuck::cast_slice::<u8, [u8; 3]>(row)
            .iter()
            .map(|&[r, g, b]| r8g8b8a8_Srgb { r, g, b, a: 0xFF }),
        ),
        PixelFormat::RGBA8888 => pixels.extend(
          bytemuck::cast_slice::<u8, [u8; 4]>(row)
            .iter()
            .map(|&[r, g, b, a]| r8g8b8a8_Srgb { r, g, b, a }),
        ),
      }
    }
    Bitmap { width: self.width(), height: self.height(), pixels }
  }
}
