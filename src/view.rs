#![forbid(unsafe_code)]

//! The decoded image: a strided view into the file's own bytes.

use core::fmt::Debug;

use bytemuck::Pod;
use pixel_formats::{r8g8b8_Srgb, r8g8b8a8_Srgb};

use crate::{PixelFormat, UnpngLayout};

/// An unPNG image, borrowing its pixels from the file data.
///
/// Nothing is copied: the pixel data is a view into the bytes that were
/// parsed. Rows are `row_stride` bytes apart, and the gap between the end of
/// one row's pixels and the start of the next row's pixels is that next row's
/// framing bytes.
///
/// The only way to get one of these is [`unpng_parse`](crate::unpng_parse),
/// so the fields are always consistent with each other.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnpngImage<'b> {
  layout: UnpngLayout,
  pixels: &'b [u8],
}
impl<'b> UnpngImage<'b> {
  /// Makes the view over an already validated file.
  ///
  /// Returns `None` if the data is too short for the layout, which can't
  /// happen after the framing checks pass.
  #[inline]
  pub(crate) fn new(bytes: &'b [u8], layout: UnpngLayout) -> Option<Self> {
    let start = layout.pixel_data_offset();
    let len = layout.rows_len() - (layout.row_stride() as usize - layout.row_pixel_bytes());
    let pixels = bytes.get(start..start.checked_add(len)?)?;
    Some(Self { layout, pixels })
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.layout.width()
  }
  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.layout.height()
  }
  /// The format of the pixel data.
  #[inline]
  #[must_use]
  pub const fn pixel_format(&self) -> PixelFormat {
    self.layout.pixel_format()
  }
  /// Bytes from the start of one row to the start of the next row.
  ///
  /// This is larger than the pixel bytes in a row, use it as the "pitch" when
  /// handing the data to a graphics API.
  #[inline]
  #[must_use]
  pub const fn row_stride(&self) -> u32 {
    self.layout.row_stride()
  }
  /// The full layout of the file this came from.
  #[inline]
  #[must_use]
  pub const fn layout(&self) -> &UnpngLayout {
    &self.layout
  }

  /// All of the pixel data, from the first byte of the first row to the last
  /// byte of the last row.
  ///
  /// Every row except the last is followed by framing bytes, which are *not*
  /// pixel data. Use this along with [`row_stride`](Self::row_stride) when
  /// something wants a base pointer and a pitch.
  #[inline]
  #[must_use]
  pub const fn strided_bytes(&self) -> &'b [u8] {
    self.pixels
  }

  /// The pixel bytes of row `y`, or `None` if `y` is out of bounds.
  #[inline]
  #[must_use]
  pub fn row(&self, y: u32) -> Option<&'b [u8]> {
    if y < self.height() {
      let start = y as usize * self.row_stride() as usize;
      self.pixels.get(start..start + self.layout.row_pixel_bytes())
    } else {
      None
    }
  }

  /// The pixel bytes of row `y` as a slice of `P`.
  ///
  /// `P` is generally `[u8; 3]` for RGB data and `[u8; 4]` for RGBA data. If
  /// the size of `P` doesn't evenly divide the row you get `None`.
  #[inline]
  #[must_use]
  pub fn row_as<P: Pod>(&self, y: u32) -> Option<&'b [P]> {
    bytemuck::try_cast_slice(self.row(y)?).ok()
  }

  /// The bytes of the pixel at `(x, y)`, or `None` if the position is out of
  /// bounds.
  ///
  /// The slice is 3 or 4 bytes long depending on the pixel format.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> Option<&'b [u8]> {
    if x < self.width() {
      let bpp = self.pixel_format().bytes_per_pixel() as usize;
      let start = x as usize * bpp;
      self.row(y)?.get(start..start + bpp)
    } else {
      None
    }
  }

  /// The pixel at `(x, y)` as RGBA, or `None` if the position is out of
  /// bounds.
  ///
  /// RGB pixels are given an alpha of 255.
  #[inline]
  #[must_use]
  pub fn get_rgba(&self, x: u32, y: u32) -> Option<r8g8b8a8_Srgb> {
    match *self.get(x, y)? {
      [r, g, b] => Some(r8g8b8a8_Srgb { r, g, b, a: 0xFF }),
      [r, g, b, a] => Some(r8g8b8a8_Srgb { r, g, b, a }),
      _ => None,
    }
  }

  /// The pixel at `(x, y)` as RGB, dropping any alpha.
  #[inline]
  #[must_use]
  pub fn get_rgb(&self, x: u32, y: u32) -> Option<r8g8b8_Srgb> {
    match *self.get(x, y)? {
      [r, g, b] | [r, g, b, _] => Some(r8g8b8_Srgb { r, g, b }),
      _ => None,
    }
  }

  /// An iterator over the pixel bytes of each row, top to bottom.
  #[inline]
  #[must_use]
  pub fn rows(&self) -> UnpngRows<'b> {
    UnpngRows {
      data: self.pixels,
      row_stride: self.row_stride() as usize,
      row_len: self.layout.row_pixel_bytes(),
      remaining: self.height(),
    }
  }
}
impl Debug for UnpngImage<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("UnpngImage")
      .field("width", &self.width())
      .field("height", &self.height())
      .field("pixel_format", &self.pixel_format())
      .field("row_stride", &self.row_stride())
      .field("pixels", &(&self.pixels[..self.pixels.len().min(12)], self.pixels.len()))
      .finish()
  }
}

/// Iterator over the rows of an [`UnpngImage`].
///
/// Each item is only the pixel bytes of the row, without any framing.
#[derive(Debug, Clone)]
pub struct UnpngRows<'b> {
  data: &'b [u8],
  row_stride: usize,
  row_len: usize,
  remaining: u32,
}
impl<'b> Iterator for UnpngRows<'b> {
  type Item = &'b [u8];
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining == 0 {
      return None;
    }
    let row = self.data.get(..self.row_len)?;
    self.data = self.data.get(self.row_stride..).unwrap_or(&[]);
    self.remaining -= 1;
    Some(row)
  }
  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.remaining as usize;
    (n, Some(n))
  }
}
impl ExactSizeIterator for UnpngRows<'_> {}
