#![forbid(unsafe_code)]

//! Where everything is in an unPNG of a given size and format.

use crate::{
  PixelFormat, UnpngDimensions, UnpngError, UNPNG_HEADER_SIZE, UNPNG_IDAT_OVERHEAD,
  UNPNG_OVERHEAD, UNPNG_ROW_OVERHEAD,
};

/// The size, format, and stride of an unPNG.
///
/// These are only made after the dimensions have been checked, so none of the
/// offset math here can overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnpngLayout {
  width: u32,
  height: u32,
  pixel_format: PixelFormat,
  row_stride: u32,
}
impl UnpngLayout {
  /// Makes the layout for an image of the size and format given.
  ///
  /// ## Failure
  /// * [`InvalidDimensions`](UnpngError::InvalidDimensions) if the width or
  ///   height is 0 or larger than [`UNPNG_MAX_RES`](crate::UNPNG_MAX_RES).
  #[inline]
  pub const fn new(
    width: u32, height: u32, pixel_format: PixelFormat,
  ) -> Result<Self, UnpngError> {
    match UnpngDimensions::validate(width, height) {
      Ok(_) => Ok(Self::from_valid(width, height, pixel_format)),
      Err(e) => Err(e),
    }
  }

  #[inline]
  pub(crate) const fn from_valid(width: u32, height: u32, pixel_format: PixelFormat) -> Self {
    let row_stride = width * pixel_format.bytes_per_pixel() + UNPNG_ROW_OVERHEAD;
    Self { width, height, pixel_format, row_stride }
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }
  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }
  /// Pixel format.
  #[inline]
  #[must_use]
  pub const fn pixel_format(&self) -> PixelFormat {
    self.pixel_format
  }
  /// Bytes from the start of one row's pixels to the start of the next row's
  /// pixels.
  #[inline]
  #[must_use]
  pub const fn row_stride(&self) -> u32 {
    self.row_stride
  }

  /// Pixel bytes in each row, not counting the framing.
  #[inline]
  #[must_use]
  pub const fn row_pixel_bytes(&self) -> usize {
    (self.row_stride - UNPNG_ROW_OVERHEAD) as usize
  }

  /// Length of the `IDAT` chunk's data.
  #[inline]
  #[must_use]
  pub const fn idat_len(&self) -> u32 {
    self.row_stride * self.height + UNPNG_IDAT_OVERHEAD
  }

  /// Bytes taken by all of the rows.
  #[inline]
  #[must_use]
  pub const fn rows_len(&self) -> usize {
    self.row_stride as usize * self.height as usize
  }

  /// The exact length of the whole file.
  #[inline]
  #[must_use]
  pub const fn file_len(&self) -> usize {
    self.rows_len() + UNPNG_OVERHEAD
  }

  /// Offset of the framing bytes for row `y`.
  #[inline]
  #[must_use]
  pub const fn row_framing_offset(&self, y: u32) -> usize {
    UNPNG_HEADER_SIZE + y as usize * self.row_stride as usize
  }

  /// Offset of the first pixel byte of row 0.
  #[inline]
  #[must_use]
  pub const fn pixel_data_offset(&self) -> usize {
    UNPNG_HEADER_SIZE + UNPNG_ROW_OVERHEAD as usize
  }

  /// Offset of the final block marker, just after the last row.
  #[inline]
  #[must_use]
  pub const fn final_block_offset(&self) -> usize {
    UNPNG_HEADER_SIZE + self.rows_len()
  }
}

/// Gets the exact file length of an unPNG with the given size and format.
///
/// ## Failure
/// * [`InvalidDimensions`](UnpngError::InvalidDimensions) for out of range
///   dimensions.
#[inline]
pub fn unpng_file_len(
  width: u32, height: u32, pixel_format: PixelFormat,
) -> Result<usize, UnpngError> {
  UnpngLayout::new(width, height, pixel_format).map(|layout| layout.file_len())
}
