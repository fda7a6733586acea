#![forbid(unsafe_code)]

//! The two pixel formats an unPNG can hold, and picking between them.

use crate::{
  parser_helpers::{bytes_at, expect_magic}, UnpngError, UnpngRegion, UNPNG_FORMAT_OFFSET,
  UNPNG_MAGIC_FORMAT_RGB888, UNPNG_MAGIC_FORMAT_RGBA8888, UNPNG_MAGIC_UNPN_CHUNK,
  UNPNG_UNPN_OFFSET,
};

/// Channel layout of the pixel data.
///
/// Channels are always 8 bits and always in `r, g, b(, a)` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PixelFormat {
  /// Red, Green, Blue
  RGB888 = 2,
  /// Red, Green, Blue, Alpha
  RGBA8888 = 3,
}
impl PixelFormat {
  /// The bytes per pixel of this format.
  #[inline]
  #[must_use]
  pub const fn bytes_per_pixel(self) -> u32 {
    match self {
      Self::RGB888 => 3,
      Self::RGBA8888 => 4,
    }
  }

  /// The bits per pixel of this format.
  #[inline]
  #[must_use]
  pub const fn bits_per_pixel(self) -> u32 {
    self.bytes_per_pixel() * 8
  }

  /// The PNG color type byte for this format.
  #[inline]
  #[must_use]
  pub const fn png_color_type(self) -> u8 {
    match self {
      Self::RGB888 => 2,
      Self::RGBA8888 => 6,
    }
  }

  /// The bit depth, color type, compression, filter, and interlace bytes that
  /// select this format.
  #[inline]
  #[must_use]
  pub const fn format_magic(self) -> &'static [u8; 5] {
    match self {
      Self::RGB888 => &UNPNG_MAGIC_FORMAT_RGB888,
      Self::RGBA8888 => &UNPNG_MAGIC_FORMAT_RGBA8888,
    }
  }

  /// The identifying chunk that must follow the `IHDR` for this format.
  ///
  /// Currently both formats share the same `unPn` chunk.
  #[inline]
  #[must_use]
  pub const fn identifying_chunk(self) -> &'static [u8; 13] {
    match self {
      Self::RGB888 | Self::RGBA8888 => &UNPNG_MAGIC_UNPN_CHUNK,
    }
  }

  /// Channel masks `[r, g, b, a]` for this format's pixels when they're read
  /// as a little-endian integer of [`bits_per_pixel`](Self::bits_per_pixel)
  /// bits.
  ///
  /// This is what a surface / texture API generally wants along with the
  /// image's stride as the pitch.
  #[inline]
  #[must_use]
  pub const fn channel_masks(self) -> [u32; 4] {
    match self {
      Self::RGB888 => [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0x0000_0000],
      Self::RGBA8888 => [0x0000_00FF, 0x0000_FF00, 0x00FF_0000, 0xFF00_0000],
    }
  }

  /// Does this format have an alpha channel?
  #[inline]
  #[must_use]
  pub const fn has_alpha(self) -> bool {
    matches!(self, Self::RGBA8888)
  }
}

/// Figures out the pixel format from the bytes after the width and height.
///
/// This checks both the format selector bytes and the identifying chunk for
/// that format, so every fixed byte of the `IHDR`/`unPn` region is covered.
///
/// ## Failure
/// * [`InvalidMagic`](UnpngError::InvalidMagic) if neither format matches, or
///   if the identifying chunk is wrong.
pub fn unpng_resolve_format(bytes: &[u8]) -> Result<PixelFormat, UnpngError> {
  let selector = bytes_at(bytes, UNPNG_FORMAT_OFFSET, UNPNG_MAGIC_FORMAT_RGB888.len());
  let format = match selector {
    Some(s) if s == PixelFormat::RGB888.format_magic() => PixelFormat::RGB888,
    Some(s) if s == PixelFormat::RGBA8888.format_magic() => PixelFormat::RGBA8888,
    _ => {
      log::trace!("unpng: unsupported format selector {selector:02X?}");
      return Err(UnpngError::InvalidMagic(UnpngRegion::FormatSelector));
    }
  };
  expect_magic(
    bytes,
    UNPNG_UNPN_OFFSET,
    format.identifying_chunk(),
    UnpngRegion::IdentifyingChunk,
  )?;
  Ok(format)
}
