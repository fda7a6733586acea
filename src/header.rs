#![forbid(unsafe_code)]

//! Checking the start of the file and reading the image dimensions.

use crate::{
  parser_helpers::{expect_magic, pod_at},
  UnpngError, UnpngRegion, U32BE, UNPNG_MAGIC_SIGNATURE, UNPNG_MAX_RES, UNPNG_MIN_FILE_SIZE,
};

/// Width and height of an image, in pixels.
///
/// Values of this type from [`unpng_read_dimensions`] are always within
/// `1..=UNPNG_MAX_RES`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct UnpngDimensions {
  pub width: u32,
  pub height: u32,
}
impl UnpngDimensions {
  /// Checks that both values are within `1..=UNPNG_MAX_RES`.
  #[inline]
  pub const fn validate(width: u32, height: u32) -> Result<Self, UnpngError> {
    if width == 0 || height == 0 || width > UNPNG_MAX_RES || height > UNPNG_MAX_RES {
      // 8k ought to be enough for anyone
      Err(UnpngError::InvalidDimensions)
    } else {
      Ok(Self { width, height })
    }
  }
}

/// Checks the PNG signature and `IHDR` preamble, then reads the width and
/// height.
///
/// ## Failure
/// * [`InvalidLength`](UnpngError::InvalidLength) if the data is shorter than
///   the smallest possible unPNG.
/// * [`InvalidMagic`](UnpngError::InvalidMagic) if the signature is wrong.
/// * [`InvalidDimensions`](UnpngError::InvalidDimensions) if either dimension
///   is 0 or larger than [`UNPNG_MAX_RES`].
pub fn unpng_read_dimensions(bytes: &[u8]) -> Result<UnpngDimensions, UnpngError> {
  if bytes.len() < UNPNG_MIN_FILE_SIZE {
    return Err(UnpngError::InvalidLength);
  }
  expect_magic(bytes, 0, &UNPNG_MAGIC_SIGNATURE, UnpngRegion::Signature)?;
  let width: U32BE =
    pod_at(bytes, UNPNG_MAGIC_SIGNATURE.len()).ok_or(UnpngError::InvalidLength)?;
  let height: U32BE =
    pod_at(bytes, UNPNG_MAGIC_SIGNATURE.len() + 4).ok_or(UnpngError::InvalidLength)?;
  UnpngDimensions::validate(width.to_u32(), height.to_u32())
}
