use core::fmt;

/// The fixed byte regions of an unPNG file.
///
/// When an [`UnpngError::InvalidMagic`] is returned this says which region
/// failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnpngRegion {
  /// The PNG signature plus the `IHDR` length and type.
  Signature,
  /// The bit depth, color type, compression, filter, and interlace bytes.
  FormatSelector,
  /// The `unPn` chunk that marks the file as unPNG.
  IdentifyingChunk,
  /// The `IDAT` length and type, and the zlib header.
  IdatPreamble,
  /// The framing bytes in front of a row's pixel data.
  RowFraming {
    /// Index of the row that didn't match.
    row: u32,
  },
  /// The empty final DEFLATE block after the last row.
  FinalBlock,
  /// The `IEND` chunk.
  Iend,
}

/// An error from the `unpng` crate.
///
/// Every error is terminal: the bytes either are an unPNG file or they are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnpngError {
  /// One of the fixed byte sequences of the file didn't match.
  InvalidMagic(UnpngRegion),

  /// The data is shorter than the smallest possible unPNG, or isn't exactly
  /// the length that the header implies.
  InvalidLength,

  /// The width or height is 0, or larger than [`UNPNG_MAX_RES`](crate::UNPNG_MAX_RES).
  InvalidDimensions,
}
impl UnpngError {
  /// The classic integer error code for this kind of error.
  ///
  /// * `-1`: bad magic bytes
  /// * `-2`: bad buffer length
  /// * `-3`: invalid image dimensions
  #[inline]
  #[must_use]
  pub const fn code(self) -> i32 {
    match self {
      Self::InvalidMagic(_) => -1,
      Self::InvalidLength => -2,
      Self::InvalidDimensions => -3,
    }
  }
}
impl fmt::Display for UnpngError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidMagic(UnpngRegion::RowFraming { row }) => {
        write!(f, "bad magic bytes in the framing of row {row}")
      }
      Self::InvalidMagic(region) => write!(f, "bad magic bytes: {region:?}"),
      Self::InvalidLength => f.write_str("bad buffer length"),
      Self::InvalidDimensions => f.write_str("invalid image dimensions"),
    }
  }
}
