#![forbid(unsafe_code)]

//! Checking the `IDAT` chunk: the framing of every row, and the trailer.
//!
//! Only the framing is looked at, never the pixel bytes themselves, and none
//! of the checksums are checked.

use crate::{
  parser_helpers::expect_magic, unpng_idat_preamble, unpng_row_framing, UnpngError,
  UnpngLayout, UnpngRegion, UNPNG_IDAT_OFFSET, UNPNG_MAGIC_FINAL_BLOCK, UNPNG_MAGIC_IEND,
};

/// Checks that `bytes` is exactly as long as an unPNG with this layout.
#[inline]
pub fn unpng_check_length(bytes: &[u8], layout: &UnpngLayout) -> Result<(), UnpngError> {
  if bytes.len() == layout.file_len() {
    Ok(())
  } else {
    log::trace!("unpng: expected {} bytes, got {}", layout.file_len(), bytes.len());
    Err(UnpngError::InvalidLength)
  }
}

/// Checks all the framing around the rows of pixel data.
///
/// In order this checks:
/// 1) The total length of the data (cheap, so it goes first).
/// 2) The `IDAT` chunk length and type, and the zlib header.
/// 3) The framing in front of every row, stopping at the first bad row.
/// 4) The final deflate block marker after the last row.
/// 5) The `IEND` chunk at the very end.
///
/// ## Failure
/// * [`InvalidLength`](UnpngError::InvalidLength) if the data isn't exactly
///   [`file_len`](UnpngLayout::file_len) bytes.
/// * [`InvalidMagic`](UnpngError::InvalidMagic) naming the first region that
///   doesn't match.
pub fn unpng_check_framing(bytes: &[u8], layout: &UnpngLayout) -> Result<(), UnpngError> {
  unpng_check_length(bytes, layout)?;

  let idat_preamble = unpng_idat_preamble(layout.idat_len());
  log::trace!("unpng: idat_preamble = {idat_preamble:02X?}");
  expect_magic(bytes, UNPNG_IDAT_OFFSET, &idat_preamble, UnpngRegion::IdatPreamble)?;

  let row_framing = unpng_row_framing(layout.row_stride());
  log::trace!("unpng: row_framing = {row_framing:02X?}");
  for row in 0..layout.height() {
    expect_magic(
      bytes,
      layout.row_framing_offset(row),
      &row_framing,
      UnpngRegion::RowFraming { row },
    )?;
  }

  let final_block_offset = layout.final_block_offset();
  expect_magic(bytes, final_block_offset, &UNPNG_MAGIC_FINAL_BLOCK, UnpngRegion::FinalBlock)?;

  // adler32 and the IDAT crc sit between the final block and IEND
  let iend_offset = bytes.len() - UNPNG_MAGIC_IEND.len();
  expect_magic(bytes, iend_offset, &UNPNG_MAGIC_IEND, UnpngRegion::Iend)
}
