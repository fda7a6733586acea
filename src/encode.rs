#![forbid(unsafe_code)]

//! Writing unPNG files.
//!
//! Unlike the decoder, the encoder does compute the chunk CRCs and the zlib
//! Adler-32, so that the output is a completely normal PNG as far as any other
//! program can tell.

use alloc::vec::Vec;

use crate::{
  checksum::{png_chunk_crc, Adler32},
  unpng_idat_preamble, unpng_row_framing, PixelFormat, UnpngError, UnpngLayout, U32BE,
  UNPNG_FILTER_NONE, UNPNG_MAGIC_FINAL_BLOCK, UNPNG_MAGIC_IEND, UNPNG_MAGIC_SIGNATURE,
};

/// Encodes tightly packed pixels as an unPNG.
///
/// * `pixels` must be `width * height * bytes_per_pixel` bytes, in `r, g, b`
///   or `r, g, b, a` order, with no padding between rows.
///
/// ## Failure
/// * [`InvalidDimensions`](UnpngError::InvalidDimensions) if the width or
///   height is 0 or larger than [`UNPNG_MAX_RES`](crate::UNPNG_MAX_RES).
/// * [`InvalidLength`](UnpngError::InvalidLength) if `pixels` is the wrong
///   length for the image.
pub fn unpng_encode(
  pixels: &[u8], width: u32, height: u32, pixel_format: PixelFormat,
) -> Result<Vec<u8>, UnpngError> {
  let mut out = Vec::new();
  unpng_encode_into(&mut out, pixels, width, height, pixel_format)?;
  Ok(out)
}

/// As [`unpng_encode`], but appends the file to the end of `out`.
///
/// On error nothing is written.
pub fn unpng_encode_into(
  out: &mut Vec<u8>, pixels: &[u8], width: u32, height: u32, pixel_format: PixelFormat,
) -> Result<(), UnpngError> {
  let layout = UnpngLayout::new(width, height, pixel_format)?;
  let row_len = layout.row_pixel_bytes();
  if pixels.len() != row_len * height as usize {
    return Err(UnpngError::InvalidLength);
  }
  out.reserve(layout.file_len());
  let file_start = out.len();

  out.extend_from_slice(&UNPNG_MAGIC_SIGNATURE);
  let ihdr_start = out.len();
  out.extend_from_slice(&U32BE::from_u32(width).to_bytes());
  out.extend_from_slice(&U32BE::from_u32(height).to_bytes());
  out.extend_from_slice(pixel_format.format_magic());
  let ihdr_crc = png_chunk_crc(*b"IHDR", &out[ihdr_start..]);
  out.extend_from_slice(&U32BE::from_u32(ihdr_crc).to_bytes());

  out.extend_from_slice(pixel_format.identifying_chunk());

  // the IDAT length and type aren't covered by the chunk crc
  let idat_preamble = unpng_idat_preamble(layout.idat_len());
  let (idat_head, zlib_header) = idat_preamble.split_at(8);
  out.extend_from_slice(idat_head);
  let idat_data_start = out.len();
  out.extend_from_slice(zlib_header);

  let row_framing = unpng_row_framing(layout.row_stride());
  let mut adler = Adler32::new();
  for row in pixels.chunks_exact(row_len) {
    out.extend_from_slice(&row_framing);
    out.extend_from_slice(row);
    adler.update(&[UNPNG_FILTER_NONE]);
    adler.update(row);
  }
  out.extend_from_slice(&UNPNG_MAGIC_FINAL_BLOCK);
  out.extend_from_slice(&U32BE::from_u32(adler.finish()).to_bytes());
  let idat_crc = png_chunk_crc(*b"IDAT", &out[idat_data_start..]);
  out.extend_from_slice(&U32BE::from_u32(idat_crc).to_bytes());

  out.extend_from_slice(&UNPNG_MAGIC_IEND);

  debug_assert_eq!(out.len() - file_start, layout.file_len());
  log::debug!(
    "unpng: encoded {width}x{height} {pixel_format:?}, {} bytes",
    out.len() - file_start
  );
  Ok(())
}
