//! The fixed bytes of an unPNG file, and where they go.
//!
//! An unPNG is a legal PNG, laid out like this:
//!
//! ```text
//! offset  size  content
//! 0       16    PNG signature, IHDR length (13), "IHDR"
//! 16      4     width (big-endian)
//! 20      4     height (big-endian)
//! 24      5     bit depth, color type, compression, filter, interlace
//! 29      4     IHDR crc (depends on width/height, never checked)
//! 33      13    the "unPn" chunk
//! 46      10    IDAT length, "IDAT", zlib header
//! 56      ..    `height` rows of `row_stride` bytes each
//! ..      2     the final (empty) deflate block
//! ..      8     adler32 of the image data, IDAT crc (never checked)
//! ..      12    the IEND chunk
//! ```
//!
//! Each row is 8 bytes of framing and then the pixel bytes. The framing holds
//! two empty fixed-huffman deflate blocks (which bring the bit position back to
//! a byte boundary), the header of a stored deflate block with its `LEN` and
//! `NLEN`, and the PNG filter type byte (always "none").

use crate::{U16LE, U32BE};

/// PNG signature, then the length and type of the `IHDR` chunk.
pub const UNPNG_MAGIC_SIGNATURE: [u8; 16] = [
  0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, //
  0x00, 0x00, 0x00, 0x0D, //
  b'I', b'H', b'D', b'R',
];

/// `IHDR` tail for 8-bit RGB.
pub const UNPNG_MAGIC_FORMAT_RGB888: [u8; 5] = [0x08, 0x02, 0x00, 0x00, 0x00];

/// `IHDR` tail for 8-bit RGBA.
pub const UNPNG_MAGIC_FORMAT_RGBA8888: [u8; 5] = [0x08, 0x06, 0x00, 0x00, 0x00];

/// The `unPn` chunk, including its crc.
pub const UNPNG_MAGIC_UNPN_CHUNK: [u8; 13] = [
  0x00, 0x00, 0x00, 0x01, //
  b'u', b'n', b'P', b'n', //
  b'G', //
  0x53, 0x93, 0xA4, 0x38,
];

/// An empty deflate block with the final bit set.
pub const UNPNG_MAGIC_FINAL_BLOCK: [u8; 2] = [0x03, 0x00];

/// The `IEND` chunk, including its crc.
pub const UNPNG_MAGIC_IEND: [u8; 12] = [
  0x00, 0x00, 0x00, 0x00, //
  b'I', b'E', b'N', b'D', //
  0xAE, 0x42, 0x60, 0x82,
];

/// zlib header: deflate with a 256 byte window, no preset dictionary.
pub const UNPNG_ZLIB_HEADER: [u8; 2] = [0x78, 0x01];

/// Two empty fixed-huffman blocks followed by the start of a non-final stored
/// block.
pub const UNPNG_ROW_BLOCK_PREFIX: [u8; 3] = [0x02, 0x08, 0x00];

/// The PNG filter type byte for "no filter".
pub const UNPNG_FILTER_NONE: u8 = 0;

/// Largest allowed width or height.
pub const UNPNG_MAX_RES: u32 = 0x2000;

/// Where the format selector bytes are, just after the width and height.
pub const UNPNG_FORMAT_OFFSET: usize = UNPNG_MAGIC_SIGNATURE.len() + 8;
/// Where the `IHDR` crc is.
pub const UNPNG_IHDR_CRC_OFFSET: usize = UNPNG_FORMAT_OFFSET + UNPNG_MAGIC_FORMAT_RGB888.len();
/// Where the `unPn` chunk is.
pub const UNPNG_UNPN_OFFSET: usize = UNPNG_IHDR_CRC_OFFSET + 4;
/// Where the `IDAT` chunk is.
pub const UNPNG_IDAT_OFFSET: usize = UNPNG_UNPN_OFFSET + UNPNG_MAGIC_UNPN_CHUNK.len();

/// Size of the IDAT length, the "IDAT" type, and the zlib header.
pub const UNPNG_IDAT_PREAMBLE_SIZE: usize = 4 + 4 + UNPNG_ZLIB_HEADER.len();

/// Where the first row's framing starts.
pub const UNPNG_HEADER_SIZE: usize = UNPNG_IDAT_OFFSET + UNPNG_IDAT_PREAMBLE_SIZE;

/// Framing bytes in front of each row's pixels.
pub const UNPNG_ROW_OVERHEAD: u32 = 8;

/// Everything after the last row: final block, adler32, IDAT crc, IEND.
pub const UNPNG_TRAILER_SIZE: usize =
  UNPNG_MAGIC_FINAL_BLOCK.len() + 4 + 4 + UNPNG_MAGIC_IEND.len();

/// Every byte of the file that isn't part of a row.
pub const UNPNG_OVERHEAD: usize = UNPNG_HEADER_SIZE + UNPNG_TRAILER_SIZE;

/// Bytes in the IDAT chunk data that aren't rows: zlib header, final block,
/// adler32.
pub const UNPNG_IDAT_OVERHEAD: u32 =
  (UNPNG_ZLIB_HEADER.len() + UNPNG_MAGIC_FINAL_BLOCK.len() + 4) as u32;

/// The size of a 1x1 RGB file, the smallest an unPNG can be.
pub const UNPNG_MIN_FILE_SIZE: usize = UNPNG_OVERHEAD + UNPNG_ROW_OVERHEAD as usize + 3;

/// The expected IDAT preamble for a given IDAT data length.
#[inline]
#[must_use]
pub const fn unpng_idat_preamble(idat_len: u32) -> [u8; UNPNG_IDAT_PREAMBLE_SIZE] {
  let [l0, l1, l2, l3] = U32BE::from_u32(idat_len).to_bytes();
  let [z0, z1] = UNPNG_ZLIB_HEADER;
  [l0, l1, l2, l3, b'I', b'D', b'A', b'T', z0, z1]
}

/// The expected framing for every row of an image with the given stride.
///
/// The stored block holds the filter byte and the pixel bytes, so its `LEN`
/// is one more than the pixel bytes per row.
///
/// The stride must be at least [`UNPNG_ROW_OVERHEAD`], and the block length
/// must fit in a `u16`. Every valid unPNG stride does.
#[inline]
#[must_use]
pub const fn unpng_row_framing(row_stride: u32) -> [u8; UNPNG_ROW_OVERHEAD as usize] {
  let block_len = (row_stride - UNPNG_ROW_OVERHEAD + 1) as u16;
  let [p0, p1, p2] = UNPNG_ROW_BLOCK_PREFIX;
  let [len0, len1] = U16LE::from_u16(block_len).to_bytes();
  let [nlen0, nlen1] = U16LE::from_u16(!block_len).to_bytes();
  [p0, p1, p2, len0, len1, nlen0, nlen1, UNPNG_FILTER_NONE]
}
