#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A decoder for unPNG image data.
//!
//! An unPNG is a PNG file built so that nothing in it needs to be computed
//! when decoding. The pixel rows are stored as uncompressed deflate blocks of
//! a length known from the image width, and every checksum is either a
//! constant or ignored. That means a file can be fully validated, and its
//! pixels located, with nothing but exact byte comparisons at fixed offsets
//! and two integer reads (the width and the height).
//!
//! There's only two pixel formats: 8-bit RGB and 8-bit RGBA. Filtering,
//! palettes, interlacing, other bit depths, and extra chunks are all not
//! allowed.
//!
//! ## Decoding
//!
//! Call [`unpng_parse`] on the entire file. You get back an [`UnpngImage`]
//! that borrows the pixel data out of the file bytes without copying it.
//!
//! ```
//! # fn main() -> Result<(), unpng::UnpngError> {
//! # let file = unpng::unpng_encode(&[0x10, 0x20, 0x30], 1, 1, unpng::PixelFormat::RGB888)?;
//! let image = unpng::unpng_parse(&file)?;
//! assert_eq!(image.width(), 1);
//! assert_eq!(image.get(0, 0), Some(&[0x10, 0x20, 0x30][..]));
//! # Ok(())
//! # }
//! ```
//!
//! Rows are [`row_stride`](UnpngImage::row_stride) bytes apart, and the gap
//! between them is the next row's framing bytes. If you're handing the data to
//! a graphics API use the stride as the pitch along with
//! [`PixelFormat::channel_masks`].
//!
//! ## Encoding
//!
//! With the `alloc` feature, [`unpng_encode`] turns packed pixel data into an
//! unPNG (with correct checksums, so any other PNG decoder can open it too).

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

mod int_endian;
pub use int_endian::*;

mod parser_helpers;

pub mod magic;
pub use magic::*;

mod header;
pub use header::*;

mod pixel_format;
pub use pixel_format::*;

mod layout;
pub use layout::*;

mod framing;
pub use framing::*;

mod view;
pub use view::*;

#[cfg(feature = "alloc")]
mod checksum;

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub mod image;

#[cfg(feature = "alloc")]
mod encode;
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub use encode::*;

/// Parses an unPNG file.
///
/// Checks run in this order, and the first failure is returned:
/// 1) [`unpng_read_dimensions`]: minimum length, signature, width and height.
/// 2) [`unpng_resolve_format`]: pixel format and the identifying chunk.
/// 3) [`unpng_check_framing`]: exact length, then the `IDAT` preamble, the
///    framing of every row, and the trailer.
///
/// Nothing is allocated and nothing is copied. Parsing the same bytes again
/// always gives the same result.
///
/// ## Failure
/// * [`InvalidLength`](UnpngError::InvalidLength): too short, or not exactly
///   the length the header says it should be.
/// * [`InvalidMagic`](UnpngError::InvalidMagic): some fixed byte doesn't match.
/// * [`InvalidDimensions`](UnpngError::InvalidDimensions): the width or height
///   is 0 or more than [`UNPNG_MAX_RES`].
pub fn unpng_parse(bytes: &[u8]) -> Result<UnpngImage<'_>, UnpngError> {
  let UnpngDimensions { width, height } = unpng_read_dimensions(bytes)?;
  let pixel_format = unpng_resolve_format(bytes)?;
  let layout = UnpngLayout::from_valid(width, height, pixel_format);
  log::debug!(
    "unpng: width={width} height={height} stride={} pixfmt={pixel_format:?}",
    layout.row_stride()
  );
  unpng_check_framing(bytes, &layout)?;
  UnpngImage::new(bytes, layout).ok_or(UnpngError::InvalidLength)
}
