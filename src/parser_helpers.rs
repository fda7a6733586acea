#![forbid(unsafe_code)]

//! Bounds-checked access to fixed regions of the input.
//!
//! Everything here returns `None` / an error instead of panicking when the
//! region would go past the end of the input.

use bytemuck::{pod_read_unaligned, Pod};

use crate::{UnpngError, UnpngRegion};
use core::mem::size_of;

/// Gets `len` bytes starting at `offset`, if they're all in bounds.
#[inline]
#[must_use]
pub(crate) fn bytes_at(bytes: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
  let end = offset.checked_add(len)?;
  bytes.get(offset..end)
}

/// Reads a `Pod` value (with any alignment) starting at `offset`.
#[inline]
#[must_use]
pub(crate) fn pod_at<T: Pod>(bytes: &[u8], offset: usize) -> Option<T> {
  bytes_at(bytes, offset, size_of::<T>()).map(pod_read_unaligned::<T>)
}

/// Checks that the bytes at `offset` are exactly `expected`.
///
/// A mismatch, including running off the end of the input, is reported as bad
/// magic in the `region` given.
#[inline]
pub(crate) fn expect_magic(
  bytes: &[u8], offset: usize, expected: &[u8], region: UnpngRegion,
) -> Result<(), UnpngError> {
  match bytes_at(bytes, offset, expected.len()) {
    Some(actual) if actual == expected => Ok(()),
    _ => {
      log::trace!("unpng: magic mismatch in {region:?} at offset {offset}");
      Err(UnpngError::InvalidMagic(region))
    }
  }
}
