//! Integers stored as raw bytes of a fixed endianness.
//!
//! These have an alignment of 1, so they can be read straight out of file data
//! with [`bytemuck`] no matter where in the file they sit.

use bytemuck::{Pod, Zeroable};

/// A `u32` stored as big-endian bytes.
///
/// PNG stores all of its multi-byte integers this way.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  /// Convert this value to a native `u32`
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
  /// Make a value from a native `u32`
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }
  /// The stored bytes.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 4] {
    self.0
  }
}
impl core::fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}
impl From<u32> for U32BE {
  #[inline]
  fn from(value: u32) -> Self {
    Self::from_u32(value)
  }
}
impl From<U32BE> for u32 {
  #[inline]
  fn from(value: U32BE) -> Self {
    value.to_u32()
  }
}

/// A `u16` stored as little-endian bytes.
///
/// DEFLATE stores the `LEN` and `NLEN` of a stored block this way, which is
/// the one place little-endian values show up inside a PNG.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct U16LE([u8; 2]);
impl U16LE {
  /// Convert this value to a native `u16`
  #[inline]
  #[must_use]
  pub const fn to_u16(self) -> u16 {
    u16::from_le_bytes(self.0)
  }
  /// Make a value from a native `u16`
  #[inline]
  #[must_use]
  pub const fn from_u16(u: u16) -> Self {
    Self(u.to_le_bytes())
  }
  /// The stored bytes.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 2] {
    self.0
  }
}
impl core::fmt::Debug for U16LE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U16LE").field(&self.to_u16()).finish()
  }
}
impl From<u16> for U16LE {
  #[inline]
  fn from(value: u16) -> Self {
    Self::from_u16(value)
  }
}
impl From<U16LE> for u16 {
  #[inline]
  fn from(value: U16LE) -> Self {
    value.to_u16()
  }
}
