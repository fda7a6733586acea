//! The checksums an encoder has to write.
//!
//! The decoder never looks at these, but a file written without them would not
//! be a valid PNG for anything else that opens it.

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      k += 1;
    }
    out[n] = c;
    n += 1;
  }
  out
}

/// The CRC32 of a PNG chunk, over the chunk type and then the chunk data.
#[inline]
#[must_use]
pub(crate) fn png_chunk_crc(chunk_type: [u8; 4], data: &[u8]) -> u32 {
  let mut crc = u32::MAX;
  for byte in chunk_type.iter().chain(data) {
    let i = (crc ^ u32::from(*byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc ^ u32::MAX
}

const ADLER_MOD: u32 = 65521;

/// The largest run of bytes that can be summed before `b` could overflow.
const ADLER_NMAX: usize = 5552;

/// Running Adler-32, as used at the end of a zlib stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Adler32 {
  a: u32,
  b: u32,
}
impl Adler32 {
  #[inline]
  pub(crate) const fn new() -> Self {
    Self { a: 1, b: 0 }
  }
  pub(crate) fn update(&mut self, bytes: &[u8]) {
    for chunk in bytes.chunks(ADLER_NMAX) {
      for &byte in chunk {
        self.a += u32::from(byte);
        self.b += self.a;
      }
      self.a %= ADLER_MOD;
      self.b %= ADLER_MOD;
    }
  }
  #[inline]
  #[must_use]
  pub(crate) const fn finish(self) -> u32 {
    (self.b << 16) | self.a
  }
}
