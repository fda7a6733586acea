use miniz_oxide::inflate::decompress_to_vec_zlib;
use unpng::{
  unpng_encode, unpng_file_len, unpng_parse, PixelFormat, UnpngError, UNPNG_IDAT_OFFSET,
  UNPNG_MAGIC_IEND,
};

/// The zlib stream inside the single IDAT chunk.
fn idat_zlib_stream(png: &[u8]) -> &[u8] {
  let len = u32::from_be_bytes(png[UNPNG_IDAT_OFFSET..UNPNG_IDAT_OFFSET + 4].try_into().unwrap());
  let start = UNPNG_IDAT_OFFSET + 8;
  &png[start..start + len as usize]
}

#[test]
fn test_encoded_data_is_a_real_zlib_stream() {
  // a real inflate, which also checks the adler32, sees filter byte 0 and
  // then the pixels for every row.
  for format in [PixelFormat::RGB888, PixelFormat::RGBA8888] {
    for (width, height) in [(1, 1), (3, 5), (40, 2)] {
      let bpp = format.bytes_per_pixel() as usize;
      let pixels = super::rand_bytes(width * height * bpp);
      let png = unpng_encode(&pixels, width as u32, height as u32, format).unwrap();
      assert_eq!(Ok(png.len()), unpng_file_len(width as u32, height as u32, format));

      let inflated = decompress_to_vec_zlib(idat_zlib_stream(&png)).unwrap();
      let mut expected = Vec::new();
      for row in pixels.chunks_exact(width * bpp) {
        expected.push(0);
        expected.extend_from_slice(row);
      }
      assert_eq!(inflated, expected, "{format:?} {width}x{height}");
      assert_eq!(&png[png.len() - 12..], &UNPNG_MAGIC_IEND);
    }
  }
}

#[test]
fn test_encode_then_parse_reads_the_same_pixels() {
  let pixels: Vec<u8> = (0..4 * 3 * 4).map(|i| i as u8).collect();
  let png = unpng_encode(&pixels, 4, 3, PixelFormat::RGBA8888).unwrap();
  let image = unpng_parse(&png).unwrap();
  assert_eq!(image.get(3, 2), Some(&[44_u8, 45, 46, 47][..]));
  assert_eq!(image.row_as::<[u8; 4]>(1).map(|row| row.len()), Some(4));
  let p = image.get_rgb(1, 0).unwrap();
  assert_eq!((p.r, p.g, p.b), (4, 5, 6));
}

#[test]
fn test_to_bitmap() {
  let png = unpng_encode(&[1, 2, 3, 4, 5, 6], 1, 2, PixelFormat::RGB888).unwrap();
  let bitmap = unpng_parse(&png).unwrap().to_bitmap();
  assert_eq!((bitmap.width, bitmap.height), (1, 2));
  assert_eq!(bitmap.pixels.len(), 2);
  let p = bitmap.get(0, 1).unwrap();
  assert_eq!((p.r, p.g, p.b, p.a), (4, 5, 6, 0xFF));
  assert!(bitmap.get(1, 0).is_none());

  let png = unpng_encode(&[9, 8, 7, 6, 5, 4, 3, 2], 2, 1, PixelFormat::RGBA8888).unwrap();
  let bitmap = unpng_parse(&png).unwrap().to_bitmap();
  let p = bitmap.get(1, 0).unwrap();
  assert_eq!((p.r, p.g, p.b, p.a), (5, 4, 3, 2));
}

#[test]
fn test_encode_rejects_bad_input() {
  assert_eq!(
    unpng_encode(&[0; 3], 8193, 1, PixelFormat::RGB888),
    Err(UnpngError::InvalidDimensions)
  );
  assert_eq!(unpng_encode(&[0; 4], 1, 1, PixelFormat::RGB888), Err(UnpngError::InvalidLength));
}
