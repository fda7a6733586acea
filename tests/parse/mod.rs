use unpng::{
  unpng_encode, unpng_parse, PixelFormat, UnpngError, UnpngRegion, UNPNG_HEADER_SIZE,
  UNPNG_ROW_OVERHEAD,
};
use walkdir::WalkDir;

const FORMATS: [PixelFormat; 2] = [PixelFormat::RGB888, PixelFormat::RGBA8888];

fn encode_random(width: u32, height: u32, format: PixelFormat) -> (Vec<u8>, Vec<u8>) {
  let bpp = format.bytes_per_pixel() as usize;
  let pixels = super::rand_bytes(width as usize * height as usize * bpp);
  let png = unpng_encode(&pixels, width, height, format).unwrap();
  (pixels, png)
}

#[test]
fn test_unpng_parse_no_panics() {
  // iter ALL files in the test folder, none of them are unPNG files.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    assert!(unpng_parse(&v).is_err(), "{}", entry.path().display());
  }
  // even totally random data should never panic the parser!
  for _ in 0..100 {
    let v = super::rand_bytes(1024);
    let _ = unpng_parse(&v);
  }
  // random data after a good header gets past the first checks.
  let (_, good) = encode_random(3, 3, PixelFormat::RGBA8888);
  for len in [89, 90, 100, good.len(), 1024] {
    let mut v = good[..UNPNG_HEADER_SIZE].to_vec();
    v.extend(super::rand_bytes(len - UNPNG_HEADER_SIZE));
    let _ = unpng_parse(&v);
  }
}

#[test]
fn test_one_pixel_rgb() {
  let png = unpng_encode(&[0x10, 0x20, 0x30], 1, 1, PixelFormat::RGB888).unwrap();
  let image = unpng_parse(&png).unwrap();
  assert_eq!(image.width(), 1);
  assert_eq!(image.height(), 1);
  assert_eq!(image.pixel_format(), PixelFormat::RGB888);
  assert_eq!(image.row_stride(), 3 + UNPNG_ROW_OVERHEAD);
  assert_eq!(image.get(0, 0), Some(&[0x10_u8, 0x20, 0x30][..]));

  // the same file with a filter byte of "sub"
  let mut filtered = png.clone();
  filtered[UNPNG_HEADER_SIZE + 7] = 0x01;
  assert_eq!(
    unpng_parse(&filtered),
    Err(UnpngError::InvalidMagic(UnpngRegion::RowFraming { row: 0 }))
  );
}

#[test]
fn test_well_formed_images_parse() {
  let sizes = [(1, 1), (1, 7), (7, 1), (2, 2), (5, 3), (17, 9), (64, 64), (100, 3)];
  for format in FORMATS {
    for (width, height) in sizes {
      let (pixels, png) = encode_random(width, height, format);
      let image = unpng_parse(&png).unwrap();
      assert_eq!((image.width(), image.height()), (width, height));
      assert_eq!(image.pixel_format(), format);
      assert_eq!(image.row_stride(), width * format.bytes_per_pixel() + UNPNG_ROW_OVERHEAD);

      // every pixel reads back, and points inside of the file
      let file_range = png.as_ptr_range();
      let bpp = format.bytes_per_pixel() as usize;
      for y in 0..height {
        for x in 0..width {
          let px = image.get(x, y).unwrap();
          let i = (y as usize * width as usize + x as usize) * bpp;
          assert_eq!(px, &pixels[i..i + bpp], "{format:?} {width}x{height} at ({x},{y})");
          let px_range = px.as_ptr_range();
          assert!(file_range.start <= px_range.start && px_range.end <= file_range.end);
        }
      }
      assert_eq!(image.get(width, 0), None);
      assert_eq!(image.get(0, height), None);

      let rows: Vec<u8> = image.rows().flatten().copied().collect();
      assert_eq!(rows, pixels);
    }
  }
}

#[test]
fn test_parse_is_idempotent() {
  let (_, png) = encode_random(9, 4, PixelFormat::RGBA8888);
  let a = unpng_parse(&png);
  let b = unpng_parse(&png);
  assert_eq!(a, b);
  let (a, b) = (a.unwrap(), b.unwrap());
  assert_eq!(a.strided_bytes().as_ptr(), b.strided_bytes().as_ptr());
}

#[test]
fn test_length_must_be_exact() {
  for format in FORMATS {
    let (_, png) = encode_random(4, 4, format);
    assert_eq!(unpng_parse(&png[..png.len() - 1]), Err(UnpngError::InvalidLength));
    let mut longer = png.clone();
    longer.push(0);
    assert_eq!(unpng_parse(&longer), Err(UnpngError::InvalidLength));
    assert_eq!(unpng_parse(&png[..88]), Err(UnpngError::InvalidLength));
    assert_eq!(unpng_parse(&[]), Err(UnpngError::InvalidLength));
  }
}

#[test]
fn test_dimension_limits() {
  let (_, png) = encode_random(2, 2, PixelFormat::RGB888);
  for (offset, value) in [(16, 0_u32), (20, 0), (16, 8193), (20, 8193), (16, u32::MAX)] {
    let mut bad = png.clone();
    bad[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
    assert_eq!(unpng_parse(&bad), Err(UnpngError::InvalidDimensions), "{offset} = {value}");
  }
  // a width that's fine but doesn't match the rest of the file
  let mut bad = png.clone();
  bad[16..20].copy_from_slice(&3_u32.to_be_bytes());
  assert_eq!(unpng_parse(&bad), Err(UnpngError::InvalidLength));
}

#[test]
fn test_max_dimensions() {
  for (width, height) in [(8192, 1), (1, 8192), (8192, 2)] {
    let (_, png) = encode_random(width, height, PixelFormat::RGBA8888);
    let image = unpng_parse(&png).unwrap();
    assert_eq!((image.width(), image.height()), (width, height));
    assert_eq!(image.rows().count(), height as usize);
  }
}

#[test]
fn test_first_bad_row_stops_the_scan() {
  let (_, png) = encode_random(2, 2, PixelFormat::RGBA8888);
  let stride = 2 * 4 + UNPNG_ROW_OVERHEAD as usize;
  let row0_len = UNPNG_HEADER_SIZE + 3;
  let row1 = UNPNG_HEADER_SIZE + stride;

  let mut bad = png.clone();
  bad[row0_len] ^= 0x01;
  assert_eq!(
    unpng_parse(&bad),
    Err(UnpngError::InvalidMagic(UnpngRegion::RowFraming { row: 0 }))
  );

  bad[row1 + 5] ^= 0x01;
  assert_eq!(
    unpng_parse(&bad),
    Err(UnpngError::InvalidMagic(UnpngRegion::RowFraming { row: 0 }))
  );

  let mut bad = png.clone();
  bad[row1 + 5] ^= 0x01;
  assert_eq!(
    unpng_parse(&bad),
    Err(UnpngError::InvalidMagic(UnpngRegion::RowFraming { row: 1 }))
  );
}

#[test]
fn test_single_byte_corruption_of_fixed_regions() {
  let (_, png) = encode_random(3, 2, PixelFormat::RGBA8888);
  let stride = 3 * 4 + UNPNG_ROW_OVERHEAD as usize;
  let rows_end = UNPNG_HEADER_SIZE + 2 * stride;
  let mut fixed: Vec<(usize, UnpngRegion)> = Vec::new();
  fixed.extend((0..16).map(|i| (i, UnpngRegion::Signature)));
  fixed.extend((24..29).map(|i| (i, UnpngRegion::FormatSelector)));
  fixed.extend((33..46).map(|i| (i, UnpngRegion::IdentifyingChunk)));
  fixed.extend((46..56).map(|i| (i, UnpngRegion::IdatPreamble)));
  for row in 0..2 {
    let start = UNPNG_HEADER_SIZE + row as usize * stride;
    fixed.extend((start..start + 8).map(|i| (i, UnpngRegion::RowFraming { row })));
  }
  fixed.extend((rows_end..rows_end + 2).map(|i| (i, UnpngRegion::FinalBlock)));
  fixed.extend((png.len() - 12..png.len()).map(|i| (i, UnpngRegion::Iend)));

  for (i, region) in fixed {
    for flip in [0x01, 0x80, 0xFF] {
      let mut bad = png.clone();
      bad[i] ^= flip;
      let expected = Err(UnpngError::InvalidMagic(region));
      assert_eq!(unpng_parse(&bad), expected, "byte {i} ^ {flip:#04X}");
    }
  }
}
