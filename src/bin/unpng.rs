//! Parses an unPNG file and prints what's in its header.
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the decoder's own logging.

use std::{path::Path, process::ExitCode};

use unpng::unpng_parse;

fn main() -> ExitCode {
  env_logger::init();

  let args: Vec<String> = std::env::args().collect();
  if args.len() != 2 {
    eprintln!("USAGE: {} input.un.png", args.first().map(String::as_str).unwrap_or("unpng"));
    return ExitCode::FAILURE;
  }
  let path = Path::new(&args[1]);

  let bytes = match std::fs::read(path) {
    Ok(bytes) => bytes,
    Err(e) => {
      eprintln!("{}: {e}", path.display());
      return ExitCode::FAILURE;
    }
  };
  log::debug!("read {} bytes from `{}`", bytes.len(), path.display());

  let image = match unpng_parse(&bytes) {
    Ok(image) => image,
    Err(e) => {
      eprintln!("unpng_parse: {} ({e})", e.code());
      return ExitCode::FAILURE;
    }
  };

  let [r, g, b, a] = image.pixel_format().channel_masks();
  println!("Parsed unPNG!");
  println!("width={}", image.width());
  println!("height={}", image.height());
  println!("stride={}", image.row_stride());
  println!("pixfmt={:?}", image.pixel_format());
  println!("masks=r:{r:08X} g:{g:08X} b:{b:08X} a:{a:08X}");
  ExitCode::SUCCESS
}
