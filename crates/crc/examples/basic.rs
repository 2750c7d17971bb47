//! Basic usage: compute a CRC, append it, verify the frame.
//!
//! Run with: `cargo run --example basic -p crc-engine`

use crc_engine::{Algorithm, Crc, CrcError};

fn main() -> Result<(), CrcError> {
  println!("=== CRC Basic Examples ===\n");

  let data = [0x01, 0x02];

  for name in ["crc16usb", "crc16xmodem", "crc32"] {
    let crc = Crc::new(name)?;
    let code = crc.calc(&data);
    let digits = crc.width().bytes() * 2;
    println!("{name:<12} calc = 0x{code:0digits$X}");

    let framed = crc.append(&data);
    println!("{name:<12} framed = {framed:02X?}");
    println!("{name:<12} verify = {}", crc.verify(&framed)?);

    let mut corrupted = framed.clone();
    if let Some(first) = corrupted.first_mut() {
      *first ^= 0x01;
    }
    println!("{name:<12} verify (1 bit flipped) = {}\n", crc.verify(&corrupted)?);
  }

  println!("--- Registry ---\n");
  for algorithm in Algorithm::ALL {
    println!("{}", algorithm.variant());
  }

  if let Err(err) = Crc::new("crc64") {
    println!("\ncrc64: {err}");
  }

  Ok(())
}
