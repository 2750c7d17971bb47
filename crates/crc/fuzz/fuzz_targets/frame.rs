//! Fuzz target for framing and verification.
//!
//! Tests that:
//! - No panics on arbitrary input, for every variant
//! - `verify` agrees with `residue == 0` and with recomputing `calc`
//! - An appended code always verifies, and a flipped bit never does

#![no_main]

use arbitrary::Arbitrary;
use crc_engine::{Algorithm, Crc, CrcError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  variant: u8,
  data: Vec<u8>,
  flip: usize,
}

fuzz_target!(|input: Input| {
  let algorithm = Algorithm::ALL[usize::from(input.variant) % Algorithm::ALL.len()];
  let crc = Crc::from_algorithm(algorithm);
  let data = &input.data;

  // Treat the raw input as a frame.
  match crc.split(data) {
    Ok((body, embedded)) => {
      let expected = crc.calc(body) == embedded;
      assert_eq!(crc.verify(data), Ok(expected), "{algorithm} verify/calc mismatch");
      assert_eq!(crc.residue(data).map(|r| r == 0), Ok(expected), "{algorithm} residue mismatch");
    }
    Err(err) => {
      assert!(data.len() < crc.width().bytes());
      assert!(matches!(err, CrcError::InvalidInput { .. }));
    }
  }

  // Frame it properly.
  let framed = crc.append(data);
  assert_eq!(crc.verify(&framed), Ok(true), "{algorithm} appended code rejected");

  let mut corrupted = framed;
  let bit = input.flip % (corrupted.len() * 8);
  corrupted[bit / 8] ^= 1 << (bit % 8);
  assert_eq!(crc.verify(&corrupted), Ok(false), "{algorithm} single-bit flip missed");
});
