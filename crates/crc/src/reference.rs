//! Bitwise reference implementation.
//!
//! Processes input one bit at a time straight from the Rocksoft model, with
//! no lookup table and the register always held MSB-first. It is slow (~8
//! operations per bit) and exists as a test oracle: the table-driven engine
//! must agree with it for every variant and every input.
//!
//! | Parameter | Handling |
//! |-----------|----------|
//! | `refin` | each input byte is bit-reversed before it enters the register |
//! | `refout` | the final register is bit-reversed across `width` bits |
//! | `xorout` | XORed in after the optional output reflection |

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::{CrcParams, Width};

/// Bitwise CRC over `data` for `params`.
///
/// Returns `None` when the polynomial does not fit a supported width.
#[must_use]
pub const fn bitwise(params: &CrcParams, data: &[u8]) -> Option<u32> {
  let width = match Width::from_polynomial(params.polynomial) {
    Ok(width) => width,
    Err(_) => return None,
  };
  let mask = width.mask();
  let top = width.top_bit();
  let shift = width.top_shift();
  let poly = params.polynomial as u32;

  let mut crc = params.initial & mask;
  let mut i = 0usize;
  while i < data.len() {
    let byte = if params.reflect_in { data[i].reverse_bits() } else { data[i] };
    crc ^= (byte as u32) << shift;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & top != 0 {
        ((crc << 1) ^ poly) & mask
      } else {
        (crc << 1) & mask
      };
      bit += 1;
    }
    i += 1;
  }

  if params.reflect_out {
    crc = width.reflect(crc);
  }
  Some((crc ^ params.xor_out) & mask)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Catalogue check values over "123456789". If any of these fail, the build fails.

const CHECK_INPUT: &[u8] = b"123456789";

const fn check(params: CrcParams, expected: u32) -> bool {
  match bitwise(&params, CHECK_INPUT) {
    Some(value) => value == expected,
    None => false,
  }
}

const _: () = assert!(check(CrcParams::CRC8_SMBUS, 0xF4));
const _: () = assert!(check(CrcParams::CRC8_MAXIM, 0xA1));
const _: () = assert!(check(CrcParams::CRC16_ARC, 0xBB3D));
const _: () = assert!(check(CrcParams::CRC16_MODBUS, 0x4B37));
const _: () = assert!(check(CrcParams::CRC16_USB, 0xB4C8));
const _: () = assert!(check(CrcParams::CRC16_KERMIT, 0x2189));
const _: () = assert!(check(CrcParams::CRC16_CCITT_FALSE, 0x29B1));
const _: () = assert!(check(CrcParams::CRC16_XMODEM, 0x31C3));
const _: () = assert!(check(CrcParams::CRC32_ISO_HDLC, 0xCBF4_3926));
const _: () = assert!(check(CrcParams::CRC32C, 0xE306_9283));
const _: () = assert!(check(CrcParams::CRC32_BZIP2, 0xFC89_1918));
const _: () = assert!(check(CrcParams::CRC32_MPEG2, 0x0376_E6E7));
