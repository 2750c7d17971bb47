//! Const-fn lookup table generation.
//!
//! Every variant carries one 256-entry table, generated once at compile time
//! (built-in variants) or once at construction (custom variants).
//!
//! | Input order | Polynomial | Register | Step |
//! |-------------|------------|----------|------|
//! | reflected (LSB-first) | bit-reversed | byte in low bits | shift right |
//! | normal (MSB-first) | as published | byte in top bits | shift left, mask |

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::Width;

/// A per-byte lookup table.
pub type Table = [u32; 256];

/// Generate the lookup table for `polynomial` (normal form) at `width`.
///
/// With `reflected`, entries are produced directly in reflected form from the
/// bit-reversed polynomial; otherwise the polynomial is used as published and
/// each byte is processed from the top of the register.
#[must_use]
pub const fn generate(polynomial: u32, width: Width, reflected: bool) -> Table {
  let mut table = [0u32; 256];
  let poly = if reflected {
    width.reflect(polynomial & width.mask())
  } else {
    polynomial & width.mask()
  };

  let mut index = 0usize;
  while index < 256 {
    table[index] = if reflected {
      reflected_entry(poly, index as u8)
    } else {
      normal_entry(poly, width, index as u8)
    };
    index += 1;
  }

  table
}

/// One entry of a reflected table: eight LSB-first division steps.
#[must_use]
const fn reflected_entry(poly_reflected: u32, byte: u8) -> u32 {
  let mut crc = byte as u32;
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ poly_reflected } else { crc >> 1 };
    bit += 1;
  }
  crc
}

/// One entry of a normal table: the byte in the top of the register, eight
/// MSB-first division steps, masked to `width` after each step.
#[must_use]
const fn normal_entry(poly: u32, width: Width, byte: u8) -> u32 {
  let mask = width.mask();
  let top = width.top_bit();
  let mut crc = (byte as u32) << width.top_shift();
  let mut bit = 0;
  while bit < 8 {
    crc = if crc & top != 0 {
      ((crc << 1) ^ poly) & mask
    } else {
      (crc << 1) & mask
    };
    bit += 1;
  }
  crc
}
