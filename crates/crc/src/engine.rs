//! Table-driven CRC engine.
//!
//! A [`Crc`] is bound to one [`Variant`] for its whole life and holds nothing
//! else, so it is `Copy`, `Send` and `Sync` and can be created per use site.
//!
//! # Framing
//!
//! [`Crc::verify`] consumes data followed by its CRC code, written
//! most-significant byte first in `width / 8` bytes:
//!
//! ```text
//! [ data ............ ][ code (big-endian, 1/2/4 bytes) ]
//! ```

// SAFETY: Table indices are masked to 0..=255 and every table has 256 entries.
#![allow(clippy::indexing_slicing)]

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::fmt;

use traits::Checksum;

use crate::{Algorithm, CrcError, Variant, Width, registry};

/// A CRC engine bound to a single variant.
///
/// # Examples
///
/// ```
/// use crc_engine::Crc;
///
/// let crc = Crc::new("crc16xmodem")?;
/// let code = crc.calc(&[0x01, 0x02]);
/// assert_eq!(code, 0x1373);
/// assert!(crc.verify(&[0x01, 0x02, 0x13, 0x73])?);
/// assert!(!crc.verify(&[0x01, 0x02, 0x13, 0x74])?);
/// # Ok::<(), crc_engine::CrcError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc<'v> {
  variant: &'v Variant,
}

impl Crc<'static> {
  /// Bind an engine to a registered variant by name.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::UnknownVariant`] when `name` is not registered.
  pub fn new(name: &str) -> Result<Self, CrcError> {
    registry::lookup(name).map(Self::with_variant)
  }

  /// Bind an engine to a registered variant.
  #[inline]
  #[must_use]
  pub fn from_algorithm(algorithm: Algorithm) -> Self {
    Self::with_variant(algorithm.variant())
  }
}

impl<'v> Crc<'v> {
  /// Bind an engine to any variant, including ones built at runtime with
  /// [`Variant::new`].
  #[inline]
  #[must_use]
  pub const fn with_variant(variant: &'v Variant) -> Self {
    Self { variant }
  }

  /// The bound variant.
  #[inline]
  #[must_use]
  pub const fn variant(&self) -> &'v Variant {
    self.variant
  }

  /// Register width of the bound variant.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> Width {
    self.variant.width()
  }

  /// Compute the CRC of `data`.
  ///
  /// The result always lies in `0..=width.mask()`. Empty input yields the
  /// seed run through the output stage.
  #[must_use]
  pub fn calc(&self, data: &[u8]) -> u32 {
    let variant = self.variant;
    let table = variant.table();
    let mut register = variant.initial_register();

    if variant.params().reflect_in {
      for &byte in data {
        register = table[((register ^ u32::from(byte)) & 0xFF) as usize] ^ (register >> 8);
      }
    } else {
      let width = variant.width();
      let shift = width.top_shift();
      let mask = width.mask();
      for &byte in data {
        let index = ((register ^ (u32::from(byte) << shift)) >> shift) & 0xFF;
        register = (table[index as usize] ^ (register << 8)) & mask;
      }
    }

    variant.finalize(register)
  }

  /// Split framed input into its data portion and the embedded code.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::InvalidInput`] when `framed` is shorter than the
  /// CRC field.
  pub fn split<'d>(&self, framed: &'d [u8]) -> Result<(&'d [u8], u32), CrcError> {
    let required = self.width().bytes();
    let Some(at) = framed.len().checked_sub(required) else {
      tracing::debug!(
        variant = self.variant.name(),
        len = framed.len(),
        required,
        "input too short for CRC field"
      );
      return Err(CrcError::InvalidInput {
        len: framed.len(),
        required,
      });
    };
    let (data, code) = framed.split_at(at);
    let embedded = code.iter().fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte));
    Ok((data, embedded))
  }

  /// Residue-style verification: `calc(data) XOR embedded`.
  ///
  /// Zero means the embedded code matches. A non-zero residue carries no
  /// meaning beyond "mismatch".
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::InvalidInput`] when `framed` is shorter than the
  /// CRC field.
  pub fn residue(&self, framed: &[u8]) -> Result<u32, CrcError> {
    let (data, embedded) = self.split(framed)?;
    Ok(self.calc(data) ^ embedded)
  }

  /// Check data carrying its own CRC code (big-endian, appended).
  ///
  /// Returns `Ok(true)` when the embedded code equals the CRC of the data
  /// portion.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::InvalidInput`] when `framed` is shorter than the
  /// CRC field.
  pub fn verify(&self, framed: &[u8]) -> Result<bool, CrcError> {
    let residue = self.residue(framed)?;
    if residue != 0 {
      tracing::trace!(variant = self.variant.name(), residue, "CRC mismatch");
    }
    Ok(residue == 0)
  }

  /// Big-endian encoding of `code` in `width / 8` bytes.
  ///
  /// Bits above the width are dropped.
  #[inline]
  #[must_use]
  pub fn code_bytes(&self, code: u32) -> CodeBytes {
    CodeBytes::new(code, self.width())
  }

  /// Copy `data` and append its CRC code.
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn append(&self, data: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(data.len() + self.width().bytes());
    framed.extend_from_slice(data);
    self.append_to(&mut framed);
    framed
  }

  /// Append the CRC code of the current contents of `buf` to `buf`.
  #[cfg(feature = "alloc")]
  pub fn append_to(&self, buf: &mut Vec<u8>) {
    let code = self.code_bytes(self.calc(buf));
    buf.extend_from_slice(code.as_slice());
  }
}

impl Checksum for Crc<'_> {
  type Output = u32;

  #[inline]
  fn output_size(&self) -> usize {
    self.width().bytes()
  }

  #[inline]
  fn checksum(&self, data: &[u8]) -> u32 {
    self.calc(data)
  }
}

impl fmt::Display for Crc<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.variant.name())
  }
}

/// A CRC code serialized big-endian, 1 to 4 bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodeBytes {
  bytes: [u8; 4],
  len: usize,
}

impl CodeBytes {
  const fn new(code: u32, width: Width) -> Self {
    // Left-align so the significant bytes come first.
    let aligned = (code & width.mask()) << (32 - width.bits());
    Self {
      bytes: aligned.to_be_bytes(),
      len: width.bytes(),
    }
  }

  /// The encoded bytes.
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[u8] {
    self.bytes.split_at(self.len).0
  }
}

impl AsRef<[u8]> for CodeBytes {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_slice()
  }
}
