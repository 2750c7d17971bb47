//! Error type for variant resolution and CRC verification.

use thiserror::Error;

/// Errors raised while resolving a variant or checking framed data.
///
/// All of these are programmer or configuration errors. They are reported
/// synchronously and no partial result accompanies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum CrcError {
  /// The variant name is not present in the registry.
  #[error("unknown CRC variant")]
  UnknownVariant,

  /// Framed input is too short to hold the CRC field.
  #[error("input of {len} bytes cannot hold a {required}-byte CRC field")]
  InvalidInput {
    /// Length of the rejected input.
    len: usize,
    /// Bytes occupied by the CRC field alone.
    required: usize,
  },

  /// The polynomial's bit length does not round up to 8, 16 or 32.
  #[error("polynomial bit length {bits} is outside the supported widths (8, 16, 32)")]
  UnsupportedWidth {
    /// Bit length of the rejected polynomial.
    bits: u32,
  },
}
