//! Non-cryptographic checksum traits.

use core::fmt::Debug;

use crate::VerificationError;

/// One-shot, non-cryptographic checksum algorithm.
///
/// Implementors are bound to a single parameter set at construction and never
/// mutate between calls, so a shared reference is all a caller needs.
///
/// # Usage
///
/// ```rust,ignore
/// use crc_engine::{Checksum, Crc};
///
/// let crc = Crc::new("crc32")?;
/// let code = crc.checksum(b"hello world");
/// assert!(crc.verify_detached(b"hello world", code).is_ok());
/// ```
///
/// # Implementor Requirements
///
/// - `checksum()` must be a pure function of `(self, data)`
/// - `output_size()` is the number of bytes the output occupies when serialized
pub trait Checksum {
  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Output size in bytes.
  ///
  /// - CRC-8: 1
  /// - CRC-16: 2
  /// - CRC-32: 4
  #[must_use]
  fn output_size(&self) -> usize;

  /// Compute the checksum of `data`.
  #[must_use]
  fn checksum(&self, data: &[u8]) -> Self::Output;

  /// Check `data` against a checksum carried out-of-band.
  ///
  /// # Errors
  ///
  /// Returns [`VerificationError`] when the recomputed checksum differs from
  /// `expected`.
  #[inline]
  fn verify_detached(&self, data: &[u8], expected: Self::Output) -> Result<(), VerificationError> {
    if self.checksum(data) == expected {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }
}
