//! Error types shared by checksum engines.
//!
//! Individual crates define richer errors for their own failure modes.

use core::fmt;

/// Verification failed.
///
/// Returned when a recomputed checksum does not match the expected one.
/// Carries no detail: the caller already holds both the data and the code.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: u32, expected: u32) -> Result<(), VerificationError> {
///   if computed == expected {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// assert!(verify(0xB6CC_4292, 0xB6CC_4292).is_ok());
/// assert!(verify(0xB6CC_4292, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("checksum verification failed")
  }
}

impl core::error::Error for VerificationError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(VerificationError::new().to_string(), "checksum verification failed");
  }

  #[test]
  fn debug_impl() {
    assert_eq!(format!("{:?}", VerificationError::new()), "VerificationError");
  }

  #[test]
  fn default_impl() {
    let err: VerificationError = Default::default();
    assert_eq!(err, VerificationError::new());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send_sync<T: Send + Sync + core::error::Error>() {}
    assert_send_sync::<VerificationError>();
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(core::mem::size_of::<VerificationError>(), 0);
  }
}
