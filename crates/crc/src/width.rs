//! Register width, masking and bit-reflection helpers.

use crate::CrcError;

/// Width of a CRC register in bits.
///
/// Widths are derived from the generator polynomial, never configured
/// directly: the polynomial's bit length is rounded up to the next supported
/// size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
  /// 8-bit register.
  W8,
  /// 16-bit register.
  W16,
  /// 32-bit register.
  W32,
}

impl Width {
  /// Derive the register width from a polynomial in normal (MSB-first) form.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::UnsupportedWidth`] for a zero polynomial or one
  /// whose highest set bit lies above bit 31.
  ///
  /// # Examples
  ///
  /// ```
  /// use crc_engine::Width;
  ///
  /// assert_eq!(Width::from_polynomial(0x07), Ok(Width::W8));
  /// assert_eq!(Width::from_polynomial(0x1021), Ok(Width::W16));
  /// assert_eq!(Width::from_polynomial(0x04C1_1DB7), Ok(Width::W32));
  /// assert!(Width::from_polynomial(0x1_0000_0000).is_err());
  /// ```
  pub const fn from_polynomial(polynomial: u64) -> Result<Self, CrcError> {
    match bit_length(polynomial) {
      1..=8 => Ok(Self::W8),
      9..=16 => Ok(Self::W16),
      17..=32 => Ok(Self::W32),
      bits => Err(CrcError::UnsupportedWidth { bits }),
    }
  }

  /// Number of bits in the register.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::W8 => 8,
      Self::W16 => 16,
      Self::W32 => 32,
    }
  }

  /// Number of bytes a CRC code occupies when appended to data.
  #[inline]
  #[must_use]
  pub const fn bytes(self) -> usize {
    match self {
      Self::W8 => 1,
      Self::W16 => 2,
      Self::W32 => 4,
    }
  }

  /// `2^width - 1`.
  #[inline]
  #[must_use]
  pub const fn mask(self) -> u32 {
    match self {
      Self::W8 => 0xFF,
      Self::W16 => 0xFFFF,
      Self::W32 => 0xFFFF_FFFF,
    }
  }

  /// Shift that moves a byte into the top of the register.
  #[inline]
  #[must_use]
  pub(crate) const fn top_shift(self) -> u32 {
    self.bits() - 8
  }

  /// The most significant bit of the register.
  #[inline]
  #[must_use]
  pub(crate) const fn top_bit(self) -> u32 {
    1 << (self.bits() - 1)
  }

  /// Bit-reverse the low `width` bits of a register value.
  #[inline]
  #[must_use]
  pub(crate) const fn reflect(self, value: u32) -> u32 {
    value.reverse_bits() >> (32 - self.bits())
  }
}

/// Position of the highest set bit, counting from 1. Zero has bit length 0.
///
/// ```
/// use crc_engine::bit_length;
///
/// assert_eq!(bit_length(0), 0);
/// assert_eq!(bit_length(0x8005), 16);
/// assert_eq!(bit_length(0x04C1_1DB7), 27);
/// ```
#[inline]
#[must_use]
pub const fn bit_length(value: u64) -> u32 {
  u64::BITS - value.leading_zeros()
}

/// Reflect (bit-reverse) the lower `bits` bits of `value`.
///
/// Bits above `bits` are discarded. `bits` is clamped to 64.
///
/// ```
/// use crc_engine::reflect;
///
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// assert_eq!(reflect(0b0001, 4), 0b1000);
/// ```
#[must_use]
pub const fn reflect(value: u64, bits: u32) -> u64 {
  let bits = if bits > u64::BITS { u64::BITS } else { bits };
  if bits == 0 {
    return 0;
  }
  value.reverse_bits() >> (u64::BITS - bits)
}
