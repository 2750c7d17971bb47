//! Built-in variant registry.
//!
//! The registry is a closed, immutable set of [`Variant`]s constructed during
//! const evaluation. A built-in entry with an unsupported width fails the build,
//! so lookups never have to deal with one.
//!
//! # Variants
//!
//! | Name | Polynomial | Init | RefIn/Out | XorOut | Check (`"123456789"`) |
//! |------|------------|------|-----------|--------|-----------------------|
//! | `crc8` | 0x07 | 0x00 | no | 0x00 | 0xF4 |
//! | `crc8maxim` | 0x31 | 0x00 | yes | 0x00 | 0xA1 |
//! | `crc16arc` | 0x8005 | 0x0000 | yes | 0x0000 | 0xBB3D |
//! | `crc16modbus` | 0x8005 | 0xFFFF | yes | 0x0000 | 0x4B37 |
//! | `crc16usb` | 0x8005 | 0xFFFF | yes | 0xFFFF | 0xB4C8 |
//! | `crc16kermit` | 0x1021 | 0x0000 | yes | 0x0000 | 0x2189 |
//! | `crc16ccittfalse` | 0x1021 | 0xFFFF | no | 0x0000 | 0x29B1 |
//! | `crc16xmodem` | 0x1021 | 0x0000 | no | 0x0000 | 0x31C3 |
//! | `crc32` | 0x04C11DB7 | 0xFFFFFFFF | yes | 0xFFFFFFFF | 0xCBF43926 |
//! | `crc32c` | 0x1EDC6F41 | 0xFFFFFFFF | yes | 0xFFFFFFFF | 0xE3069283 |
//! | `crc32bzip2` | 0x04C11DB7 | 0xFFFFFFFF | no | 0xFFFFFFFF | 0xFC891918 |
//! | `crc32mpeg2` | 0x04C11DB7 | 0xFFFFFFFF | no | 0x00000000 | 0x0376E6E7 |

use core::{fmt, str::FromStr};

use crate::{CrcError, CrcParams, Variant};

const fn builtin(params: CrcParams) -> Variant {
  match Variant::new(params) {
    Ok(variant) => variant,
    Err(_) => panic!("built-in CRC variant has an unsupported width"),
  }
}

static VARIANTS: [Variant; Algorithm::ALL.len()] = [
  builtin(CrcParams::CRC8_SMBUS),
  builtin(CrcParams::CRC8_MAXIM),
  builtin(CrcParams::CRC16_ARC),
  builtin(CrcParams::CRC16_MODBUS),
  builtin(CrcParams::CRC16_USB),
  builtin(CrcParams::CRC16_KERMIT),
  builtin(CrcParams::CRC16_CCITT_FALSE),
  builtin(CrcParams::CRC16_XMODEM),
  builtin(CrcParams::CRC32_ISO_HDLC),
  builtin(CrcParams::CRC32C),
  builtin(CrcParams::CRC32_BZIP2),
  builtin(CrcParams::CRC32_MPEG2),
];

/// The registered variants, as a closed enum.
///
/// Use this where the variant is known statically; [`lookup`] and
/// [`Crc::new`](crate::Crc::new) take the string form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// `crc8`: CRC-8/SMBUS
  Crc8,
  /// `crc8maxim`: CRC-8/MAXIM-DOW
  Crc8Maxim,
  /// `crc16arc`: CRC-16/ARC
  Crc16Arc,
  /// `crc16modbus`: CRC-16/MODBUS
  Crc16Modbus,
  /// `crc16usb`: CRC-16/USB
  Crc16Usb,
  /// `crc16kermit`: CRC-16/KERMIT
  Crc16Kermit,
  /// `crc16ccittfalse`: CRC-16/IBM-3740
  Crc16CcittFalse,
  /// `crc16xmodem`: CRC-16/XMODEM
  Crc16Xmodem,
  /// `crc32`: CRC-32/ISO-HDLC
  Crc32,
  /// `crc32c`: CRC-32/ISCSI
  Crc32C,
  /// `crc32bzip2`: CRC-32/BZIP2
  Crc32Bzip2,
  /// `crc32mpeg2`: CRC-32/MPEG-2
  Crc32Mpeg2,
}

impl Algorithm {
  /// Every registered algorithm, in registry order.
  pub const ALL: [Self; 12] = [
    Self::Crc8,
    Self::Crc8Maxim,
    Self::Crc16Arc,
    Self::Crc16Modbus,
    Self::Crc16Usb,
    Self::Crc16Kermit,
    Self::Crc16CcittFalse,
    Self::Crc16Xmodem,
    Self::Crc32,
    Self::Crc32C,
    Self::Crc32Bzip2,
    Self::Crc32Mpeg2,
  ];

  /// The registry entry for this algorithm.
  #[must_use]
  pub fn variant(self) -> &'static Variant {
    let [
      crc8,
      crc8_maxim,
      crc16_arc,
      crc16_modbus,
      crc16_usb,
      crc16_kermit,
      crc16_ccitt_false,
      crc16_xmodem,
      crc32,
      crc32c,
      crc32_bzip2,
      crc32_mpeg2,
    ] = &VARIANTS;
    match self {
      Self::Crc8 => crc8,
      Self::Crc8Maxim => crc8_maxim,
      Self::Crc16Arc => crc16_arc,
      Self::Crc16Modbus => crc16_modbus,
      Self::Crc16Usb => crc16_usb,
      Self::Crc16Kermit => crc16_kermit,
      Self::Crc16CcittFalse => crc16_ccitt_false,
      Self::Crc16Xmodem => crc16_xmodem,
      Self::Crc32 => crc32,
      Self::Crc32C => crc32c,
      Self::Crc32Bzip2 => crc32_bzip2,
      Self::Crc32Mpeg2 => crc32_mpeg2,
    }
  }

  /// Registry key, e.g. `"crc16usb"`.
  #[inline]
  #[must_use]
  pub fn name(self) -> &'static str {
    self.variant().name()
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Algorithm {
  type Err = CrcError;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|algorithm| algorithm.name() == name)
      .ok_or_else(|| unknown(name))
  }
}

/// Resolve a variant by its registry key.
///
/// Names are matched exactly (`"crc16usb"`, not `"CRC-16/USB"`).
///
/// # Errors
///
/// Returns [`CrcError::UnknownVariant`] when `name` is not registered.
///
/// ```
/// use crc_engine::{CrcError, Width, registry};
///
/// assert_eq!(registry::lookup("crc16xmodem")?.width(), Width::W16);
/// assert_eq!(registry::lookup("crc64").unwrap_err(), CrcError::UnknownVariant);
/// # Ok::<(), CrcError>(())
/// ```
pub fn lookup(name: &str) -> Result<&'static Variant, CrcError> {
  VARIANTS
    .iter()
    .find(|variant| variant.name() == name)
    .ok_or_else(|| unknown(name))
}

/// All built-in variants, in registry order.
#[inline]
#[must_use]
pub fn variants() -> &'static [Variant] {
  &VARIANTS
}

/// Registry keys of all built-in variants.
pub fn names() -> impl Iterator<Item = &'static str> {
  VARIANTS.iter().map(|variant| variant.name())
}

fn unknown(name: &str) -> CrcError {
  tracing::debug!(name, "unknown CRC variant");
  CrcError::UnknownVariant
}
