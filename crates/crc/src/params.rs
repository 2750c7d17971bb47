//! CRC variant parameters.
//!
//! Parameters follow the conventions of the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/): the
//! polynomial is given in normal form without the implicit high bit, and
//! `initial`/`xor_out` are given unreflected.

use core::fmt;

use crate::{
  CrcError, Width,
  tables::{self, Table},
};

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `name`: registry key (e.g. `"crc32"`)
/// - `polynomial`: generator polynomial in normal (MSB-first) bit order
/// - `initial`: initial value for the CRC register
/// - `reflect_in`: process each input byte LSB-first
/// - `reflect_out`: bit-reverse the final register before the XOR
/// - `xor_out`: value XORed into the final CRC
///
/// The width is not a parameter: it is derived from the polynomial when a
/// [`Variant`] is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Registry key.
  pub name: &'static str,
  /// Generator polynomial (normal form, without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u32,
  /// Reflect input bytes.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u32,
}

impl CrcParams {
  /// CRC-8/SMBUS - SMBus PEC, ATM HEC
  pub const CRC8_SMBUS: Self = Self {
    name: "crc8",
    polynomial: 0x07,
    initial: 0x00,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
  };

  /// CRC-8/MAXIM-DOW - 1-Wire, iButton
  pub const CRC8_MAXIM: Self = Self {
    name: "crc8maxim",
    polynomial: 0x31,
    initial: 0x00,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x00,
  };

  /// CRC-16/ARC (aka CRC-16/IBM) - LHA, ARC
  pub const CRC16_ARC: Self = Self {
    name: "crc16arc",
    polynomial: 0x8005,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-16/MODBUS
  pub const CRC16_MODBUS: Self = Self {
    name: "crc16modbus",
    polynomial: 0x8005,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-16/USB - USB token and data packets
  pub const CRC16_USB: Self = Self {
    name: "crc16usb",
    polynomial: 0x8005,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF,
  };

  /// CRC-16/KERMIT (aka CRC-16/CCITT) - Kermit, Bluetooth
  pub const CRC16_KERMIT: Self = Self {
    name: "crc16kermit",
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-16/IBM-3740 (aka CRC-16/CCITT-FALSE)
  pub const CRC16_CCITT_FALSE: Self = Self {
    name: "crc16ccittfalse",
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };

  /// CRC-16/XMODEM - XMODEM, ZMODEM, YMODEM
  pub const CRC16_XMODEM: Self = Self {
    name: "crc16xmodem",
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };

  /// CRC-32/ISO-HDLC - Ethernet, gzip, PNG, zip
  pub const CRC32_ISO_HDLC: Self = Self {
    name: "crc32",
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/ISCSI (Castagnoli) - iSCSI, SCTP, ext4, Btrfs
  pub const CRC32C: Self = Self {
    name: "crc32c",
    polynomial: 0x1EDC_6F41,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/BZIP2
  pub const CRC32_BZIP2: Self = Self {
    name: "crc32bzip2",
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/MPEG-2
  pub const CRC32_MPEG2: Self = Self {
    name: "crc32mpeg2",
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
  };
}

/// A validated parameter set with its derived width and lookup table.
///
/// Built once and never mutated. Built-in variants live in the
/// [registry](crate::registry); [`Variant::new`] builds custom ones.
///
/// ```
/// use crc_engine::{Crc, CrcParams, Variant, Width};
///
/// let arc = Variant::new(CrcParams::CRC16_ARC)?;
/// assert_eq!(arc.width(), Width::W16);
/// assert_eq!(Crc::with_variant(&arc).calc(b"123456789"), 0xBB3D);
/// # Ok::<(), crc_engine::CrcError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Variant {
  params: CrcParams,
  width: Width,
  table: Table,
}

impl Variant {
  /// Validate `params`, derive the width and build the lookup table.
  ///
  /// `initial` and `xor_out` are truncated to the derived width.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError::UnsupportedWidth`] when the polynomial does not fit
  /// an 8, 16 or 32-bit register.
  pub const fn new(params: CrcParams) -> Result<Self, CrcError> {
    let width = match Width::from_polynomial(params.polynomial) {
      Ok(width) => width,
      Err(err) => return Err(err),
    };
    let mask = width.mask();
    let params = CrcParams {
      initial: params.initial & mask,
      xor_out: params.xor_out & mask,
      ..params
    };
    // Width check above guarantees the polynomial fits in 32 bits.
    let table = tables::generate(params.polynomial as u32, width, params.reflect_in);
    Ok(Self { params, width, table })
  }

  /// The parameters this variant was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// Registry key.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.params.name
  }

  /// Register width derived from the polynomial.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> Width {
    self.width
  }

  /// Generator polynomial in normal form.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.params.polynomial as u32
  }

  /// The precomputed per-byte lookup table.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &Table {
    &self.table
  }

  /// Register value before the first byte.
  ///
  /// Reflected variants hold the register bit-reversed, so the seed is
  /// reflected on load.
  #[inline]
  #[must_use]
  pub(crate) const fn initial_register(&self) -> u32 {
    if self.params.reflect_in {
      self.width.reflect(self.params.initial)
    } else {
      self.params.initial
    }
  }

  /// Turn a final register value into the published CRC.
  ///
  /// The register is already in reflected orientation when `reflect_in` is
  /// set, so it is reversed only when the output orientation differs.
  #[inline]
  #[must_use]
  pub(crate) const fn finalize(&self, register: u32) -> u32 {
    let register = register & self.width.mask();
    let out = if self.params.reflect_in != self.params.reflect_out {
      self.width.reflect(register)
    } else {
      register
    };
    (out ^ self.params.xor_out) & self.width.mask()
  }
}

impl fmt::Debug for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Variant")
      .field("params", &self.params)
      .field("width", &self.width)
      .finish_non_exhaustive()
  }
}

impl fmt::Display for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = self.width.bytes() * 2;
    write!(
      f,
      "{} (width={} poly=0x{:0digits$X} init=0x{:0digits$X} refin={} refout={} xorout=0x{:0digits$X})",
      self.params.name,
      self.width.bits(),
      self.params.polynomial,
      self.params.initial,
      self.params.reflect_in,
      self.params.reflect_out,
      self.params.xor_out,
    )
  }
}
