//! Table-driven CRC computation and verification over named variants.
//!
//! A [`Crc`] engine is bound to one registered [`Variant`] (polynomial, seed,
//! input/output reflection, final XOR) and exposes two operations:
//!
//! - [`Crc::calc`]: the CRC of a byte sequence
//! - [`Crc::verify`]: whether data followed by its big-endian CRC code is intact
//!
//! The register width is derived from the polynomial and rounded up to 8, 16
//! or 32 bits.
//!
//! # Supported Variants
//!
//! | Name | Width | Polynomial | Use Cases |
//! |------|-------|------------|-----------|
//! | `crc8` | 8 | 0x07 | SMBus PEC, ATM HEC |
//! | `crc8maxim` | 8 | 0x31 | 1-Wire, iButton |
//! | `crc16arc` | 16 | 0x8005 | ARC, LHA |
//! | `crc16modbus` | 16 | 0x8005 | Modbus RTU |
//! | `crc16usb` | 16 | 0x8005 | USB packets |
//! | `crc16kermit` | 16 | 0x1021 | Kermit, Bluetooth |
//! | `crc16ccittfalse` | 16 | 0x1021 | IBM 3740, SD |
//! | `crc16xmodem` | 16 | 0x1021 | XMODEM, ZMODEM |
//! | `crc32` | 32 | 0x04C11DB7 | Ethernet, gzip, zip, PNG |
//! | `crc32c` | 32 | 0x1EDC6F41 | iSCSI, SCTP, ext4 |
//! | `crc32bzip2` | 32 | 0x04C11DB7 | bzip2 |
//! | `crc32mpeg2` | 32 | 0x04C11DB7 | MPEG-2 transport streams |
//!
//! Custom parameter sets can be built with [`Variant::new`].
//!
//! # Example
//!
//! ```rust
//! use crc_engine::Crc;
//!
//! let crc = Crc::new("crc32")?;
//! let code = crc.calc(&[0x01, 0x02]);
//! assert_eq!(code, 0xB6CC_4292);
//!
//! // Append the code big-endian and check the frame.
//! let framed = crc.append(&[0x01, 0x02]);
//! assert_eq!(framed, [0x01, 0x02, 0xB6, 0xCC, 0x42, 0x92]);
//! assert!(crc.verify(&framed)?);
//! # Ok::<(), crc_engine::CrcError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use;
//! the `alloc` feature keeps [`Crc::append`]:
//!
//! ```toml
//! [dependencies]
//! crc-engine = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod engine;
mod error;
mod params;
pub mod reference;
pub mod registry;
pub mod tables;
mod width;

#[cfg(all(test, feature = "alloc"))]
mod proptests;

pub use engine::{CodeBytes, Crc};
pub use error::CrcError;
pub use params::{CrcParams, Variant};
pub use registry::Algorithm;
// Re-export traits for convenience
pub use traits::{Checksum, VerificationError};
pub use width::{Width, bit_length, reflect};
