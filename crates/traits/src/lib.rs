//! Core checksum traits for the crc-engine workspace.
//!
//! This crate provides the seam that checksum engines conform to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | One-shot, non-cryptographic checksums | CRC-8, CRC-16, CRC-32 |
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error for a checksum that does not match
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::Checksum;
pub use error::VerificationError;
