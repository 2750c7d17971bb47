//! Differential fuzz target: table-driven engine vs. the bitwise reference
//! and the `crc` crate.

#![no_main]

use crc::{CRC_16_USB, CRC_16_XMODEM, CRC_32_ISO_HDLC};
use crc_engine::{Algorithm, Crc, reference};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  for algorithm in Algorithm::ALL {
    let crc = Crc::from_algorithm(algorithm);
    let ours = crc.calc(data);
    let bitwise = reference::bitwise(crc.variant().params(), data);
    assert_eq!(Some(ours), bitwise, "{algorithm} table/bitwise mismatch");
  }

  let usb = crc::Crc::<u16>::new(&CRC_16_USB).checksum(data);
  assert_eq!(Crc::from_algorithm(Algorithm::Crc16Usb).calc(data), u32::from(usb));

  let xmodem = crc::Crc::<u16>::new(&CRC_16_XMODEM).checksum(data);
  assert_eq!(Crc::from_algorithm(Algorithm::Crc16Xmodem).calc(data), u32::from(xmodem));

  let crc32 = crc::Crc::<u32>::new(&CRC_32_ISO_HDLC).checksum(data);
  assert_eq!(Crc::from_algorithm(Algorithm::Crc32).calc(data), crc32);
});
