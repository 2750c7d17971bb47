//! Contract-level invariants: framing, errors, custom variants, sharing.

use std::{sync::Arc, thread};

use crc_engine::{Algorithm, Checksum, Crc, CrcError, CrcParams, Variant, Width, registry};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

#[test]
fn append_then_verify_all_variants() {
  let lengths = [0usize, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024];
  let seeds = [0u64, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

  for algorithm in Algorithm::ALL {
    let crc = Crc::from_algorithm(algorithm);
    for &len in &lengths {
      for &seed in &seeds {
        let data = gen_bytes(len, seed ^ len as u64);
        let framed = crc.append(&data);
        assert_eq!(framed.len(), len + crc.width().bytes());
        assert_eq!(crc.verify(&framed), Ok(true), "{algorithm} len={len}");

        let (body, code) = crc.split(&framed).unwrap();
        assert_eq!(body, &data[..]);
        assert_eq!(code, crc.calc(&data));
      }
    }
  }
}

#[test]
fn every_single_bit_flip_is_detected() {
  let data = gen_bytes(24, 0x5eed);
  for algorithm in Algorithm::ALL {
    let crc = Crc::from_algorithm(algorithm);
    let framed = crc.append(&data);
    for byte in 0..framed.len() {
      for bit in 0..8 {
        let mut corrupted = framed.clone();
        corrupted[byte] ^= 1 << bit;
        assert_eq!(
          crc.verify(&corrupted),
          Ok(false),
          "{algorithm} byte={byte} bit={bit}"
        );
      }
    }
  }
}

#[test]
fn short_frames_are_invalid_input() {
  for algorithm in Algorithm::ALL {
    let crc = Crc::from_algorithm(algorithm);
    let required = crc.width().bytes();
    for len in 0..required {
      let framed = vec![0xA5; len];
      assert_eq!(crc.verify(&framed), Err(CrcError::InvalidInput { len, required }));
      assert_eq!(crc.residue(&framed), Err(CrcError::InvalidInput { len, required }));
    }
  }
}

#[test]
fn widths_follow_polynomial() {
  let expected = [
    (Algorithm::Crc8, Width::W8),
    (Algorithm::Crc8Maxim, Width::W8),
    (Algorithm::Crc16Usb, Width::W16),
    (Algorithm::Crc16Xmodem, Width::W16),
    (Algorithm::Crc32, Width::W32),
    (Algorithm::Crc32C, Width::W32),
  ];
  for (algorithm, width) in expected {
    let crc = Crc::from_algorithm(algorithm);
    assert_eq!(crc.width(), width);
    assert_eq!(crc.output_size(), width.bytes());
  }
}

#[test]
fn string_and_enum_construction_agree() {
  for name in registry::names() {
    let by_name = Crc::new(name).unwrap();
    let by_enum = Crc::from_algorithm(name.parse().unwrap());
    assert_eq!(by_name, by_enum);
    assert_eq!(by_name.to_string(), name);
  }
}

#[test]
fn unsupported_width_is_rejected_at_construction() {
  let crc64 = CrcParams {
    name: "crc64xz",
    polynomial: 0x42F0_E1EB_A9EA_3693,
    initial: 0,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0,
  };
  assert_eq!(Variant::new(crc64).unwrap_err(), CrcError::UnsupportedWidth { bits: 63 });

  let zero = CrcParams {
    polynomial: 0,
    ..CrcParams::CRC8_SMBUS
  };
  assert_eq!(Variant::new(zero).unwrap_err(), CrcError::UnsupportedWidth { bits: 0 });
}

#[test]
fn custom_variant_matches_registered_twin() {
  let twin = Variant::new(CrcParams {
    name: "my-usb",
    ..CrcParams::CRC16_USB
  })
  .unwrap();
  let custom = Crc::with_variant(&twin);
  let builtin = Crc::from_algorithm(Algorithm::Crc16Usb);

  for len in [0usize, 1, 9, 100] {
    let data = gen_bytes(len, 7);
    assert_eq!(custom.calc(&data), builtin.calc(&data));
  }
  assert_eq!(twin.table(), builtin.variant().table());
}

#[test]
fn concurrent_engines_share_the_registry() {
  let data = Arc::new(gen_bytes(4096, 42));
  let expected: Vec<u32> = Algorithm::ALL
    .iter()
    .map(|&algorithm| Crc::from_algorithm(algorithm).calc(&data))
    .collect();

  let handles: Vec<_> = (0..8)
    .map(|_| {
      let data = Arc::clone(&data);
      thread::spawn(move || {
        Algorithm::ALL
          .iter()
          .map(|&algorithm| Crc::from_algorithm(algorithm).calc(&data))
          .collect::<Vec<u32>>()
      })
    })
    .collect();

  for handle in handles {
    assert_eq!(handle.join().unwrap(), expected);
  }
}

#[test]
fn registry_variants_are_static() {
  let first = registry::lookup("crc32").unwrap();
  let second = registry::lookup("crc32").unwrap();
  assert!(std::ptr::eq(first, second));
  assert_eq!(registry::variants().len(), Algorithm::ALL.len());
}
