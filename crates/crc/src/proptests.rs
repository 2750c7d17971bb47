extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use crate::{Algorithm, Crc, CrcParams, Variant, reference};

fn algorithm() -> impl Strategy<Value = Algorithm> {
  proptest::sample::select(Algorithm::ALL.to_vec())
}

/// Arbitrary parameter sets at every supported width, with seeds and masks
/// that are not bit-palindromes.
fn custom_params() -> impl Strategy<Value = CrcParams> {
  (
    prop_oneof![1u64..=0xFF, 0x100u64..=0xFFFF, 0x1_0000u64..=0xFFFF_FFFF],
    any::<u32>(),
    any::<bool>(),
    any::<bool>(),
    any::<u32>(),
  )
    .prop_map(|(polynomial, initial, reflect_in, reflect_out, xor_out)| CrcParams {
      name: "custom",
      polynomial,
      initial,
      reflect_in,
      reflect_out,
      xor_out,
    })
}

proptest! {
  #[test]
  fn table_matches_bitwise_reference(
    algorithm in algorithm(),
    data in proptest::collection::vec(any::<u8>(), 0..=4096)
  ) {
    let crc = Crc::from_algorithm(algorithm);
    prop_assert_eq!(Some(crc.calc(&data)), reference::bitwise(crc.variant().params(), &data));
  }

  #[test]
  fn calc_fits_width(
    algorithm in algorithm(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    let crc = Crc::from_algorithm(algorithm);
    prop_assert_eq!(crc.calc(&data) & !crc.width().mask(), 0);
  }

  #[test]
  fn appended_code_verifies(
    algorithm in algorithm(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024)
  ) {
    let crc = Crc::from_algorithm(algorithm);
    let framed = crc.append(&data);
    prop_assert_eq!(crc.verify(&framed), Ok(true));
    prop_assert_eq!(crc.residue(&framed), Ok(0));
  }

  #[test]
  fn single_bit_flip_is_detected(
    algorithm in algorithm(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    position in any::<usize>(),
    bit in 0u8..8
  ) {
    let crc = Crc::from_algorithm(algorithm);
    let mut framed: Vec<u8> = crc.append(&data);
    let position = position % framed.len();
    if let Some(byte) = framed.get_mut(position) {
      *byte ^= 1 << bit;
    }
    prop_assert_eq!(crc.verify(&framed), Ok(false));
    prop_assert_ne!(crc.residue(&framed), Ok(0));
  }

  #[test]
  fn calc_is_deterministic(
    algorithm in algorithm(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024)
  ) {
    let first = Crc::from_algorithm(algorithm).calc(&data);
    let second = Crc::new(algorithm.name()).map(|crc| crc.calc(&data));
    prop_assert_eq!(Ok(first), second);
  }

  #[test]
  fn custom_variant_matches_bitwise_reference(
    params in custom_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    let variant = Variant::new(params).unwrap();
    let crc = Crc::with_variant(&variant);
    prop_assert_eq!(Some(crc.calc(&data)), reference::bitwise(&params, &data));
    prop_assert_eq!(crc.verify(&crc.append(&data)), Ok(true));
  }
}

#[test]
fn crc16_riello_asymmetric_seed() {
  let params = CrcParams {
    name: "crc16riello",
    polynomial: 0x1021,
    initial: 0xB2AA,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };
  let variant = Variant::new(params).unwrap();
  assert_eq!(Crc::with_variant(&variant).calc(b"123456789"), 0x63D0);
  assert_eq!(reference::bitwise(&params, b"123456789"), Some(0x63D0));
}

#[test]
fn mixed_orientation_matches_bitwise_reference() {
  for (reflect_in, reflect_out) in [(true, false), (false, true)] {
    let params = CrcParams {
      name: "mixed",
      polynomial: 0x1021,
      initial: 0xB2AA,
      reflect_in,
      reflect_out,
      xor_out: 0x1234,
    };
    let variant = Variant::new(params).unwrap();
    assert_eq!(
      Some(Crc::with_variant(&variant).calc(b"123456789")),
      reference::bitwise(&params, b"123456789")
    );
  }
}
