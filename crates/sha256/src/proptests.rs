//! Property tests for the SHA-256 building blocks and the streaming hasher.
//!
//! 1. **Chunk invariance**: any partition of the input through `update` gives
//!    the one-shot digest.
//! 2. **Padding length law**: padded length is a positive multiple of 512
//!    bits, and the `1` bit plus zero fill occupies between 1 and 512 bits.
//! 3. **Word arithmetic**: `add_mod32` and `rotr` agree with their
//!    definitions in wider integers.

#![cfg(all(test, not(miri), feature = "alloc"))]

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;
use traits::Digest;

use crate::{
  Sha256,
  bitwise::{add_mod32, rotr, shr},
  hash,
};

/// Cut `data` at the given positions (reduced modulo `len + 1`, sorted).
fn partition<'a>(data: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
  let mut points: Vec<usize> = cuts.iter().map(|c| c % (data.len() + 1)).collect();
  points.sort_unstable();
  let mut parts = Vec::with_capacity(points.len() + 1);
  let mut start = 0;
  for p in points {
    parts.push(&data[start..p]);
    start = p;
  }
  parts.push(&data[start..]);
  parts
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn chunk_invariance(
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    cuts in proptest::collection::vec(any::<usize>(), 0..16)
  ) {
    let expected = hash(&data);

    let mut h = Sha256::new();
    for part in partition(&data, &cuts) {
      h.update(part).unwrap();
    }

    prop_assert_eq!(h.finalize(), expected);
    prop_assert_eq!(h.bytes_hashed(), data.len() as u64);
  }

  #[test]
  fn vectored_update_matches_one_shot(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    cuts in proptest::collection::vec(any::<usize>(), 0..8)
  ) {
    let parts = partition(&data, &cuts);
    prop_assert_eq!(Sha256::digest_vectored(&parts), hash(&data));
  }

  #[test]
  fn padding_length_law(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    let padded = crate::preprocess::pad(&data);
    let message_bits = 8 * data.len() as u64;

    prop_assert_eq!(padded.bit_len() % 512, 0);
    prop_assert!(padded.bit_len() > 0);

    // Everything between the message and the 64-bit length field.
    let fill = padded.bit_len() - message_bits - 64;
    prop_assert!((1..=512).contains(&fill), "fill={} len={}", fill, data.len());
  }

  #[test]
  fn add_mod32_matches_wide_sum(a in any::<u32>(), b in any::<u32>(), c in any::<u32>()) {
    prop_assert_eq!(add_mod32([a, b]), ((u64::from(a) + u64::from(b)) % (1 << 32)) as u32);
    prop_assert_eq!(
      add_mod32([a, b, c]),
      ((u64::from(a) + u64::from(b) + u64::from(c)) % (1 << 32)) as u32
    );
  }

  #[test]
  fn rotr_matches_shift_definition(x in any::<u32>(), n in 1u32..32) {
    prop_assert_eq!(rotr(x, n), (x >> n) | (x << (32 - n)));
    prop_assert_eq!(rotr(rotr(x, n), 32 - n), x);
    prop_assert_eq!(shr(x, n), x >> n);
  }
}
