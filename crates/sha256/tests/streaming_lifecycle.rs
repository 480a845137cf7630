use std::io::{self, Read, Write};

use sha256::{Digest, InvalidState, Phase, Sha256, hash};
use zeroize::Zeroize;

#[test]
fn finalize_is_idempotent() {
  let mut h = Sha256::new();
  h.update(b"hello ").unwrap().update(b"world").unwrap();
  let first = h.finalize();
  let second = h.finalize();
  assert_eq!(first, second);
  assert_eq!(first, hash(b"hello world"));
  assert_eq!(h.bytes_hashed(), 11);
}

#[test]
fn update_after_finalize_is_rejected() {
  let mut h = Sha256::new();
  h.update(b"abc").unwrap();
  let digest = h.finalize();

  assert_eq!(h.update(b"d").unwrap_err(), InvalidState::new());
  assert_eq!(h.update(b"").unwrap_err(), InvalidState::new());
  assert_eq!(h.update_vectored(&[b"x".as_slice(), b"y"]).unwrap_err(), InvalidState::new());
  assert_eq!(h.finalize(), digest);
  assert_eq!(h.phase(), Phase::Finalized);
}

#[test]
fn reset_restores_a_fresh_hasher() {
  let mut h = Sha256::new();
  h.update(&[7u8; 100]).unwrap();
  let _ = h.finalize();
  h.reset();

  assert_eq!(h.phase(), Phase::Ready);
  assert_eq!(h.bytes_hashed(), 0);
  assert_eq!(h.buffered_len(), 0);
  assert_eq!(h.finalize(), hash(b""));
}

#[test]
fn reset_mid_stream_discards_input() {
  let mut h = Sha256::new();
  h.update(b"discard me").unwrap();
  h.reset();
  h.update(b"abc").unwrap();
  assert_eq!(h.finalize(), hash(b"abc"));
}

#[test]
fn wipe_and_zeroize_reset_the_hasher() {
  let mut h = Sha256::new();
  h.update(&[0x42; 90]).unwrap();
  h.wipe();
  assert_eq!(h.phase(), Phase::Ready);
  assert_eq!(h.update(b"abc").unwrap().finalize(), hash(b"abc"));

  h.zeroize();
  assert_eq!(h.phase(), Phase::Ready);
  assert_eq!(h.bytes_hashed(), 0);
  assert_eq!(h.finalize(), hash(b""));
}

#[test]
fn clone_forks_the_stream() {
  let mut h = Sha256::new();
  h.update(b"common prefix, ").unwrap();
  let mut fork = h.clone();
  h.update(b"left").unwrap();
  fork.update(b"right").unwrap();
  assert_eq!(h.finalize(), hash(b"common prefix, left"));
  assert_eq!(fork.finalize(), hash(b"common prefix, right"));
}

#[test]
fn vectored_updates_match_contiguous() {
  let bufs: [&[u8]; 4] = [b"abcdbcdecdefdefg", b"efghfghighijhijk", b"ijkljklmklmnlmno", b"mnopnopq"];
  let whole: Vec<u8> = bufs.concat();
  assert_eq!(Sha256::digest_vectored(&bufs), hash(&whole));

  let mut h = Sha256::new();
  let slices = bufs.map(io::IoSlice::new);
  h.update_io_slices(&slices).unwrap();
  assert_eq!(h.finalize(), hash(&whole));
}

#[test]
fn reader_and_writer_adapters() {
  let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();

  let mut reader = Sha256::reader(io::Cursor::new(data.clone()));
  let mut sink = Vec::new();
  reader.read_to_end(&mut sink).unwrap();
  assert_eq!(reader.digest(), hash(&data));
  let (_, digest) = reader.into_parts();
  assert_eq!(digest, hash(&data));

  let mut writer = Sha256::writer(Vec::new());
  for chunk in data.chunks(333) {
    writer.write_all(chunk).unwrap();
  }
  let (out, digest) = writer.into_parts();
  assert_eq!(out, data);
  assert_eq!(digest, hash(&data));
}

#[test]
fn adapters_surface_finalized_hasher_as_io_error() {
  let mut writer = Sha256::writer(Vec::new());
  let _ = writer.hasher_mut().finalize();
  let err = writer.write_all(b"late").unwrap_err();
  assert_eq!(err.kind(), io::ErrorKind::Other);
  assert!(err.get_ref().is_some_and(|e| e.is::<InvalidState>()));
  assert!(writer.inner().is_empty());
}

fn differing_bits(a: &[u8; 32], b: &[u8; 32]) -> u32 {
  a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

#[test]
fn single_bit_flip_avalanches() {
  // Expected 128 of 256 output bits to change; the bounds are a sanity check.
  let inputs: [&[u8]; 4] = [b"abc", b"The quick brown fox jumps over the lazy dog", &[0u8; 64], &[0xFF; 200]];
  for input in inputs {
    let base = hash(input);
    for bit in [0usize, 7, 8 * input.len() / 2, 8 * input.len() - 1] {
      let mut flipped = input.to_vec();
      flipped[bit / 8] ^= 1 << (bit % 8);
      let diff = differing_bits(&base, &hash(&flipped));
      assert!((64..=192).contains(&diff), "len={} bit={bit} diff={diff}", input.len());
    }
  }
}
