//! Arbitrary update sequences must match the one-shot digest, and the hasher
//! must stay sealed once finalized.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sha256::{Digest, Phase, Sha256};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  late: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = Sha256::digest(data);

  let mut hasher = Sha256::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]).unwrap();
    assert!(hasher.buffered_len() < 64);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.bytes_hashed(), data.len() as u64);
  assert_eq!(hasher.finalize(), expected, "streaming mismatch");

  assert!(hasher.update(&input.late).is_err());
  assert_eq!(hasher.phase(), Phase::Finalized);
  assert_eq!(hasher.finalize(), expected, "finalize not idempotent");

  hasher.reset();
  hasher.update(&input.late).unwrap();
  assert_eq!(hasher.finalize(), Sha256::digest(&input.late));
});
