use core::hint::black_box;

/// Deterministic filler bytes from a splitmix64 stream. Not cryptographic.
pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = Vec::with_capacity(len + 8);
  let mut counter = seed;
  while out.len() < len {
    counter = counter.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = counter;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    out.extend_from_slice(&(z ^ (z >> 31)).to_le_bytes());
  }
  out.truncate(len);
  black_box(out)
}

/// Sizes straddling the 55/56-byte padding split and the block boundary, plus
/// bulk payloads.
pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  let sizes = [0usize, 3, 32, 55, 56, 63, 64, 65, 119, 128, 256, 1024, 4 * 1024, 64 * 1024, 1024 * 1024];
  sizes
    .into_iter()
    .map(|len| (len, pseudo_random_bytes(len, 0x5EA2_56B0_0C1D_F00D)))
    .collect()
}

pub fn set_throughput(group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>, len: usize) {
  if len == 0 {
    group.throughput(criterion::Throughput::Elements(1));
  } else {
    group.throughput(criterion::Throughput::Bytes(len as u64));
  }
}
