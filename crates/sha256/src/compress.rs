//! The SHA-256 compression function (FIPS 180-4 §6.2.2 steps 2-4).
//!
//! Blocks are chained Merkle-Damgård style: each call folds one block's
//! schedule into the running [`HashState`], and the result is the input state
//! for the next block. Calls for one message must happen in block order.
#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression rounds

use zeroize::Zeroize;

use crate::{
  Word,
  bitwise::{add_mod32, big_sigma0, big_sigma1, ch, maj},
  constants::{DIGEST_LEN, H0, K, ROUNDS},
  schedule::MessageSchedule,
};

/// The eight-word running digest `H[0..8]`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HashState([Word; 8]);

impl HashState {
  /// The standard initial value `H(0)`.
  #[inline]
  #[must_use]
  pub const fn iv() -> Self {
    Self(H0)
  }

  /// Resume from explicit chaining words.
  #[inline]
  #[must_use]
  pub const fn from_words(words: [Word; 8]) -> Self {
    Self(words)
  }

  #[inline]
  #[must_use]
  pub const fn words(&self) -> &[Word; 8] {
    &self.0
  }

  /// Serialize as the 32-byte digest: word 0 first, each word big-endian.
  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    let (chunks, _) = out.as_chunks_mut::<4>();
    for (c, word) in chunks.iter_mut().zip(self.0) {
      *c = word.to_be_bytes();
    }
    out
  }
}

impl Default for HashState {
  #[inline]
  fn default() -> Self {
    Self::iv()
  }
}

impl Zeroize for HashState {
  #[inline]
  fn zeroize(&mut self) {
    self.0.zeroize();
  }
}

impl core::fmt::Debug for HashState {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str("HashState(..)")
  }
}

/// Fold one block's message schedule into `state`.
///
/// Runs the 64 rounds over working registers `a..h` seeded from `state`, then
/// adds each register back into the matching state word modulo 2^32. The
/// state is written once, after all rounds.
#[inline]
pub fn compress_block(state: &mut HashState, schedule: &MessageSchedule) {
  let w = schedule.words();
  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state.0;

  for t in 0..ROUNDS {
    let t1 = add_mod32([h, big_sigma1(e), ch(e, f, g), K[t], w[t]]);
    let t2 = add_mod32([big_sigma0(a), maj(a, b, c)]);

    h = g;
    g = f;
    f = e;
    e = add_mod32([d, t1]);
    d = c;
    c = b;
    b = a;
    a = add_mod32([t1, t2]);
  }

  let registers = [a, b, c, d, e, f, g, h];
  for (word, reg) in state.0.iter_mut().zip(registers) {
    *word = add_mod32([*word, reg]);
  }
}
