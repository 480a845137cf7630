//! Message schedule expansion (FIPS 180-4 §6.2.2 step 1).
#![allow(clippy::indexing_slicing)] // t ranges over 16..64, lookbacks are at most 16

use zeroize::Zeroize;

use crate::{
  Word,
  bitwise::{add_mod32, small_sigma0, small_sigma1},
  constants::{BLOCK_WORDS, ROUNDS},
};

/// The 64-word schedule `W[0..64]` consumed by one block's compression.
///
/// A hasher keeps one of these as scratch and overwrites it per block.
#[derive(Clone)]
pub struct MessageSchedule([Word; ROUNDS]);

impl MessageSchedule {
  /// An all-zero schedule, ready to be filled by [`expand_from`](Self::expand_from).
  #[inline]
  #[must_use]
  pub const fn zeroed() -> Self {
    Self([0; ROUNDS])
  }

  /// Overwrite this schedule with the expansion of `words`.
  ///
  /// `W[0..16]` is a copy of `words`; for `t` in `16..64`,
  /// `W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]` modulo 2^32.
  #[inline]
  pub fn expand_from(&mut self, words: &[Word; BLOCK_WORDS]) {
    let w = &mut self.0;
    w[..BLOCK_WORDS].copy_from_slice(words);
    for t in BLOCK_WORDS..ROUNDS {
      w[t] = add_mod32([small_sigma1(w[t - 2]), w[t - 7], small_sigma0(w[t - 15]), w[t - 16]]);
    }
  }

  #[inline]
  #[must_use]
  pub const fn words(&self) -> &[Word; ROUNDS] {
    &self.0
  }
}

impl Default for MessageSchedule {
  #[inline]
  fn default() -> Self {
    Self::zeroed()
  }
}

impl Zeroize for MessageSchedule {
  #[inline]
  fn zeroize(&mut self) {
    self.0.zeroize();
  }
}

// Schedule words are derived from message bytes.
impl core::fmt::Debug for MessageSchedule {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str("MessageSchedule(..)")
  }
}

/// Expand sixteen block words into a fresh 64-word schedule.
#[inline]
#[must_use]
pub fn expand(words: &[Word; BLOCK_WORDS]) -> MessageSchedule {
  let mut schedule = MessageSchedule::zeroed();
  schedule.expand_from(words);
  schedule
}
