//! Message padding and parsing (FIPS 180-4 §5.1.1, §5.2.1).
//!
//! Inputs are byte strings, so the padded bitstream is always byte aligned:
//! the single `1` bit is the top bit of an `0x80` byte and the `k` zero bits
//! are whole zero bytes. The 64-bit length field holds the message length in
//! bits, big-endian, written as high and low 32-bit halves.
#![allow(clippy::indexing_slicing)] // Fixed-size block arrays, offsets bounded by BLOCK_LEN

use crate::{
  Word,
  constants::{BLOCK_LEN, BLOCK_WORDS, LENGTH_OFFSET},
};

/// One 512-bit message block.
pub type MessageBlock = [u8; BLOCK_LEN];

/// Scratch size that holds any padded tail: at most two blocks.
pub const PAD_BUFFER_LEN: usize = 2 * BLOCK_LEN;

/// Pad a buffered tail in place and return the padded length (64 or 128).
///
/// `region[..len]` holds the final `len < 64` message bytes; `total_len` is
/// the length of the whole message in bytes. Everything from `len` up to the
/// returned length is overwritten; bytes beyond it are left alone.
///
/// # Panics
///
/// If `len >= BLOCK_LEN`. Full blocks must be compressed before padding.
#[inline]
pub fn pad_in_place(region: &mut [u8; PAD_BUFFER_LEN], len: usize, total_len: u64) -> usize {
  assert!(len < BLOCK_LEN, "padding tail must be shorter than one block, got {len} bytes");

  // The `1` bit plus 64 length bits must fit after the tail, or the zero fill
  // spills into a second block.
  let padded = if len < LENGTH_OFFSET { BLOCK_LEN } else { PAD_BUFFER_LEN };

  region[len] = 0x80;
  region[len + 1..padded - 8].fill(0);

  let bit_len = total_len.wrapping_mul(8);
  let hi = (bit_len >> 32) as Word;
  let lo = bit_len as Word;
  region[padded - 8..padded - 4].copy_from_slice(&hi.to_be_bytes());
  region[padded - 4..padded].copy_from_slice(&lo.to_be_bytes());

  padded
}

/// Group one block into sixteen big-endian words, word 0 first.
#[inline]
#[must_use]
pub fn parse_words(block: &MessageBlock) -> [Word; BLOCK_WORDS] {
  let mut words = [0; BLOCK_WORDS];
  let (chunks, _) = block.as_chunks::<4>();
  for (w, c) in words.iter_mut().zip(chunks) {
    *w = Word::from_be_bytes(*c);
  }
  words
}

/// Slice a padded message into consecutive blocks, in input order.
///
/// The final block is complete by construction of [`pad`].
#[cfg(feature = "alloc")]
#[inline]
pub fn parse_blocks(padded: &PaddedMessage) -> core::slice::Iter<'_, MessageBlock> {
  let (blocks, rest) = padded.as_bytes().as_chunks::<BLOCK_LEN>();
  debug_assert!(rest.is_empty());
  blocks.iter()
}

/// A fully padded message whose length is a positive multiple of 512 bits.
#[cfg(feature = "alloc")]
#[derive(Clone, PartialEq, Eq)]
pub struct PaddedMessage {
  bytes: alloc::vec::Vec<u8>,
}

#[cfg(feature = "alloc")]
impl PaddedMessage {
  /// The padded bitstream as bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes
  }

  /// Length of the padded bitstream in bits.
  #[inline]
  #[must_use]
  pub fn bit_len(&self) -> u64 {
    (self.bytes.len() as u64) * 8
  }

  /// Number of 512-bit blocks.
  #[inline]
  #[must_use]
  pub fn block_count(&self) -> usize {
    self.bytes.len() / BLOCK_LEN
  }

  #[inline]
  #[must_use]
  pub fn into_bytes(self) -> alloc::vec::Vec<u8> {
    self.bytes
  }
}

#[cfg(feature = "alloc")]
impl core::fmt::Debug for PaddedMessage {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PaddedMessage")
      .field("bit_len", &self.bit_len())
      .field("blocks", &self.block_count())
      .finish()
  }
}

/// Apply SHA-256 padding to a whole message.
///
/// Appends one `1` bit, the minimum `k >= 0` zero bits reaching 448 mod 512,
/// then the 64-bit big-endian bit length of `message`.
///
/// ```
/// let padded = sha256::preprocess::pad(b"abc");
/// assert_eq!(padded.bit_len(), 512);
/// assert_eq!(padded.as_bytes()[3], 0x80);
/// assert_eq!(padded.as_bytes()[63], 24);
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn pad(message: &[u8]) -> PaddedMessage {
  let (blocks, tail) = message.as_chunks::<BLOCK_LEN>();
  let body = blocks.len() * BLOCK_LEN;

  let mut region = [0u8; PAD_BUFFER_LEN];
  region[..tail.len()].copy_from_slice(tail);
  let padded = pad_in_place(&mut region, tail.len(), message.len() as u64);

  let mut bytes = alloc::vec::Vec::with_capacity(body + padded);
  bytes.extend_from_slice(&message[..body]);
  bytes.extend_from_slice(&region[..padded]);
  PaddedMessage { bytes }
}
