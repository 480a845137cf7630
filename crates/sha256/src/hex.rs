//! Lowercase hex rendering of digests, without allocation.
#![allow(clippy::indexing_slicing)] // nibble lookups are < 16, output is 2 * DIGEST_LEN

use core::fmt;

use crate::constants::DIGEST_LEN;

const HEX_LEN: usize = 2 * DIGEST_LEN;
const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// A digest rendered as 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexDigest([u8; HEX_LEN]);

impl HexDigest {
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    // Only ASCII from ALPHABET is ever stored.
    match core::str::from_utf8(&self.0) {
      Ok(s) => s,
      Err(_) => unreachable!("hex digest holds only ASCII"),
    }
  }
}

/// Render a 32-byte digest as lowercase hex, most significant nibble first.
///
/// ```
/// let hex = sha256::to_hex(&sha256::hash(b""));
/// assert_eq!(hex, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
/// ```
#[inline]
#[must_use]
pub fn to_hex(digest: &[u8; DIGEST_LEN]) -> HexDigest {
  let mut out = [0u8; HEX_LEN];
  let (pairs, _) = out.as_chunks_mut::<2>();
  for (pair, &byte) in pairs.iter_mut().zip(digest) {
    *pair = [ALPHABET[usize::from(byte >> 4)], ALPHABET[usize::from(byte & 0x0f)]];
  }
  HexDigest(out)
}

impl fmt::Display for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Debug for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("HexDigest").field(&self.as_str()).finish()
  }
}

impl AsRef<str> for HexDigest {
  #[inline]
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl PartialEq<str> for HexDigest {
  #[inline]
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for HexDigest {
  #[inline]
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn renders_every_nibble() {
    let digest: [u8; 32] = core::array::from_fn(|i| (i as u8).wrapping_mul(0x11).wrapping_add(i as u8 >> 4));
    let hex = to_hex(&digest);
    assert_eq!(hex.as_str().len(), 64);
    assert!(hex.as_str().bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    assert_eq!(&hex.as_str()[..4], "0011");
  }

  #[test]
  fn display_and_debug() {
    let hex = to_hex(&[0xAB; 32]);
    assert_eq!(hex.to_string(), "ab".repeat(32));
    assert_eq!(format!("{hex:?}"), format!("HexDigest({:?})", "ab".repeat(32)));
  }

  #[test]
  fn extremes() {
    assert_eq!(to_hex(&[0; 32]), "0".repeat(64).as_str());
    assert_eq!(to_hex(&[0xFF; 32]), "f".repeat(64).as_str());
  }
}
