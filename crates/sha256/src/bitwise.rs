//! SHA-256 word functions (FIPS 180-4 §2.2.2, §4.1.2).
//!
//! Every function here is total: no input can fail or panic. Arithmetic is on
//! [`Word`] and wraps modulo 2^32.

use crate::Word;

/// Circular right rotation, `ROTR^n(x)`.
///
/// The rotation amount is taken modulo 32, so `rotr(x, 0) == rotr(x, 32) == x`.
#[inline(always)]
#[must_use]
pub const fn rotr(x: Word, n: u32) -> Word {
  x.rotate_right(n)
}

/// Logical right shift, `SHR^n(x)`, filling with zero bits.
///
/// Shifting by 32 or more yields zero.
#[inline(always)]
#[must_use]
pub const fn shr(x: Word, n: u32) -> Word {
  match x.checked_shr(n) {
    Some(v) => v,
    None => 0,
  }
}

/// `Ch(x, y, z)`: each bit of `x` chooses between `y` (set) and `z` (clear).
#[inline(always)]
#[must_use]
pub const fn ch(x: Word, y: Word, z: Word) -> Word {
  (x & y) ^ (!x & z)
}

/// `Maj(x, y, z)`: bitwise majority vote.
#[inline(always)]
#[must_use]
pub const fn maj(x: Word, y: Word, z: Word) -> Word {
  (x & y) ^ (x & z) ^ (y & z)
}

/// `Σ0(x)`, applied to register `a` each round.
#[inline(always)]
#[must_use]
pub const fn big_sigma0(x: Word) -> Word {
  rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// `Σ1(x)`, applied to register `e` each round.
#[inline(always)]
#[must_use]
pub const fn big_sigma1(x: Word) -> Word {
  rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// `σ0(x)`, used by the message schedule on `W[t-15]`.
#[inline(always)]
#[must_use]
pub const fn small_sigma0(x: Word) -> Word {
  rotr(x, 7) ^ rotr(x, 18) ^ shr(x, 3)
}

/// `σ1(x)`, used by the message schedule on `W[t-2]`.
#[inline(always)]
#[must_use]
pub const fn small_sigma1(x: Word) -> Word {
  rotr(x, 17) ^ rotr(x, 19) ^ shr(x, 10)
}

/// Sum any number of words modulo 2^32.
///
/// Plain wraparound addition: never saturates, never signals overflow.
///
/// ```
/// use sha256::bitwise::add_mod32;
///
/// assert_eq!(add_mod32([0xFFFF_FFFF, 1]), 0);
/// assert_eq!(add_mod32([0x8000_0000, 0x8000_0000, 7]), 7);
/// assert_eq!(add_mod32([]), 0);
/// ```
#[inline(always)]
#[must_use]
#[allow(clippy::indexing_slicing)] // i < N
pub const fn add_mod32<const N: usize>(words: [Word; N]) -> Word {
  let mut sum: Word = 0;
  let mut i = 0;
  while i < N {
    sum = sum.wrapping_add(words[i]);
    i += 1;
  }
  sum
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rotr_identities() {
    for x in [0u32, 1, 0xdead_beef, 0x8000_0000, u32::MAX] {
      assert_eq!(rotr(x, 0), x);
      assert_eq!(rotr(x, 32), x);
    }
    assert_eq!(rotr(0x8000_0000, 1), 0x4000_0000);
    assert_eq!(rotr(0x0000_0001, 1), 0x8000_0000);
    assert_eq!(rotr(0x1234_5678, 8), 0x7812_3456);
  }

  #[test]
  fn shr_fills_with_zeros() {
    assert_eq!(shr(0x8000_0000, 31), 1);
    assert_eq!(shr(u32::MAX, 4), 0x0FFF_FFFF);
    assert_eq!(shr(0xdead_beef, 0), 0xdead_beef);
    assert_eq!(shr(u32::MAX, 32), 0);
  }

  #[test]
  fn ch_selects_per_bit() {
    let y = 0xAAAA_AAAA;
    let z = 0x5555_5555;
    assert_eq!(ch(u32::MAX, y, z), y);
    assert_eq!(ch(0, y, z), z);
    assert_eq!(ch(0xFFFF_0000, y, z), 0xAAAA_5555);
  }

  #[test]
  fn maj_votes_per_bit() {
    let x = 0xF0F0_F0F0;
    let y = 0x0F0F_0F0F;
    assert_eq!(maj(x, x, y), x);
    assert_eq!(maj(x, y, y), y);
    assert_eq!(maj(0b110, 0b101, 0b011), 0b111);
    assert_eq!(maj(0b100, 0b010, 0b001), 0);
  }

  #[test]
  fn sigma_on_single_bit() {
    // With x = 1, each term contributes one isolated bit (or zero for SHR).
    assert_eq!(big_sigma0(1), 0x4008_0400);
    assert_eq!(big_sigma1(1), 0x0420_0080);
    assert_eq!(small_sigma0(1), 0x0200_4000);
    assert_eq!(small_sigma1(1), 0x0000_A000);
    assert_eq!(small_sigma1(0x8000_0000), 0x0020_5000);
  }

  #[test]
  fn sigmas_fix_zero() {
    assert_eq!(big_sigma0(0), 0);
    assert_eq!(big_sigma1(0), 0);
    assert_eq!(small_sigma0(0), 0);
    assert_eq!(small_sigma1(0), 0);
  }

  #[test]
  fn add_mod32_wraps() {
    assert_eq!(add_mod32([u32::MAX, 1]), 0);
    assert_eq!(add_mod32([u32::MAX, u32::MAX]), u32::MAX - 1);
    assert_eq!(add_mod32([1, 2, 3, 4, 5]), 15);
    assert_eq!(add_mod32([u32::MAX; 5]), u32::MAX - 4);
  }
}
