//! Cryptographic digest traits.
//!
//! Streaming updates, idempotent finalize, and reset support. Unlike a plain
//! checksum, a digest has a terminal state: once finalized, further input is
//! rejected until the hasher is reset.

use core::fmt::Debug;

use crate::InvalidState;

/// Cryptographic hash function producing a fixed-size digest.
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `update()` after `finalize()` must fail with [`InvalidState`] and leave
///   the hasher unchanged
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - feeding the same bytes through any sequence of `update()` calls must yield
///   the same digest as one `update()` with their concatenation
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Compression block size in bytes.
  const BLOCK_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  ///
  /// Returns `self` so calls can be chained with `?`.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidState`] if the hasher has already been finalized.
  fn update(&mut self, data: &[u8]) -> Result<&mut Self, InvalidState>;

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidState`] if the hasher has already been finalized. No
  /// buffer is absorbed in that case.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) -> Result<&mut Self, InvalidState> {
    if self.is_finalized() {
      return Err(InvalidState::new());
    }
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(self)
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidState`] if the hasher has already been finalized.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) -> Result<&mut Self, InvalidState> {
    if self.is_finalized() {
      return Err(InvalidState::new());
    }
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(self)
  }

  /// Finalize and return the digest.
  ///
  /// The first call pads and compresses the buffered tail and moves the hasher
  /// into its terminal state. Later calls return the same digest without
  /// touching the state.
  #[must_use]
  fn finalize(&mut self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Whether `finalize` has been called since construction or the last reset.
  #[must_use]
  fn is_finalized(&self) -> bool;

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    match h.update(data) {
      Ok(h) => h.finalize(),
      Err(_) => unreachable!("a fresh hasher is never finalized"),
    }
  }

  /// Compute the digest of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    match h.update_vectored(bufs) {
      Ok(h) => h.finalize(),
      Err(_) => unreachable!("a fresh hasher is never finalized"),
    }
  }

  /// Wrap a reader to compute digest transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::{Digest, InvalidState};
  /// # #[derive(Clone, Default)]
  /// # struct SumDigest(u8, bool);
  /// # impl Digest for SumDigest {
  /// #   const OUTPUT_SIZE: usize = 4;
  /// #   const BLOCK_SIZE: usize = 1;
  /// #   type Output = [u8; 4];
  /// #   fn new() -> Self { Self(0, false) }
  /// #   fn update(&mut self, data: &[u8]) -> Result<&mut Self, InvalidState> {
  /// #     if self.1 { return Err(InvalidState::new()); }
  /// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
  /// #     Ok(self)
  /// #   }
  /// #   fn finalize(&mut self) -> Self::Output { self.1 = true; [self.0; 4] }
  /// #   fn reset(&mut self) { *self = Self::new(); }
  /// #   fn is_finalized(&self) -> bool { self.1 }
  /// # }
  /// # use std::io::Cursor;
  ///
  /// let mut reader = SumDigest::reader(Cursor::new(b"abc".to_vec()));
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// assert_eq!(
  ///   reader.digest(),
  ///   [b'a'.wrapping_add(b'b').wrapping_add(b'c'); 4]
  /// );
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::DigestReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::DigestReader::new(inner)
  }

  /// Wrap a writer to compute digest transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::{Digest, InvalidState};
  /// # #[derive(Clone, Default)]
  /// # struct SumDigest(u8, bool);
  /// # impl Digest for SumDigest {
  /// #   const OUTPUT_SIZE: usize = 4;
  /// #   const BLOCK_SIZE: usize = 1;
  /// #   type Output = [u8; 4];
  /// #   fn new() -> Self { Self(0, false) }
  /// #   fn update(&mut self, data: &[u8]) -> Result<&mut Self, InvalidState> {
  /// #     if self.1 { return Err(InvalidState::new()); }
  /// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
  /// #     Ok(self)
  /// #   }
  /// #   fn finalize(&mut self) -> Self::Output { self.1 = true; [self.0; 4] }
  /// #   fn reset(&mut self) { *self = Self::new(); }
  /// #   fn is_finalized(&self) -> bool { self.1 }
  /// # }
  /// # use std::io::Write;
  ///
  /// let mut writer = SumDigest::writer(Vec::new());
  /// writer.write_all(b"hello world")?;
  /// let (out, digest) = writer.into_parts();
  /// assert_eq!(out, b"hello world".to_vec());
  /// assert_eq!(
  ///   digest,
  ///   [b"hello world"
  ///     .iter()
  ///     .fold(0u8, |acc, &b| acc.wrapping_add(b)); 4]
  /// );
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::DigestWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::DigestWriter::new(inner)
  }
}
