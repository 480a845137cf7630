//! I/O adapters for digest algorithms.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and feed every byte actually transferred
//! into a [`Digest`](crate::Digest). Short reads and short writes hash only the
//! bytes that moved.
//!
//! A finalized hasher cannot accept input, so an adapter whose hasher has been
//! finalized (through [`hasher_mut`](DigestReader::hasher_mut)) fails every
//! transfer with [`std::io::ErrorKind::Other`] wrapping
//! [`InvalidState`](crate::InvalidState), before touching the inner stream.

use std::io;

use crate::{Digest, InvalidState};

#[inline]
fn ensure_open<D: Digest>(hasher: &D) -> io::Result<()> {
  if hasher.is_finalized() {
    return Err(io::Error::other(InvalidState::new()));
  }
  Ok(())
}

#[inline]
fn absorb<D: Digest>(hasher: &mut D, data: &[u8]) -> io::Result<()> {
  hasher.update(data).map(|_| ()).map_err(io::Error::other)
}

#[inline]
fn absorb_io_slices<D: Digest>(hasher: &mut D, bufs: &[io::IoSlice<'_>], mut n: usize) -> io::Result<()> {
  for buf in bufs {
    let take = n.min(buf.len());
    if take == 0 {
      break;
    }
    if let Some(data) = buf.get(..take) {
      absorb(hasher, data)?;
    }
    n -= take;
  }
  Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`](std::io::Read) and computes a digest transparently.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `D`: The digest algorithm type (e.g., `Sha256`)
#[derive(Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Create a new reader wrapper with a fresh hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Get the digest of everything read so far.
  ///
  /// This finalizes a copy of the hasher, so further reads keep updating the
  /// digest.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.clone().finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestReader`, returning the inner reader and the final digest.
  #[inline]
  pub fn into_parts(mut self) -> (R, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Unwrap this `DigestReader`, returning the inner reader and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Get a reference to the inner reader.
  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Get a mutable reference to the inner reader.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: io::Read, D: Digest> io::Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    ensure_open(&self.hasher)?;
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      absorb(&mut self.hasher, data)?;
    }
    Ok(n)
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [io::IoSliceMut<'_>]) -> io::Result<usize> {
    ensure_open(&self.hasher)?;
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs.iter() {
      let take = remaining.min(buf.len());
      if take == 0 {
        break;
      }
      if let Some(data) = buf.get(..take) {
        absorb(&mut self.hasher, data)?;
      }
      remaining -= take;
    }
    Ok(n)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writer
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Write`](std::io::Write) and computes a digest transparently.
///
/// Bytes are hashed after the inner writer accepts them, so a short write
/// hashes only the accepted prefix and a failed write hashes nothing.
///
/// # Type Parameters
///
/// - `W`: The inner writer type
/// - `D`: The digest algorithm type (e.g., `Sha256`)
#[derive(Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Create a new writer wrapper with a fresh hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self {
      inner,
      hasher: D::new(),
    }
  }

  /// Get the digest of everything written so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.clone().finalize()
  }

  /// Get a mutable reference to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut D {
    &mut self.hasher
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and the final digest.
  #[inline]
  pub fn into_parts(mut self) -> (W, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and discarding the digest.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Get a reference to the inner writer.
  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Get a mutable reference to the inner writer.
  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: io::Write, D: Digest> io::Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    ensure_open(&self.hasher)?;
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      absorb(&mut self.hasher, data)?;
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[io::IoSlice<'_>]) -> io::Result<usize> {
    ensure_open(&self.hasher)?;
    let n = self.inner.write_vectored(bufs)?;
    absorb_io_slices(&mut self.hasher, bufs, n)?;
    Ok(n)
  }
}

#[cfg(test)]
mod tests {
  use std::{
    io::{Cursor, Read, Write},
    vec::Vec,
  };

  use super::*;

  /// Order-sensitive toy digest: enough to catch dropped or reordered bytes.
  #[derive(Clone, Default)]
  struct Fold {
    acc: u32,
    finalized: bool,
  }

  impl Digest for Fold {
    const OUTPUT_SIZE: usize = 4;
    const BLOCK_SIZE: usize = 1;
    type Output = u32;

    fn new() -> Self {
      Self::default()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self, InvalidState> {
      if self.finalized {
        return Err(InvalidState::new());
      }
      for &b in data {
        self.acc = self.acc.wrapping_mul(31).wrapping_add(u32::from(b));
      }
      Ok(self)
    }

    fn finalize(&mut self) -> u32 {
      self.finalized = true;
      self.acc
    }

    fn reset(&mut self) {
      *self = Self::default();
    }

    fn is_finalized(&self) -> bool {
      self.finalized
    }
  }

  /// Accepts at most `limit` bytes per write.
  struct Trickle {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn reader_hashes_exactly_what_was_read() {
    let data = b"the quick brown fox jumps over the lazy dog";
    let mut reader = Fold::reader(Cursor::new(data.to_vec()));
    let mut sink = Vec::new();
    reader.read_to_end(&mut sink).unwrap();

    assert_eq!(sink, data);
    assert_eq!(reader.digest(), Fold::digest(data));
    // `digest` finalizes a copy only.
    assert!(!reader.hasher_mut().is_finalized());
  }

  #[test]
  fn writer_respects_short_writes() {
    let data = b"0123456789abcdef0123456789abcdef";
    let mut writer = Fold::writer(Trickle { out: Vec::new(), limit: 3 });
    writer.write_all(data).unwrap();

    let (inner, digest) = writer.into_parts();
    assert_eq!(inner.out, data);
    assert_eq!(digest, Fold::digest(data));
  }

  #[test]
  fn finalized_hasher_fails_before_io() {
    let mut writer = Fold::writer(Vec::new());
    writer.write_all(b"abc").unwrap();
    let _ = writer.hasher_mut().finalize();

    let err = writer.write(b"def").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
    assert_eq!(writer.inner(), b"abc");

    let mut reader = Fold::reader(Cursor::new(b"xyz".to_vec()));
    let _ = reader.hasher_mut().finalize();
    let mut buf = [0u8; 3];
    assert!(reader.read(&mut buf).is_err());
    assert_eq!(reader.inner().position(), 0);
  }

  #[test]
  fn vectored_write_matches_contiguous() {
    let a = b"hello ";
    let b = b"vectored ";
    let c = b"world";
    let mut writer = Fold::writer(Vec::new());
    let bufs = [io::IoSlice::new(a), io::IoSlice::new(b), io::IoSlice::new(c)];
    let n = writer.write_vectored(&bufs).unwrap();

    let (out, digest) = writer.into_parts();
    assert_eq!(out.len(), n);
    assert_eq!(digest, Fold::digest(&out));
  }
}
