#![allow(clippy::indexing_slicing)] // Buffer offsets are bounded by BLOCK_LEN

use traits::{Digest, InvalidState};
use zeroize::Zeroize;

use crate::{
  compress::{HashState, compress_block},
  constants::{BLOCK_LEN, DIGEST_LEN},
  preprocess::{MessageBlock, PAD_BUFFER_LEN, pad_in_place, parse_words},
  schedule::MessageSchedule,
  util::{debug_event, trace_event},
};

/// Where a [`Sha256`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
  /// Freshly constructed or reset; nothing submitted yet.
  Ready,
  /// At least one `update` has been accepted.
  Updating,
  /// `finalize` has run. Only `finalize`, `reset` and `wipe` are meaningful.
  Finalized,
}

/// Incremental SHA-256.
///
/// Input may arrive in any number of `update` calls of any size; the digest
/// depends only on the concatenation. Full blocks are compressed as soon as
/// they are available, so at most 63 bytes are ever buffered between calls.
///
/// ```
/// use sha256::{Digest, Sha256};
///
/// let mut h = Sha256::new();
/// h.update(b"abcdbcdecdefdefgefghfghighijhijk")?
///   .update(b"ijkljklmklmnlmnomnopnopq")?;
/// assert_eq!(
///   sha256::to_hex(&h.finalize()),
///   "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
/// );
/// # Ok::<(), sha256::InvalidState>(())
/// ```
#[derive(Clone)]
pub struct Sha256 {
  state: HashState,
  // Two blocks: finalize may need a second block for the length field.
  buffer: [u8; PAD_BUFFER_LEN],
  buffer_len: usize,
  bytes_hashed: u64,
  schedule: MessageSchedule,
  phase: Phase,
}

impl Default for Sha256 {
  #[inline]
  fn default() -> Self {
    Self {
      state: HashState::iv(),
      buffer: [0u8; PAD_BUFFER_LEN],
      buffer_len: 0,
      bytes_hashed: 0,
      schedule: MessageSchedule::zeroed(),
      phase: Phase::Ready,
    }
  }
}

#[inline(always)]
fn absorb_block(state: &mut HashState, schedule: &mut MessageSchedule, block: &MessageBlock) {
  schedule.expand_from(&parse_words(block));
  compress_block(state, schedule);
}

impl Sha256 {
  /// Compute the digest of `data` in one shot.
  ///
  /// Full blocks are compressed straight from `data` and only the tail is
  /// copied for padding. The stack scratch is zeroized before returning.
  #[inline]
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut state = HashState::iv();
    let mut schedule = MessageSchedule::zeroed();

    let (blocks, tail) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      absorb_block(&mut state, &mut schedule, block);
    }

    let mut region = [0u8; PAD_BUFFER_LEN];
    region[..tail.len()].copy_from_slice(tail);
    let padded = pad_in_place(&mut region, tail.len(), data.len() as u64);
    let (final_blocks, _) = region[..padded].as_chunks::<BLOCK_LEN>();
    for block in final_blocks {
      absorb_block(&mut state, &mut schedule, block);
    }

    let out = state.to_bytes();
    region.zeroize();
    schedule.zeroize();
    state.zeroize();
    out
  }

  /// Current lifecycle phase.
  #[inline]
  #[must_use]
  pub fn phase(&self) -> Phase {
    self.phase
  }

  /// Total bytes accepted by `update` since construction or the last reset.
  #[inline]
  #[must_use]
  pub fn bytes_hashed(&self) -> u64 {
    self.bytes_hashed
  }

  /// Bytes held back waiting for a full block. Always below 64.
  ///
  /// Once finalized, the tail has been padded and compressed but this keeps
  /// reporting its pre-padding length until the next `reset`.
  #[inline]
  #[must_use]
  pub fn buffered_len(&self) -> usize {
    self.buffer_len
  }

  /// Zero the input buffer and schedule scratch, then reset.
  ///
  /// Use this when the hasher saw secret data and will be reused or kept
  /// alive. The stores go through `zeroize` and are not elided.
  pub fn wipe(&mut self) {
    self.buffer.zeroize();
    self.schedule.zeroize();
    self.state.zeroize();
    trace_event!("wipe: cleared {} buffered bytes", self.buffer_len);
    self.reset_state();
  }

  #[inline]
  fn reset_state(&mut self) {
    self.state = HashState::iv();
    self.buffer_len = 0;
    self.bytes_hashed = 0;
    self.phase = Phase::Ready;
  }

  fn absorb(&mut self, mut data: &[u8]) {
    self.bytes_hashed = self.bytes_hashed.wrapping_add(data.len() as u64);

    if self.buffer_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());
      let (head, rest) = data.split_at(take);
      self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(head);
      self.buffer_len += take;
      data = rest;

      if self.buffer_len == BLOCK_LEN {
        let (pending, _) = self.buffer.as_chunks::<BLOCK_LEN>();
        absorb_block(&mut self.state, &mut self.schedule, &pending[0]);
        self.buffer_len = 0;
      }
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    for block in blocks {
      absorb_block(&mut self.state, &mut self.schedule, block);
    }

    if !rest.is_empty() {
      self.buffer[..rest.len()].copy_from_slice(rest);
      self.buffer_len = rest.len();
    }
  }

  fn finalize_inner(&mut self) {
    let padded = pad_in_place(&mut self.buffer, self.buffer_len, self.bytes_hashed);
    let (blocks, _) = self.buffer[..padded].as_chunks::<BLOCK_LEN>();
    for block in blocks {
      absorb_block(&mut self.state, &mut self.schedule, block);
    }
    self.phase = Phase::Finalized;
    trace_event!(
      "finalize: {} bytes, {} tail block(s)",
      self.bytes_hashed,
      padded / BLOCK_LEN
    );
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = DIGEST_LEN;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; DIGEST_LEN];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, data: &[u8]) -> Result<&mut Self, InvalidState> {
    if self.phase == Phase::Finalized {
      debug_event!("update of {} bytes rejected: hasher is finalized", data.len());
      return Err(InvalidState::new());
    }
    self.phase = Phase::Updating;
    if !data.is_empty() {
      self.absorb(data);
    }
    Ok(self)
  }

  #[inline]
  fn finalize(&mut self) -> Self::Output {
    if self.phase != Phase::Finalized {
      self.finalize_inner();
    }
    self.state.to_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    trace_event!("reset from {:?}", self.phase);
    self.reset_state();
  }

  #[inline]
  fn is_finalized(&self) -> bool {
    self.phase == Phase::Finalized
  }

  #[inline]
  fn digest(data: &[u8]) -> Self::Output {
    Sha256::digest(data)
  }
}

impl Zeroize for Sha256 {
  #[inline]
  fn zeroize(&mut self) {
    self.wipe();
  }
}

impl core::fmt::Debug for Sha256 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Sha256")
      .field("phase", &self.phase)
      .field("bytes_hashed", &self.bytes_hashed)
      .finish_non_exhaustive()
  }
}

/// SHA-256 of `data`.
///
/// Same digest as `Sha256::new().update(data)?.finalize()`.
#[inline]
#[must_use]
pub fn hash(data: &[u8]) -> [u8; DIGEST_LEN] {
  Sha256::digest(data)
}
