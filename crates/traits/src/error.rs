//! Error types for digest operations.
//!
//! Hashing is total over its input, so the only runtime error is a lifecycle
//! violation. Individual crates may define additional errors as needed.

use core::fmt;

/// Input was offered to a hasher that has already been finalized.
///
/// The hasher is left exactly as it was; call `reset` to hash new data.
///
/// # Examples
///
/// ```
/// use traits::InvalidState;
///
/// fn absorb(finalized: bool) -> Result<(), InvalidState> {
///   if finalized { Err(InvalidState::new()) } else { Ok(()) }
/// }
///
/// assert!(absorb(false).is_ok());
/// assert_eq!(absorb(true), Err(InvalidState::new()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidState;

impl InvalidState {
  /// Create a new invalid-state error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for InvalidState {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for InvalidState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("hasher already finalized; reset it before updating")
  }
}

impl core::error::Error for InvalidState {}
