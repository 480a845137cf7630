//! SHA-256 (FIPS 180-4) with a streaming, multi-call hashing state machine.
//!
//! This crate is `no_std` compatible. Its only library dependencies are the
//! workspace `traits` crate and `zeroize`; `log` is optional. Dev-only
//! dependencies are used for oracle testing and benchmarking.
//!
//! # Quick Start
//!
//! ```
//! use sha256::{Digest, Sha256, to_hex};
//!
//! // One-shot computation
//! let digest = sha256::hash(b"abc");
//! assert_eq!(
//!   to_hex(&digest),
//!   "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! // Streaming computation
//! let mut hasher = Sha256::new();
//! hasher.update(b"a")?.update(b"bc")?;
//! assert_eq!(hasher.finalize(), digest);
//!
//! // Finalized hashers reject input until reset.
//! assert!(hasher.update(b"more").is_err());
//! hasher.reset();
//! assert_eq!(hasher.update(b"abc")?.finalize(), digest);
//! # Ok::<(), sha256::InvalidState>(())
//! ```
//!
//! # Modules
//!
//! The algorithm is split along FIPS 180-4's own seams, leaves first:
//!
//! - [`bitwise`] - 32-bit word functions (`ROTR`, `SHR`, `Ch`, `Maj`, `Σ`, `σ`).
//! - [`preprocess`] - padding and parsing into blocks and words.
//! - [`schedule`] - expansion of 16 block words into the 64-word schedule.
//! - [`compress`] - the 64-round compression function over the hash state.
//! - [`Sha256`] - buffering, chaining and finalization.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | I/O adapters ([`io`]) and `IoSlice` updates (implies `alloc`) |
//! | `alloc` | Yes | [`preprocess::pad`], which returns an owned padded message |
//! | `log` | No | Lifecycle events through the `log` facade, target `sha256` |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bitwise;
pub mod compress;
pub mod constants;
mod hasher;
pub mod hex;
#[cfg(feature = "std")]
pub mod io;
pub mod preprocess;
mod proptests;
pub mod schedule;

mod util;

pub use hasher::{Phase, Sha256, hash};
pub use hex::{HexDigest, to_hex};
pub use traits::{Digest, InvalidState};

/// An unsigned 32-bit word. All word arithmetic wraps modulo 2^32.
pub type Word = u32;
