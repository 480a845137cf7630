//! Core digest traits for the sha256 workspace.
//!
//! This crate provides the streaming [`Digest`] interface the hash
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Lifecycle
//!
//! | Call | Ready / Updating | Finalized |
//! |------|------------------|-----------|
//! | [`Digest::update`] | absorbs input | `Err(InvalidState)`, state untouched |
//! | [`Digest::finalize`] | pads, compresses, returns digest | returns the same digest again |
//! | [`Digest::reset`] | back to Ready | back to Ready |
//!
//! # Error Types
//!
//! - [`InvalidState`] - Update attempted on a finalized hasher
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
pub use error::InvalidState;
