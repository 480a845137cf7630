//! I/O adapters for SHA-256.
//!
//! [`DigestReader`] and [`DigestWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations to compute digests transparently during
//! I/O operations. Only bytes actually transferred are hashed.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Read, Write};
//!
//! use sha256::{Digest, Sha256};
//!
//! let mut reader = Sha256::reader(&b"abc"[..]);
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.digest(), sha256::hash(b"abc"));
//!
//! let mut writer = Sha256::writer(Vec::new());
//! writer.write_all(b"abc")?;
//! let (out, digest) = writer.into_parts();
//! assert_eq!(out, b"abc");
//! assert_eq!(digest, sha256::hash(b"abc"));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{DigestReader, DigestWriter};
