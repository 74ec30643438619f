//! # tabletree-crypto
//!
//! Hash primitives shared by the table tree and its verifier mirror.
//!
//! The on-chain verifier hashes everything with the EVM `KECCAK256` opcode, so
//! this crate only exposes Keccak-256 (the original Keccak padding, not the
//! FIPS-202 SHA3-256 one).
//!
//! ## Quick Start
//!
//! ```rust
//! use tabletree_crypto::keccak::{keccak_hash, Keccak256};
//!
//! // Single-shot
//! let hash = keccak_hash(b"hello");
//!
//! // Streaming
//! let streamed = Keccak256::new()
//!     .update(b"hel")
//!     .update(b"lo")
//!     .finalize();
//!
//! assert_eq!(hash, streamed);
//! ```

pub mod keccak;
