// Copyright (C) 2025 The cardano-rs Authors.
//
// lib.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Cardano Cryptography
//!
//! Digest primitives used for content-addressing ledger objects. Script
//! hashes are BLAKE2b-224 over a one-byte domain tag followed by the script
//! body; the tag keeps each script language in its own hash domain.

pub mod hash;
pub mod hash_algorithm;

pub use hash::{blake2b_224, tagged_blake2b_224};
pub use hash_algorithm::HashAlgorithm;

use thiserror::Error;

/// Result type for cryptographic operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cryptography errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidDigestLength { expected: usize, actual: usize },
}

/// Copies a digest into a fixed-size array, failing if its length differs.
pub fn digest_to_array<const N: usize>(digest: &[u8]) -> Result<[u8; N]> {
    digest.try_into().map_err(|_| Error::InvalidDigestLength {
        expected: N,
        actual: digest.len(),
    })
}
