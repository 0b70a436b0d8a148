// Copyright (C) 2025 The cardano-rs Authors.
//
// hash_algorithm.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Hash algorithm selection for ledger objects.

use crate::hash::tagged_blake2b_224;

/// Hash algorithms used by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// BLAKE2b with a 224-bit digest (scripts, verification keys)
    Blake2b224,
}

impl HashAlgorithm {
    /// Hashes `tag || data` without copying `data`.
    pub fn digest_tagged(&self, tag: u8, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Blake2b224 => tagged_blake2b_224(tag, data).to_vec(),
        }
    }
}
