// Copyright (C) 2025 The cardano-rs Authors.
//
// hash.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! BLAKE2b-224, the digest behind script and key hashes.

use blake2::digest::consts::U28;
use blake2::{Blake2b, Digest};
use cardano_config::SCRIPT_HASH_SIZE;

type Blake2b224 = Blake2b<U28>;

/// Computes BLAKE2b-224 hash of the input data.
pub fn blake2b_224(data: &[u8]) -> [u8; SCRIPT_HASH_SIZE] {
    Blake2b224::digest(data).into()
}

/// Computes BLAKE2b-224 over `tag || data`.
/// This is the script hash construction; `tag` selects the script language.
pub fn tagged_blake2b_224(tag: u8, data: &[u8]) -> [u8; SCRIPT_HASH_SIZE] {
    let mut hasher = Blake2b224::new();
    hasher.update([tag]);
    hasher.update(data);
    hasher.finalize().into()
}
