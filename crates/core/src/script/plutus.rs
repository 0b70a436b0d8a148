// Copyright (C) 2025 The cardano-rs Authors.
//
// plutus.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Framing normalization for Plutus scripts.
//!
//! A compiled Plutus program is flat-encoded bytes. On chain the witness set
//! carries those bytes as a CBOR byte string (single-wrapped), and tooling
//! commonly hands scripts around with one more byte-string layer on top
//! (double-wrapped). The script hash is defined over the single-wrapped form,
//! which is only recoverable unambiguously from the double-wrapped one, so
//! every Plutus script is brought to double-wrapped form before hashing.

use cardano_io::{decode_bytes, encode_bytes, wrapping_depth, IoResult};
use tracing::trace;

/// Returns `script` in double-wrapped form.
///
/// Already double-wrapped input is returned unchanged; anything else gets one
/// more byte-string layer. Applying this twice gives the same bytes as
/// applying it once.
pub fn apply_double_cbor_encoding(script: &[u8]) -> IoResult<Vec<u8>> {
    if wrapping_depth(script, 2) == 2 {
        return Ok(script.to_vec());
    }
    trace!(len = script.len(), "wrapping plutus script in an extra cbor layer");
    encode_bytes(script)
}

/// Returns `script` in single-wrapped form.
///
/// Double-wrapped input loses its outer layer; anything else is returned
/// unchanged.
pub fn apply_single_cbor_encoding(script: &[u8]) -> IoResult<Vec<u8>> {
    if wrapping_depth(script, 2) == 2 {
        return decode_bytes(script);
    }
    Ok(script.to_vec())
}
