// Copyright (C) 2025 The cardano-rs Authors.
//
// native.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Native (timelock) scripts.
//!
//! ```text
//! native_script =
//!   [ 0, addr_keyhash ]
//! / [ 1, [ * native_script ] ]
//! / [ 2, [ * native_script ] ]
//! / [ 3, n: uint, [ * native_script ] ]
//! / [ 4, invalid_before: uint ]
//! / [ 5, invalid_hereafter: uint ]
//! ```
//!
//! Decoding accepts definite and indefinite arrays. Encoding always writes
//! definite arrays with the shortest integer heads, which is the form the
//! script hash is taken over.

use crate::CoreResult;
use cardano_config::ADDR_KEYHASH_SIZE;
use minicbor::data::Type;
use minicbor::{decode, encode, Decode, Decoder, Encode, Encoder};

/// Maximum nesting of `all`/`any`/`n-of-k` accepted when decoding.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A native script.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NativeScript {
    /// Requires a signature from the key with this hash.
    ScriptPubkey([u8; ADDR_KEYHASH_SIZE]),
    /// Requires every sub-script.
    ScriptAll(Vec<NativeScript>),
    /// Requires at least one sub-script.
    ScriptAny(Vec<NativeScript>),
    /// Requires at least `n` sub-scripts.
    ScriptNOfK(u64, Vec<NativeScript>),
    /// Valid from this slot on.
    InvalidBefore(u64),
    /// Valid strictly before this slot.
    InvalidHereafter(u64),
}

impl NativeScript {
    /// Signature requirement from a hex key hash.
    pub fn pubkey(key_hash_hex: &str) -> CoreResult<Self> {
        let mut key_hash = [0u8; ADDR_KEYHASH_SIZE];
        hex::decode_to_slice(key_hash_hex, &mut key_hash)?;
        Ok(NativeScript::ScriptPubkey(key_hash))
    }

    pub fn all(scripts: impl IntoIterator<Item = NativeScript>) -> Self {
        NativeScript::ScriptAll(scripts.into_iter().collect())
    }

    pub fn any(scripts: impl IntoIterator<Item = NativeScript>) -> Self {
        NativeScript::ScriptAny(scripts.into_iter().collect())
    }

    pub fn at_least(n: u64, scripts: impl IntoIterator<Item = NativeScript>) -> Self {
        NativeScript::ScriptNOfK(n, scripts.into_iter().collect())
    }

    fn variant(&self) -> u8 {
        match self {
            NativeScript::ScriptPubkey(_) => 0,
            NativeScript::ScriptAll(_) => 1,
            NativeScript::ScriptAny(_) => 2,
            NativeScript::ScriptNOfK(..) => 3,
            NativeScript::InvalidBefore(_) => 4,
            NativeScript::InvalidHereafter(_) => 5,
        }
    }

    fn arity(&self) -> u64 {
        match self {
            NativeScript::ScriptNOfK(..) => 3,
            _ => 2,
        }
    }
}

fn decode_native<'b>(d: &mut Decoder<'b>, depth: usize) -> Result<NativeScript, decode::Error> {
    if depth > MAX_NESTING_DEPTH {
        return Err(decode::Error::message("native script nested too deeply"));
    }

    let len = d.array()?;
    let script = match d.u8()? {
        0 => {
            let key_hash = d.bytes()?.try_into().map_err(|_| {
                decode::Error::message(format!("key hash must be {} bytes", ADDR_KEYHASH_SIZE))
            })?;
            NativeScript::ScriptPubkey(key_hash)
        }
        1 => NativeScript::ScriptAll(decode_list(d, depth)?),
        2 => NativeScript::ScriptAny(decode_list(d, depth)?),
        3 => {
            let n = d.u64()?;
            NativeScript::ScriptNOfK(n, decode_list(d, depth)?)
        }
        4 => NativeScript::InvalidBefore(d.u64()?),
        5 => NativeScript::InvalidHereafter(d.u64()?),
        other => {
            return Err(decode::Error::message(format!(
                "unknown native script variant {}",
                other
            )))
        }
    };

    match len {
        Some(n) if n != script.arity() => Err(decode::Error::message(format!(
            "native script variant {} takes {} fields, got {}",
            script.variant(),
            script.arity(),
            n
        ))),
        Some(_) => Ok(script),
        None => {
            expect_break(d)?;
            Ok(script)
        }
    }
}

fn decode_list<'b>(d: &mut Decoder<'b>, depth: usize) -> Result<Vec<NativeScript>, decode::Error> {
    let mut scripts = Vec::new();
    match d.array()? {
        Some(n) => {
            for _ in 0..n {
                scripts.push(decode_native(d, depth + 1)?);
            }
        }
        None => {
            while d.datatype()? != Type::Break {
                scripts.push(decode_native(d, depth + 1)?);
            }
            expect_break(d)?;
        }
    }
    Ok(scripts)
}

fn expect_break(d: &mut Decoder<'_>) -> Result<(), decode::Error> {
    if d.datatype()? != Type::Break {
        return Err(decode::Error::message("expected end of indefinite array"));
    }
    // break is the single byte 0xff
    d.set_position(d.position() + 1);
    Ok(())
}

impl<'b, C> Decode<'b, C> for NativeScript {
    fn decode(d: &mut Decoder<'b>, _ctx: &mut C) -> Result<Self, decode::Error> {
        decode_native(d, 0)
    }
}

impl<C> Encode<C> for NativeScript {
    fn encode<W: encode::Write>(
        &self,
        e: &mut Encoder<W>,
        ctx: &mut C,
    ) -> Result<(), encode::Error<W::Error>> {
        e.array(self.arity())?.u8(self.variant())?;
        match self {
            NativeScript::ScriptPubkey(key_hash) => {
                e.bytes(key_hash)?;
            }
            NativeScript::ScriptAll(scripts) | NativeScript::ScriptAny(scripts) => {
                encode_list(scripts, e, ctx)?;
            }
            NativeScript::ScriptNOfK(n, scripts) => {
                e.u64(*n)?;
                encode_list(scripts, e, ctx)?;
            }
            NativeScript::InvalidBefore(slot) | NativeScript::InvalidHereafter(slot) => {
                e.u64(*slot)?;
            }
        }
        Ok(())
    }
}

fn encode_list<C, W: encode::Write>(
    scripts: &[NativeScript],
    e: &mut Encoder<W>,
    ctx: &mut C,
) -> Result<(), encode::Error<W::Error>> {
    e.array(scripts.len() as u64)?;
    for script in scripts {
        script.encode(e, ctx)?;
    }
    Ok(())
}
