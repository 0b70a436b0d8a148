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

//! Cardano IO
//!
//! CBOR primitives used when canonicalizing scripts: byte-string framing
//! (wrap, unwrap, layer counting) and a `Serializable` extension that enforces
//! whole-input decoding on top of `minicbor`.

pub mod cbor;
mod error;
mod serializable;

pub use cbor::{decode_bytes, encode_bytes, wrapping_depth};
pub use error::{IoError, IoResult};
pub use serializable::Serializable;
