// Copyright (C) 2025 The cardano-rs Authors.
//
// script_hash.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! 224-bit script hash.

use crate::{CoreError, CoreResult};
use cardano_config::SCRIPT_HASH_SIZE;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Content address of a script: BLAKE2b-224 over its tag and canonical body.
///
/// Displays as lowercase hex in byte order, which is also the key used for
/// the builder's script map.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScriptHash {
    data: [u8; ScriptHash::LEN],
}

impl ScriptHash {
    /// The length of ScriptHash values.
    pub const LEN: usize = SCRIPT_HASH_SIZE;

    /// Creates a new ScriptHash from a byte slice.
    pub fn from_slice(bytes: &[u8]) -> CoreResult<Self> {
        if bytes.len() != Self::LEN {
            return Err(CoreError::InvalidScriptHash(format!(
                "expected {} bytes, got {}",
                Self::LEN,
                bytes.len()
            )));
        }
        let mut data = [0u8; Self::LEN];
        data.copy_from_slice(bytes);
        Ok(Self { data })
    }

    /// Converts the ScriptHash to a byte array.
    pub fn to_array(&self) -> [u8; Self::LEN] {
        self.data
    }

    /// Lowercase hex form of the hash.
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }
}

impl fmt::Display for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ScriptHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptHash({})", self)
    }
}

impl FromStr for ScriptHash {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::LEN * 2 {
            return Err(CoreError::InvalidScriptHash(format!(
                "expected {} hex characters, got {}",
                Self::LEN * 2,
                s.len()
            )));
        }
        let mut data = [0u8; Self::LEN];
        hex::decode_to_slice(s, &mut data)?;
        Ok(Self { data })
    }
}

impl From<[u8; ScriptHash::LEN]> for ScriptHash {
    fn from(data: [u8; ScriptHash::LEN]) -> Self {
        Self { data }
    }
}

impl From<ScriptHash> for [u8; ScriptHash::LEN] {
    fn from(hash: ScriptHash) -> Self {
        hash.data
    }
}

impl AsRef<[u8]> for ScriptHash {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Serialize for ScriptHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ScriptHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
