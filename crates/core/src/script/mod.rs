// Copyright (C) 2025 The cardano-rs Authors.
//
// mod.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Scripts as supplied by callers.
//!
//! A [`Script`] pairs a dialect tag with bytes in whatever framing the caller
//! had at hand. Nothing here is trusted: the [`canonical`] module turns a
//! script into the form its hash is computed over.

pub mod canonical;
pub mod native;
pub mod plutus;

pub use canonical::{canonicalize, script_hash, CanonicalScript};
pub use native::NativeScript;
pub use plutus::{apply_double_cbor_encoding, apply_single_cbor_encoding};

use crate::CoreResult;
use cardano_config::{
    NATIVE_SCRIPT_TAG, PLUTUS_V1_SCRIPT_TAG, PLUTUS_V2_SCRIPT_TAG, PLUTUS_V3_SCRIPT_TAG,
};
use cardano_io::Serializable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag of a dialect this crate does not know.
///
/// Only [`ScriptKind::from`] builds one, so it never holds the name of a
/// known dialect.
///
/// ```compile_fail
/// let tag = cardano_core::script::UnrecognizedTag("PlutusV2".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnrecognizedTag(String);

impl UnrecognizedTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnrecognizedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Script dialect.
///
/// `Unrecognized` keeps the tag a caller supplied for a dialect this crate
/// does not know, so such scripts can still be passed around and dispatched
/// on explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScriptKind {
    Native,
    PlutusV1,
    PlutusV2,
    PlutusV3,
    Unrecognized(UnrecognizedTag),
}

impl ScriptKind {
    /// Hash domain tag, or `None` for unrecognized dialects.
    pub fn tag(&self) -> Option<u8> {
        match self {
            ScriptKind::Native => Some(NATIVE_SCRIPT_TAG),
            ScriptKind::PlutusV1 => Some(PLUTUS_V1_SCRIPT_TAG),
            ScriptKind::PlutusV2 => Some(PLUTUS_V2_SCRIPT_TAG),
            ScriptKind::PlutusV3 => Some(PLUTUS_V3_SCRIPT_TAG),
            ScriptKind::Unrecognized(_) => None,
        }
    }

    pub fn is_plutus(&self) -> bool {
        matches!(
            self,
            ScriptKind::PlutusV1 | ScriptKind::PlutusV2 | ScriptKind::PlutusV3
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            ScriptKind::Native => "Native",
            ScriptKind::PlutusV1 => "PlutusV1",
            ScriptKind::PlutusV2 => "PlutusV2",
            ScriptKind::PlutusV3 => "PlutusV3",
            ScriptKind::Unrecognized(tag) => tag.as_str(),
        }
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ScriptKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Native" => ScriptKind::Native,
            "PlutusV1" => ScriptKind::PlutusV1,
            "PlutusV2" => ScriptKind::PlutusV2,
            "PlutusV3" => ScriptKind::PlutusV3,
            _ => ScriptKind::Unrecognized(UnrecognizedTag(tag)),
        }
    }
}

impl From<&str> for ScriptKind {
    fn from(tag: &str) -> Self {
        ScriptKind::from(tag.to_string())
    }
}

impl From<ScriptKind> for String {
    fn from(kind: ScriptKind) -> Self {
        match kind {
            ScriptKind::Unrecognized(tag) => tag.0,
            known => known.as_str().to_string(),
        }
    }
}

/// A script of some dialect, with its bytes exactly as supplied.
///
/// Serializes as `{"type": "PlutusV2", "script": "<cbor hex>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script {
    #[serde(rename = "type")]
    kind: ScriptKind,
    #[serde(rename = "script", with = "hex")]
    bytes: Vec<u8>,
}

impl Script {
    pub fn new(kind: impl Into<ScriptKind>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: kind.into(),
            bytes: bytes.into(),
        }
    }

    /// Builds a script from its CBOR hex form.
    pub fn from_cbor_hex(kind: impl Into<ScriptKind>, cbor_hex: &str) -> CoreResult<Self> {
        Ok(Self::new(kind, hex::decode(cbor_hex)?))
    }

    /// Encodes a native script and wraps it as a `Native` script.
    pub fn native(script: &NativeScript) -> CoreResult<Self> {
        let bytes = script
            .to_cbor()
            .map_err(|e| crate::CoreError::malformed(&ScriptKind::Native, e))?;
        Ok(Self::new(ScriptKind::Native, bytes))
    }

    pub fn plutus_v1(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(ScriptKind::PlutusV1, bytes)
    }

    pub fn plutus_v2(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(ScriptKind::PlutusV2, bytes)
    }

    pub fn plutus_v3(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(ScriptKind::PlutusV3, bytes)
    }

    pub fn kind(&self) -> &ScriptKind {
        &self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_cbor_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    pub fn into_parts(self) -> (ScriptKind, Vec<u8>) {
        (self.kind, self.bytes)
    }
}
