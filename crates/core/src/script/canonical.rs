// Copyright (C) 2025 The cardano-rs Authors.
//
// canonical.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Canonical script forms and script hashing.
//!
//! The hash of a script is BLAKE2b-224 over its dialect tag followed by the
//! canonical body:
//!
//! - native scripts: the decoded script re-encoded canonically;
//! - Plutus scripts: the single-wrapped program, taken from the
//!   double-wrapped form produced by [`apply_double_cbor_encoding`].
//!
//! Hashing caller bytes directly would give a different hash for each
//! framing of the same Plutus program. Only [`CanonicalScript`] is hashed.

use super::native::NativeScript;
use super::plutus::apply_double_cbor_encoding;
use super::{Script, ScriptKind};
use crate::{CoreError, CoreResult, ScriptHash};
use cardano_config::{
    NATIVE_SCRIPT_TAG, PLUTUS_V1_SCRIPT_TAG, PLUTUS_V2_SCRIPT_TAG, PLUTUS_V3_SCRIPT_TAG,
};
use cardano_cryptography::{digest_to_array, HashAlgorithm};
use cardano_io::{decode_bytes, Serializable};

/// A script normalized for hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalScript {
    kind: ScriptKind,
    tag: u8,
    body: Vec<u8>,
}

impl CanonicalScript {
    pub fn kind(&self) -> &ScriptKind {
        &self.kind
    }

    /// Hash domain tag.
    pub fn tag(&self) -> u8 {
        self.tag
    }

    /// The bytes hashed after the tag.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Computes the script hash.
    pub fn hash(&self) -> CoreResult<ScriptHash> {
        let digest = HashAlgorithm::Blake2b224.digest_tagged(self.tag, &self.body);
        let bytes: [u8; ScriptHash::LEN] = digest_to_array(&digest)?;
        Ok(ScriptHash::from(bytes))
    }
}

/// Normalizes `script` for hashing.
///
/// Returns `Ok(None)` for unrecognized dialects and `MalformedScript` when
/// the bytes do not decode under the declared dialect.
pub fn canonicalize(script: &Script) -> CoreResult<Option<CanonicalScript>> {
    let kind = script.kind();
    let (tag, body) = match kind {
        ScriptKind::Native => (NATIVE_SCRIPT_TAG, native_body(script.bytes())?),
        ScriptKind::PlutusV1 => (PLUTUS_V1_SCRIPT_TAG, plutus_body(kind, script.bytes())?),
        ScriptKind::PlutusV2 => (PLUTUS_V2_SCRIPT_TAG, plutus_body(kind, script.bytes())?),
        ScriptKind::PlutusV3 => (PLUTUS_V3_SCRIPT_TAG, plutus_body(kind, script.bytes())?),
        ScriptKind::Unrecognized(_) => return Ok(None),
    };
    Ok(Some(CanonicalScript {
        kind: kind.clone(),
        tag,
        body,
    }))
}

/// Hash of `script` without registering it; `None` for unrecognized dialects.
pub fn script_hash(script: &Script) -> CoreResult<Option<ScriptHash>> {
    canonicalize(script)?
        .map(|canonical| canonical.hash())
        .transpose()
}

fn native_body(bytes: &[u8]) -> CoreResult<Vec<u8>> {
    let native =
        NativeScript::from_cbor(bytes).map_err(|e| CoreError::malformed(&ScriptKind::Native, e))?;
    native
        .to_cbor()
        .map_err(|e| CoreError::malformed(&ScriptKind::Native, e))
}

/// Precondition of the Plutus hash: the body is the single-wrapped program
/// peeled from the double-wrapped form, whatever framing came in.
fn plutus_body(kind: &ScriptKind, bytes: &[u8]) -> CoreResult<Vec<u8>> {
    let double = apply_double_cbor_encoding(bytes).map_err(|e| CoreError::malformed(kind, e))?;
    let single = decode_bytes(&double).map_err(|e| CoreError::malformed(kind, e))?;
    // the single-wrapped form must itself be a byte string around the program
    decode_bytes(&single).map_err(|e| CoreError::malformed(kind, e))?;
    Ok(single)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardano_cryptography::tagged_blake2b_224;
    use hex_literal::hex;

    const SINGLE: [u8; 9] = hex!("480100002221200101");
    const DOUBLE: [u8; 10] = hex!("49480100002221200101");

    #[test]
    fn test_plutus_body_is_single_wrapped() {
        for bytes in [&SINGLE[..], &DOUBLE[..]] {
            let canonical = canonicalize(&Script::plutus_v2(bytes)).unwrap().unwrap();
            assert_eq!(canonical.body(), &SINGLE);
            assert_eq!(canonical.tag(), 2);
        }
    }

    #[test]
    fn test_plutus_hash_matches_ledger_construction() {
        let hash = script_hash(&Script::plutus_v1(DOUBLE)).unwrap().unwrap();
        assert_eq!(hash, ScriptHash::from(tagged_blake2b_224(1, &SINGLE)));
    }

    #[test]
    fn test_plutus_versions_hash_apart() {
        let v1 = script_hash(&Script::plutus_v1(SINGLE)).unwrap();
        let v2 = script_hash(&Script::plutus_v2(SINGLE)).unwrap();
        let v3 = script_hash(&Script::plutus_v3(SINGLE)).unwrap();
        assert_ne!(v1, v2);
        assert_ne!(v2, v3);
        assert_ne!(v1, v3);
    }

    #[test]
    fn test_plutus_flat_bytes_are_malformed() {
        let result = canonicalize(&Script::plutus_v2(hex!("0100002221200101")));
        assert!(matches!(
            result,
            Err(CoreError::MalformedScript {
                kind: ScriptKind::PlutusV2,
                ..
            })
        ));
    }

    #[test]
    fn test_plutus_empty_is_malformed() {
        assert!(canonicalize(&Script::plutus_v1(Vec::new())).is_err());
    }

    #[test]
    fn test_native_canonical_body() {
        let script = Script::new(ScriptKind::Native, hex!("8204180a").to_vec());
        let canonical = canonicalize(&script).unwrap().unwrap();
        assert_eq!(canonical.body(), &hex!("82040a"));
        assert_eq!(canonical.tag(), 0);
        assert_eq!(
            canonical.hash().unwrap(),
            ScriptHash::from(tagged_blake2b_224(0, &hex!("82040a")))
        );
    }

    #[test]
    fn test_native_garbage_is_malformed() {
        let script = Script::new(ScriptKind::Native, hex!("49480100002221200101").to_vec());
        assert!(matches!(
            canonicalize(&script),
            Err(CoreError::MalformedScript {
                kind: ScriptKind::Native,
                ..
            })
        ));
    }

    #[test]
    fn test_unrecognized_has_no_canonical_form() {
        let script = Script::new("PlutusV9", SINGLE.to_vec());
        assert_eq!(canonicalize(&script).unwrap(), None);
        assert_eq!(script_hash(&script).unwrap(), None);
    }
}
