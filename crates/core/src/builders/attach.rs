// Copyright (C) 2025 The cardano-rs Authors.
//
// attach.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Script registration.
//!
//! [`attach_script`] is the one registration path. The category functions
//! exist so call sites are typed by what the script authorizes; they all land
//! in the same map.

use super::state::TxBuilderState;
use crate::script::{canonicalize, Script};
use crate::validators::{CertificateValidator, MintingPolicy, SpendingValidator, WithdrawalValidator};
use crate::{CoreError, CoreResult};
use cardano_config::UnrecognizedDialectPolicy;
use tracing::{debug, trace, warn};

/// Registers `script` under its canonical hash and returns `state`.
///
/// The bytes are stored as supplied, keyed by the hash of their canonical
/// form, so both framings of a Plutus script land under one key.
/// Re-attaching a script overwrites its entry. Malformed bytes fail the call
/// before the map is touched. Scripts of unrecognized dialects follow the
/// state's [`UnrecognizedDialectPolicy`].
pub fn attach_script(state: &mut TxBuilderState, script: Script) -> CoreResult<&mut TxBuilderState> {
    let Some(canonical) = canonicalize(&script)? else {
        return match state.config().unrecognized_dialect {
            UnrecognizedDialectPolicy::Ignore => {
                warn!(dialect = %script.kind(), "ignoring script of unrecognized dialect");
                Ok(state)
            }
            UnrecognizedDialectPolicy::Reject => {
                Err(CoreError::UnrecognizedDialect(script.kind().to_string()))
            }
        };
    };
    let hash = canonical.hash()?;

    debug!(%hash, kind = %script.kind(), len = script.bytes().len(), "attaching script");
    if let Some(previous) = state.insert_script(hash, script) {
        trace!(%hash, previous_len = previous.bytes().len(), "replaced registered script");
    }
    Ok(state)
}

pub fn attach_spending_validator(
    state: &mut TxBuilderState,
    validator: SpendingValidator,
) -> CoreResult<&mut TxBuilderState> {
    attach_script(state, validator.into())
}

pub fn attach_minting_policy(
    state: &mut TxBuilderState,
    policy: MintingPolicy,
) -> CoreResult<&mut TxBuilderState> {
    attach_script(state, policy.into())
}

pub fn attach_certificate_validator(
    state: &mut TxBuilderState,
    validator: CertificateValidator,
) -> CoreResult<&mut TxBuilderState> {
    attach_script(state, validator.into())
}

pub fn attach_withdrawal_validator(
    state: &mut TxBuilderState,
    validator: WithdrawalValidator,
) -> CoreResult<&mut TxBuilderState> {
    attach_script(state, validator.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{script_hash, ScriptKind};
    use cardano_config::RegistrarConfig;
    use hex_literal::hex;

    const SINGLE: [u8; 9] = hex!("480100002221200101");
    const DOUBLE: [u8; 10] = hex!("49480100002221200101");

    #[test]
    fn test_attach_returns_same_state() {
        let mut state = TxBuilderState::new();
        let ptr: *const TxBuilderState = &state;
        let returned = attach_script(&mut state, Script::plutus_v2(DOUBLE)).unwrap();
        assert!(std::ptr::eq(ptr, returned));
    }

    #[test]
    fn test_both_framings_share_a_key() {
        let mut state = TxBuilderState::new();
        attach_script(&mut state, Script::plutus_v2(SINGLE)).unwrap();
        let first: Vec<_> = state.scripts().keys().copied().collect();

        attach_script(&mut state, Script::plutus_v2(DOUBLE)).unwrap();
        assert_eq!(state.script_count(), 1);
        assert!(state.contains_script(&first[0]));
        // the last supplied bytes are kept
        assert_eq!(state.script(&first[0]).unwrap().bytes(), &DOUBLE);
    }

    #[test]
    fn test_stored_bytes_are_as_supplied() {
        let mut state = TxBuilderState::new();
        let script = Script::plutus_v1(SINGLE);
        let hash = script_hash(&script).unwrap().unwrap();
        attach_script(&mut state, script.clone()).unwrap();
        assert_eq!(state.script(&hash), Some(&script));
    }

    #[test]
    fn test_malformed_leaves_state_untouched() {
        let mut state = TxBuilderState::new();
        attach_script(&mut state, Script::plutus_v2(DOUBLE)).unwrap();
        let before = state.scripts().clone();

        let result = attach_script(&mut state, Script::new(ScriptKind::Native, vec![0xff]));
        assert!(matches!(result, Err(CoreError::MalformedScript { .. })));
        assert_eq!(state.scripts(), &before);
    }

    #[test]
    fn test_unrecognized_ignored_by_default() {
        let mut state = TxBuilderState::new();
        attach_script(&mut state, Script::new("PlutusV7", DOUBLE.to_vec())).unwrap();
        assert_eq!(state.script_count(), 0);
    }

    #[test]
    fn test_unrecognized_rejected_when_strict() {
        let mut state = TxBuilderState::with_config(RegistrarConfig::strict());
        let result = attach_script(&mut state, Script::new("PlutusV7", DOUBLE.to_vec()));
        assert_eq!(
            result.unwrap_err(),
            CoreError::UnrecognizedDialect("PlutusV7".to_string())
        );
        assert_eq!(state.script_count(), 0);
    }

    #[test]
    fn test_category_wrappers_share_the_map() {
        let mut state = TxBuilderState::new();
        attach_spending_validator(&mut state, Script::plutus_v1(DOUBLE).into()).unwrap();
        attach_minting_policy(&mut state, Script::plutus_v2(DOUBLE).into()).unwrap();
        attach_certificate_validator(&mut state, Script::plutus_v3(DOUBLE).into()).unwrap();
        attach_withdrawal_validator(
            &mut state,
            Script::new(ScriptKind::Native, hex!("82040a").to_vec()).into(),
        )
        .unwrap();
        assert_eq!(state.script_count(), 4);
    }
}
