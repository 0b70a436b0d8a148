// Copyright (C) 2025 The cardano-rs Authors.
//
// state.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Mutable state of one transaction build.

use super::attach;
use crate::script::Script;
use crate::validators::{CertificateValidator, MintingPolicy, SpendingValidator, WithdrawalValidator};
use crate::{CoreResult, ScriptHash};
use cardano_config::RegistrarConfig;
use std::collections::HashMap;

/// State of a transaction under construction.
///
/// Owned by a single build. The attach methods take `&mut self` and hand the
/// same reference back, so registrations chain:
///
/// ```rust
/// use cardano_core::{Script, TxBuilderState};
///
/// # fn main() -> cardano_core::CoreResult<()> {
/// let mut state = TxBuilderState::new();
/// state
///     .attach_script(Script::from_cbor_hex("PlutusV2", "49480100002221200101")?)?
///     .attach_script(Script::from_cbor_hex("Native", "82051903e8")?)?;
/// assert_eq!(state.script_count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TxBuilderState {
    config: RegistrarConfig,
    scripts: HashMap<ScriptHash, Script>,
}

impl TxBuilderState {
    /// Creates an empty state with the default registrar configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state with the given registrar configuration.
    pub fn with_config(config: RegistrarConfig) -> Self {
        Self {
            config,
            scripts: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    /// Registered scripts keyed by hash, each with the bytes it was attached with.
    pub fn scripts(&self) -> &HashMap<ScriptHash, Script> {
        &self.scripts
    }

    pub fn script(&self, hash: &ScriptHash) -> Option<&Script> {
        self.scripts.get(hash)
    }

    /// Looks a script up by the hex form of its hash.
    pub fn script_by_hex(&self, hash_hex: &str) -> CoreResult<Option<&Script>> {
        let hash: ScriptHash = hash_hex.parse()?;
        Ok(self.scripts.get(&hash))
    }

    pub fn contains_script(&self, hash: &ScriptHash) -> bool {
        self.scripts.contains_key(hash)
    }

    pub fn script_count(&self) -> usize {
        self.scripts.len()
    }

    /// Hands the script map to the next build stage.
    pub fn into_scripts(self) -> HashMap<ScriptHash, Script> {
        self.scripts
    }

    pub(crate) fn insert_script(&mut self, hash: ScriptHash, script: Script) -> Option<Script> {
        self.scripts.insert(hash, script)
    }

    /// See [`attach::attach_script`].
    pub fn attach_script(&mut self, script: Script) -> CoreResult<&mut Self> {
        attach::attach_script(self, script)
    }

    pub fn attach_spending_validator(&mut self, validator: SpendingValidator) -> CoreResult<&mut Self> {
        attach::attach_spending_validator(self, validator)
    }

    pub fn attach_minting_policy(&mut self, policy: MintingPolicy) -> CoreResult<&mut Self> {
        attach::attach_minting_policy(self, policy)
    }

    pub fn attach_certificate_validator(
        &mut self,
        validator: CertificateValidator,
    ) -> CoreResult<&mut Self> {
        attach::attach_certificate_validator(self, validator)
    }

    pub fn attach_withdrawal_validator(
        &mut self,
        validator: WithdrawalValidator,
    ) -> CoreResult<&mut Self> {
        attach::attach_withdrawal_validator(self, validator)
    }
}
