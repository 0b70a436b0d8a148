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

//! # Cardano Core
//!
//! Script registry for Cardano transaction building.
//!
//! While a transaction is assembled, every script it references is recorded
//! once in the build state, keyed by its script hash. This crate computes
//! that hash the way the ledger does and keeps the registry.
//!
//! ## Features
//!
//! - **Scripts**: native, Plutus V1, V2 and V3 scripts with caller-supplied
//!   framing
//! - **Canonicalization**: native scripts re-encoded canonically, Plutus
//!   scripts normalized to double-wrapped CBOR before hashing
//! - **Registry**: `TxBuilderState` and the `attach_*` operations
//!
//! ## Example
//!
//! ```rust
//! use cardano_core::{Script, ScriptKind, TxBuilderState};
//!
//! # fn main() -> cardano_core::CoreResult<()> {
//! let mut state = TxBuilderState::new();
//!
//! // single- and double-wrapped forms of the same program
//! state.attach_script(Script::from_cbor_hex(ScriptKind::PlutusV2, "480100002221200101")?)?;
//! state.attach_script(Script::from_cbor_hex(ScriptKind::PlutusV2, "49480100002221200101")?)?;
//! assert_eq!(state.script_count(), 1);
//! # Ok(())
//! # }
//! ```

/// Transaction build state and script attachment
pub mod builders;
/// Core error types
pub mod error;
/// Script types, canonical forms and hashing
pub mod script;
/// 224-bit script hash
pub mod script_hash;
/// Validator category types
pub mod validators;

// Re-exports for convenient access
pub use builders::{
    attach_certificate_validator, attach_minting_policy, attach_script,
    attach_spending_validator, attach_withdrawal_validator, TxBuilderState,
};
pub use error::{CoreError, CoreResult, Result};
pub use script::{
    apply_double_cbor_encoding, apply_single_cbor_encoding, canonicalize, script_hash,
    CanonicalScript, NativeScript, Script, ScriptKind, UnrecognizedTag,
};
pub use script_hash::ScriptHash;
pub use validators::{CertificateValidator, MintingPolicy, SpendingValidator, WithdrawalValidator};
