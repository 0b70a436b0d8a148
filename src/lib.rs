//! # cardano-rs: script registry for Cardano transaction building
//!
//! Records the scripts a transaction needs, once each, under the hash the
//! ledger will know them by.
//!
//! ## Features
//!
//! - **Dialects**: native, Plutus V1, V2 and V3 scripts
//! - **Framing-agnostic**: Plutus scripts hash the same whether supplied
//!   single- or double-wrapped in CBOR
//! - **Typed entry points**: spending, minting, certificate and withdrawal
//!   validators share one registry
//! - **Configurable policy** for scripts of unknown dialects
//!
//! ## Quick Start
//!
//! ```rust
//! use cardano_rs::prelude::*;
//!
//! fn main() -> CoreResult<()> {
//!     let mut state = TxBuilderState::new();
//!
//!     let policy = MintingPolicy::new(Script::from_cbor_hex("PlutusV2", "49480100002221200101")?);
//!     let lock = SpendingValidator::new(Script::native(&NativeScript::InvalidBefore(1_000))?);
//!
//!     state
//!         .attach_minting_policy(policy)?
//!         .attach_spending_validator(lock)?;
//!
//!     for (hash, script) in state.scripts() {
//!         println!("{} -> {}", hash, script.kind());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`cardano_config`] - Protocol constants and registrar configuration
//! - [`cardano_io`] - CBOR byte-string framing
//! - [`cardano_cryptography`] - BLAKE2b digests
//! - [`cardano_core`] - Scripts, canonicalization, builder state

pub use cardano_config;
pub use cardano_core;
pub use cardano_cryptography;
pub use cardano_io;

/// Common imports for building transactions.
pub mod prelude {
    pub use cardano_config::{RegistrarConfig, UnrecognizedDialectPolicy};
    pub use cardano_core::{
        attach_certificate_validator, attach_minting_policy, attach_script,
        attach_spending_validator, attach_withdrawal_validator, script_hash,
        CertificateValidator, CoreError, CoreResult, MintingPolicy, NativeScript, Script,
        ScriptHash, ScriptKind, SpendingValidator, TxBuilderState, WithdrawalValidator,
    };
}

/// Version of the cardano-rs crates.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
