// Copyright (C) 2025 The cardano-rs Authors.
//
// error.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Core error types.

use crate::script::ScriptKind;
use thiserror::Error;

/// Result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Result type alias
pub type Result<T> = CoreResult<T>;

/// Errors raised while canonicalizing, hashing or registering scripts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Malformed {kind} script: {reason}")]
    MalformedScript { kind: ScriptKind, reason: String },

    #[error("Script hash computation failed: {0}")]
    HashComputation(String),

    #[error("Unrecognized script dialect: {0}")]
    UnrecognizedDialect(String),

    #[error("Invalid script hash: {0}")]
    InvalidScriptHash(String),

    #[error("Hex decode error: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl CoreError {
    pub fn malformed(kind: &ScriptKind, reason: impl ToString) -> Self {
        Self::MalformedScript {
            kind: kind.clone(),
            reason: reason.to_string(),
        }
    }
}

impl From<cardano_cryptography::Error> for CoreError {
    fn from(err: cardano_cryptography::Error) -> Self {
        CoreError::HashComputation(err.to_string())
    }
}
