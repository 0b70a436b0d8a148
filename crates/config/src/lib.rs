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

//! Cardano Configuration Module
//!
//! Protocol constants shared by the workspace and the configuration of the
//! script registrar used while building transactions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size of a script hash (BLAKE2b-224) in bytes
pub const SCRIPT_HASH_SIZE: usize = 28;
/// Size of a verification key hash in bytes
pub const ADDR_KEYHASH_SIZE: usize = 28;

/// Hash domain tag prefixed to native scripts before hashing
pub const NATIVE_SCRIPT_TAG: u8 = 0x00;
/// Hash domain tag prefixed to Plutus V1 scripts before hashing
pub const PLUTUS_V1_SCRIPT_TAG: u8 = 0x01;
/// Hash domain tag prefixed to Plutus V2 scripts before hashing
pub const PLUTUS_V2_SCRIPT_TAG: u8 = 0x02;
/// Hash domain tag prefixed to Plutus V3 scripts before hashing
pub const PLUTUS_V3_SCRIPT_TAG: u8 = 0x03;

/// What the registrar does with a script whose dialect it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedDialectPolicy {
    /// Leave the builder state untouched and carry on.
    #[default]
    Ignore,
    /// Fail the attach call.
    Reject,
}

/// Registrar configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarConfig {
    pub unrecognized_dialect: UnrecognizedDialectPolicy,
}

impl RegistrarConfig {
    /// Configuration that fails on scripts of unknown dialects.
    pub fn strict() -> Self {
        Self {
            unrecognized_dialect: UnrecognizedDialectPolicy::Reject,
        }
    }

    /// Parses a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
