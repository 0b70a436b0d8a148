// Copyright (C) 2025 The cardano-rs Authors.
//
// validators.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Validator categories.
//!
//! Each category is a distinct type over the same [`Script`] so that call
//! sites say what a script authorizes. The builder keeps all of them in one
//! script map; the category is not recorded.

use crate::script::Script;
use serde::{Deserialize, Serialize};

macro_rules! validator_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Script);

        impl $name {
            pub fn new(script: Script) -> Self {
                Self(script)
            }

            pub fn script(&self) -> &Script {
                &self.0
            }

            pub fn into_script(self) -> Script {
                self.0
            }
        }

        impl From<Script> for $name {
            fn from(script: Script) -> Self {
                Self(script)
            }
        }

        impl From<$name> for Script {
            fn from(validator: $name) -> Self {
                validator.0
            }
        }

        impl AsRef<Script> for $name {
            fn as_ref(&self) -> &Script {
                &self.0
            }
        }
    };
}

validator_type!(
    /// Script guarding outputs locked at a script address.
    SpendingValidator
);

validator_type!(
    /// Script controlling minting and burning under its policy id.
    MintingPolicy
);

validator_type!(
    /// Script authorizing certificates for a script stake credential.
    CertificateValidator
);

validator_type!(
    /// Script authorizing reward withdrawals from a script stake credential.
    WithdrawalValidator
);
