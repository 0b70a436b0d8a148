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

//! Transaction build state and the operations that populate it.

pub mod attach;
pub mod state;

pub use attach::{
    attach_certificate_validator, attach_minting_policy, attach_script,
    attach_spending_validator, attach_withdrawal_validator,
};
pub use state::TxBuilderState;
