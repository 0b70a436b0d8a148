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

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IoError {
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("Unexpected CBOR type: {0}")]
    UnexpectedType(String),
    #[error("{remaining} trailing bytes after CBOR item")]
    TrailingBytes { remaining: usize },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Encoding failed: {0}")]
    Encode(String),
}

impl From<minicbor::decode::Error> for IoError {
    fn from(err: minicbor::decode::Error) -> Self {
        if err.is_end_of_input() {
            IoError::UnexpectedEof
        } else if err.is_type_mismatch() {
            IoError::UnexpectedType(err.to_string())
        } else {
            IoError::InvalidData(err.to_string())
        }
    }
}

impl<E: std::fmt::Display> From<minicbor::encode::Error<E>> for IoError {
    fn from(err: minicbor::encode::Error<E>) -> Self {
        IoError::Encode(err.to_string())
    }
}

pub type IoResult<T> = Result<T, IoError>;
