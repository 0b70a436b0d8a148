// Copyright (C) 2025 The cardano-rs Authors.
//
// cbor.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! CBOR byte-string framing.
//!
//! Plutus scripts travel as CBOR byte strings nested one or two levels deep.
//! These helpers peel and add those layers. Every decode must consume the
//! whole input: a byte string followed by anything else is not a framing
//! layer.

use crate::{IoError, IoResult};
use minicbor::data::Type;
use minicbor::{Decoder, Encoder};

/// Decodes `data` as exactly one CBOR byte string and returns its content.
///
/// Both definite and indefinite (chunked) byte strings are accepted.
pub fn decode_bytes(data: &[u8]) -> IoResult<Vec<u8>> {
    let mut decoder = Decoder::new(data);
    let content = match decoder.datatype()? {
        Type::Bytes => decoder.bytes()?.to_vec(),
        Type::BytesIndef => {
            let mut content = Vec::new();
            for chunk in decoder.bytes_iter()? {
                content.extend_from_slice(chunk?);
            }
            content
        }
        other => {
            return Err(IoError::UnexpectedType(format!(
                "expected byte string, found {}",
                other
            )))
        }
    };
    ensure_consumed(&decoder, data.len())?;
    Ok(content)
}

/// Wraps `data` in one definite-length CBOR byte string.
pub fn encode_bytes(data: &[u8]) -> IoResult<Vec<u8>> {
    let mut encoder = Encoder::new(Vec::with_capacity(data.len() + 9));
    encoder.bytes(data)?;
    Ok(encoder.into_writer())
}

/// Counts the nested byte-string layers around `data`, stopping at `max`.
pub fn wrapping_depth(data: &[u8], max: usize) -> usize {
    let mut depth = 0;
    let mut current = match decode_bytes(data) {
        Ok(inner) if max > 0 => inner,
        _ => return 0,
    };
    depth += 1;
    while depth < max {
        match decode_bytes(&current) {
            Ok(inner) => {
                current = inner;
                depth += 1;
            }
            Err(_) => break,
        }
    }
    depth
}

pub(crate) fn ensure_consumed(decoder: &Decoder<'_>, len: usize) -> IoResult<()> {
    let remaining = len.saturating_sub(decoder.position());
    if remaining > 0 {
        return Err(IoError::TrailingBytes { remaining });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_decode_definite_bytes() {
        let data = hex!("4401020304");
        assert_eq!(decode_bytes(&data).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_decode_indefinite_bytes() {
        // (_ h'0102', h'0304')
        let data = hex!("5f420102420304ff");
        assert_eq!(decode_bytes(&data).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let data = hex!("420102ff");
        assert_eq!(
            decode_bytes(&data),
            Err(IoError::TrailingBytes { remaining: 1 })
        );
    }

    #[test]
    fn test_decode_rejects_other_types() {
        let data = hex!("01");
        assert!(matches!(
            decode_bytes(&data),
            Err(IoError::UnexpectedType(_))
        ));
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(decode_bytes(&[]), Err(IoError::UnexpectedEof));
    }

    #[test]
    fn test_decode_truncated() {
        let data = hex!("450102");
        assert_eq!(decode_bytes(&data), Err(IoError::UnexpectedEof));
    }

    #[test]
    fn test_encode_bytes_heads() {
        assert_eq!(encode_bytes(&[]).unwrap(), hex!("40"));
        assert_eq!(encode_bytes(&[0xaa; 3]).unwrap(), hex!("43aaaaaa"));

        let long = vec![0u8; 24];
        let encoded = encode_bytes(&long).unwrap();
        assert_eq!(&encoded[..2], &hex!("5818"));
        assert_eq!(encoded.len(), 26);
    }

    #[test]
    fn test_wrapping_depth() {
        let flat = hex!("0100002221200101");
        let single = encode_bytes(&flat).unwrap();
        let double = encode_bytes(&single).unwrap();

        assert_eq!(wrapping_depth(&flat, 2), 0);
        assert_eq!(wrapping_depth(&single, 2), 1);
        assert_eq!(wrapping_depth(&double, 2), 2);
        assert_eq!(wrapping_depth(&double, 1), 1);
        assert_eq!(wrapping_depth(&double, 0), 0);
    }
}
