// Copyright (C) 2025 The cardano-rs Authors.
//
// serializable.rs file belongs to the cardano-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Serialization traits for CBOR-encoded ledger objects.

use crate::cbor::ensure_consumed;
use crate::IoResult;
use minicbor::{Decode, Decoder, Encode, Encoder};

/// Ledger objects with a CBOR wire form.
///
/// Implemented for every `minicbor` type. Unlike `minicbor::decode`,
/// `from_cbor` rejects input with bytes left over after the item.
pub trait Serializable: Sized {
    /// Encodes the object to a byte array.
    fn to_cbor(&self) -> IoResult<Vec<u8>>;

    /// Decodes the object from a byte array that holds exactly one item.
    fn from_cbor(data: &[u8]) -> IoResult<Self>;
}

impl<T> Serializable for T
where
    T: Encode<()> + for<'b> Decode<'b, ()>,
{
    fn to_cbor(&self) -> IoResult<Vec<u8>> {
        let mut encoder = Encoder::new(Vec::new());
        encoder.encode(self)?;
        Ok(encoder.into_writer())
    }

    fn from_cbor(data: &[u8]) -> IoResult<Self> {
        let mut decoder = Decoder::new(data);
        let value = decoder.decode()?;
        ensure_consumed(&decoder, data.len())?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IoError;
    use hex_literal::hex;
    use minicbor::{decode, encode};

    #[derive(Debug, PartialEq)]
    struct Pair {
        left: u32,
        right: u32,
    }

    impl<C> Encode<C> for Pair {
        fn encode<W: encode::Write>(
            &self,
            e: &mut Encoder<W>,
            _ctx: &mut C,
        ) -> Result<(), encode::Error<W::Error>> {
            e.array(2)?.u32(self.left)?.u32(self.right)?;
            Ok(())
        }
    }

    impl<'b, C> Decode<'b, C> for Pair {
        fn decode(d: &mut Decoder<'b>, _ctx: &mut C) -> Result<Self, decode::Error> {
            d.array()?;
            Ok(Pair {
                left: d.u32()?,
                right: d.u32()?,
            })
        }
    }

    #[test]
    fn test_to_cbor() {
        let pair = Pair { left: 1, right: 500 };
        assert_eq!(pair.to_cbor().unwrap(), hex!("82011901f4"));
    }

    #[test]
    fn test_from_cbor_exact() {
        let pair = Pair::from_cbor(&hex!("82011901f4")).unwrap();
        assert_eq!(pair, Pair { left: 1, right: 500 });
    }

    #[test]
    fn test_from_cbor_trailing() {
        let result = Pair::from_cbor(&hex!("82011901f400"));
        assert_eq!(result, Err(IoError::TrailingBytes { remaining: 1 }));
    }
}
