//! Property tests for CBOR byte-string framing.

use cardano_io::{decode_bytes, encode_bytes, wrapping_depth, IoError};
use proptest::prelude::*;

proptest! {
    /// Wrapping twice is always seen as at least two layers, whatever the payload.
    #[test]
    fn prop_double_wrap_has_depth_two(payload in prop::collection::vec(any::<u8>(), 0..512)) {
        let double = encode_bytes(&encode_bytes(&payload).unwrap()).unwrap();
        prop_assert_eq!(wrapping_depth(&double, 2), 2);
    }

    /// Unwrapping a wrapped payload returns it unchanged, including long payloads
    /// that need multi-byte length heads.
    #[test]
    fn prop_unwrap_recovers_payload(payload in prop::collection::vec(any::<u8>(), 0..1024)) {
        let single = encode_bytes(&payload).unwrap();
        prop_assert_eq!(decode_bytes(&single).unwrap(), payload);
    }

    /// Any suffix after a byte string makes the input something other than framing.
    #[test]
    fn prop_trailing_bytes_rejected(
        payload in prop::collection::vec(any::<u8>(), 0..64),
        suffix in prop::collection::vec(any::<u8>(), 1..8)
    ) {
        let mut data = encode_bytes(&payload).unwrap();
        data.extend_from_slice(&suffix);
        prop_assert_eq!(
            decode_bytes(&data),
            Err(IoError::TrailingBytes { remaining: suffix.len() })
        );
    }
}

#[test]
fn test_text_string_is_not_framing() {
    // "abc" as a CBOR text string
    let data = [0x63, b'a', b'b', b'c'];
    assert!(matches!(decode_bytes(&data), Err(IoError::UnexpectedType(_))));
    assert_eq!(wrapping_depth(&data, 2), 0);
}
