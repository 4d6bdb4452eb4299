use proptest::prelude::*;

use nano_crypto::base32::{decoded_len, encoded_len, ALPHABET};
use nano_crypto::{bytes_to_nbase32, decode_account, encode_account, nbase32_to_bytes};
use nano_types::PublicKey;

proptest! {
    /// Decoding undoes encoding for every non-empty byte sequence.
    #[test]
    fn nbase32_roundtrip(bytes in prop::collection::vec(any::<u8>(), 1..128)) {
        let encoded = bytes_to_nbase32(&bytes).unwrap();
        prop_assert_eq!(nbase32_to_bytes(&encoded).unwrap(), bytes);
    }

    /// Encoded output has ceil(bits / 5) characters, all from the alphabet.
    #[test]
    fn nbase32_output_shape(bytes in prop::collection::vec(any::<u8>(), 1..128)) {
        let encoded = bytes_to_nbase32(&bytes).unwrap();
        prop_assert_eq!(encoded.len(), encoded_len(bytes.len()));
        prop_assert!(encoded.bytes().all(|c| ALPHABET.contains(&c)));
    }

    /// Any alphabet string decodes to floor(len * 5 / 8) bytes.
    #[test]
    fn nbase32_decode_length(s in "[13456789abcdefghijkmnopqrstuwxyz]{1,100}") {
        let decoded = nbase32_to_bytes(&s).unwrap();
        prop_assert_eq!(decoded.len(), decoded_len(s.len()));
    }

    /// Any string containing a symbol outside the alphabet is rejected.
    #[test]
    fn nbase32_foreign_symbol_rejected(
        prefix in "[13456789abcdefghijkmnopqrstuwxyz]{0,20}",
        bad in "[02lvA-Z_]",
    ) {
        let input = format!("{}{}", prefix, bad);
        prop_assert!(nbase32_to_bytes(&input).is_err());
    }

    /// Account ids decode back to their key.
    #[test]
    fn account_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let key = PublicKey::new(bytes);
        let account = encode_account(&key);
        prop_assert_eq!(account.len(), 65);
        prop_assert_eq!(decode_account(&account).unwrap(), key);
    }
}
