#![no_main]

use libfuzzer_sys::fuzz_target;

use nano_crypto::{bytes_to_nbase32, decode_account, encode_account, nbase32_to_bytes};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary text never panics.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = nbase32_to_bytes(text);
        if let Ok(public_key) = decode_account(text) {
            // Anything that decodes re-encodes to a valid account id.
            let again = encode_account(&public_key);
            assert_eq!(decode_account(&again), Ok(public_key));
        }
    }

    // Encoding arbitrary bytes always decodes back to the same bytes.
    if !data.is_empty() {
        let encoded = bytes_to_nbase32(data).expect("non-empty input encodes");
        let decoded = nbase32_to_bytes(&encoded).expect("own output decodes");
        assert_eq!(decoded, data);
    }
});
