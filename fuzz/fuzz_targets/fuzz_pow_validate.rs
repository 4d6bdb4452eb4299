#![no_main]

use libfuzzer_sys::fuzz_target;

use nano_types::BlockHash;
use nano_work::{meets_difficulty, work_value, Difficulty, WorkNonce};

fuzz_target!(|data: &[u8]| {
    // 32 bytes of hash followed by 8 bytes of nonce, then an optional difficulty.
    if data.len() < 40 {
        return;
    }
    let mut hash_bytes = [0u8; 32];
    hash_bytes.copy_from_slice(&data[..32]);
    let mut nonce_bytes = [0u8; 8];
    nonce_bytes.copy_from_slice(&data[32..40]);

    let block_hash = BlockHash::new(hash_bytes);
    let nonce = WorkNonce(u64::from_le_bytes(nonce_bytes));

    let difficulty = match data.get(40..48) {
        Some(bytes) => {
            let mut d = [0u8; 8];
            d.copy_from_slice(bytes);
            Difficulty(u64::from_le_bytes(d))
        }
        None => nano_work::DEFAULT_DIFFICULTY,
    };

    let value = work_value(&block_hash, nonce);
    assert_eq!(meets_difficulty(&block_hash, nonce, difficulty), value >= difficulty.value());
    assert!(meets_difficulty(&block_hash, nonce, Difficulty(0)));
});
