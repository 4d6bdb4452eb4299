use proptest::prelude::*;

use nano_types::BlockHash;
use nano_work::{
    derive_work_difficulty, derive_work_multiplier, get_work_value, meets_difficulty, parse_work,
    validate_difficulty, validate_work, work_value, Difficulty, WorkGenerator, WorkNonce,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Generated PoW always passes its own validation.
    #[test]
    fn generated_pow_always_valid(
        hash_bytes in prop::array::uniform32(0u8..),
        difficulty in 0u64..0xf000_0000_0000_0000,
    ) {
        let block_hash = BlockHash::new(hash_bytes);
        let difficulty = Difficulty(difficulty);
        let nonce = WorkGenerator::new()
            .generate(&block_hash, difficulty, None)
            .unwrap()
            .unwrap();
        prop_assert!(
            meets_difficulty(&block_hash, nonce, difficulty),
            "generated nonce must pass validation"
        );
    }

    /// Zero difficulty always passes regardless of nonce.
    #[test]
    fn zero_difficulty_always_passes(
        hash_bytes in prop::array::uniform32(0u8..),
        nonce in any::<u64>(),
    ) {
        let block_hash = BlockHash::new(hash_bytes);
        prop_assert!(meets_difficulty(&block_hash, WorkNonce(nonce), Difficulty(0)));
    }

    /// Text validation agrees with comparing the work value.
    #[test]
    fn validate_work_iff_value_meets_difficulty(
        hash_bytes in prop::array::uniform32(0u8..),
        nonce in any::<u64>(),
        difficulty in any::<u64>(),
    ) {
        let hash = BlockHash::new(hash_bytes).to_string();
        let work = WorkNonce(nonce).to_hex();
        let difficulty = Difficulty(difficulty).to_hex();
        let value = get_work_value(&hash, &work).unwrap();
        prop_assert_eq!(
            validate_work(&hash, &work, Some(&difficulty)).unwrap(),
            value >= u64::from_str_radix(&difficulty, 16).unwrap()
        );
    }

    /// Lower difficulty is easier to meet: if valid at D, then valid at D-1.
    #[test]
    fn lower_difficulty_is_easier(
        hash_bytes in prop::array::uniform32(0u8..),
        nonce in any::<u64>(),
        difficulty in 1u64..u64::MAX,
    ) {
        let block_hash = BlockHash::new(hash_bytes);
        let nonce = WorkNonce(nonce);
        if meets_difficulty(&block_hash, nonce, Difficulty(difficulty)) {
            prop_assert!(meets_difficulty(&block_hash, nonce, Difficulty(difficulty - 1)));
        }
    }

    /// Work value is case-insensitive in its inputs.
    #[test]
    fn work_value_ignores_case(
        hash_bytes in prop::array::uniform32(0u8..),
        nonce in any::<u64>(),
    ) {
        let hash = BlockHash::new(hash_bytes);
        let work = WorkNonce(nonce);
        let upper = get_work_value(&hash.to_string(), &work.to_hex().to_uppercase()).unwrap();
        let lower = get_work_value(&hash.to_string().to_lowercase(), &work.to_hex()).unwrap();
        prop_assert_eq!(upper, lower);
        prop_assert_eq!(upper, work_value(&hash, work));
    }

    /// Canonicalisation lowercases and otherwise preserves the input.
    #[test]
    fn canonical_forms_are_lowercase(s in "[0-9a-fA-F]{16}") {
        prop_assert_eq!(parse_work(&s).unwrap(), s.to_lowercase());
        prop_assert_eq!(validate_difficulty(&s).unwrap(), s.to_lowercase());
    }

    /// Wrong-length or non-hex text is always rejected.
    #[test]
    fn malformed_work_rejected(s in "[0-9a-f]{0,15}|[0-9a-f]{17,24}|[g-z]{16}") {
        prop_assert!(parse_work(&s).is_err());
        prop_assert!(validate_difficulty(&s).is_err());
    }

    /// Deriving a difficulty and measuring its multiplier gives the multiplier back.
    #[test]
    fn multiplier_difficulty_approximate_inverse(
        multiplier in (1.0f64 / 64.0)..64.0,
        base in prop::sample::select(vec![
            "ffffffc000000000",
            "fffffff800000000",
            "fffffe0000000000",
            "ff00000000000000",
        ]),
    ) {
        let difficulty = derive_work_difficulty(multiplier, Some(base)).unwrap();
        let back = derive_work_multiplier(&difficulty, Some(base)).unwrap();
        prop_assert!(
            (back - multiplier).abs() <= multiplier * 1e-5,
            "{} -> {} -> {}", multiplier, difficulty, back
        );
    }
}
