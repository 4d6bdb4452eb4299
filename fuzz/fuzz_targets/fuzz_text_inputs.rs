#![no_main]

use libfuzzer_sys::fuzz_target;

use nano_work::{
    derive_work_difficulty, derive_work_multiplier, get_work_value, parse_work,
    validate_difficulty, validate_work,
};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Split into up to three fields so each entry point sees hostile text.
    let mut fields = text.splitn(3, '|');
    let first = fields.next().unwrap_or_default();
    let second = fields.next().unwrap_or_default();
    let third = fields.next();

    if let Ok(canonical) = parse_work(first) {
        assert_eq!(parse_work(&canonical).as_deref(), Ok(canonical.as_str()));
    }
    let _ = validate_difficulty(first);
    let _ = get_work_value(first, second);
    let _ = validate_work(first, second, third);

    if let Ok(multiplier) = derive_work_multiplier(first, third) {
        assert!(multiplier.is_finite() && multiplier > 0.0);
    }
    if let Ok(multiplier) = second.parse::<f64>() {
        if let Ok(difficulty) = derive_work_difficulty(multiplier, third) {
            assert!(validate_difficulty(&difficulty).is_ok());
        }
    }
});
