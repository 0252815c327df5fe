#![no_main]

use libfuzzer_sys::fuzz_target;

use primecalc_core::enumerator::PrimeEnumerator;
use primecalc_core::options::Options;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let count = i64::from_le_bytes(data[0..8].try_into().unwrap());
    // Ceiling capped at 2000 for speed
    let limit = u64::from(u16::from_le_bytes([data[8], data[9]]) % 2000);

    let enumerator = PrimeEnumerator::new(Options::with_max_count(limit));
    match enumerator.enumerate(count) {
        Ok(seq) => {
            assert_eq!(seq.len() as i64, count);
            assert_eq!(seq[0], 2);
            assert!(seq.windows(2).all(|w| w[0] < w[1]));
        }
        Err(err) => assert!(count <= 0 || count as u64 > limit || limit == 0, "{err}"),
    }
});
