#![no_main]

use libfuzzer_sys::fuzz_target;

use primecalc_core::primality::is_prime;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as n so the reference check stays fast
    let n = i64::from(i32::from_le_bytes([data[0], data[1], data[2], data[3]]));

    let expected = n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
    assert_eq!(is_prime(n), expected, "primality mismatch for {n}");
    if let Ok(unsigned) = u64::try_from(n) {
        assert_eq!(is_prime(unsigned), expected);
    }
});
