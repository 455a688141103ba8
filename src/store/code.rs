//! Code Generation Module
//!
//! Random short codes, the timestamp fallback used when the attempt budget
//! runs out, and normalization of user-typed codes.

use rand::Rng;

// == Random Code ==
/// Draws a uniformly random code of `length` characters from `alphabet`.
///
/// `alphabet` must be non-empty.
pub fn random_code<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect()
}

// == Fallback Code ==
/// Derives a code from the last `length` decimal digits of `now_ms`.
///
/// Used only once random generation has exhausted its attempts. The result is
/// not checked against live codes.
pub fn fallback_code(now_ms: u64, length: usize) -> String {
    let digits = now_ms.to_string();
    if digits.len() >= length {
        digits[digits.len() - length..].to_string()
    } else {
        format!("{:0>width$}", digits, width = length)
    }
}

// == Normalize ==
/// Normalizes user input into the generation alphabet's form.
///
/// Uppercases, drops anything that is not ASCII alphanumeric, and truncates to
/// `length` characters.
pub fn normalize_code(input: &str, length: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .take(length)
        .collect()
}
