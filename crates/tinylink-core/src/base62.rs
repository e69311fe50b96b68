//! Base62 encoding of 32-bit hash values.
//!
//! The alphabet is digits, then uppercase, then lowercase letters. Encoded
//! values carry no padding: `0` is `"0"` and `u32::MAX` is `"4gfFC3"`.

/// The base62 alphabet, in digit order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Longest encoding of a `u32`.
pub const MAX_U32_LEN: usize = 6;

/// Encodes `value` most significant digit first.
pub fn encode(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(MAX_U32_LEN);
    while value > 0 {
        digits.push(ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    digits.reverse();

    // Every byte comes from ALPHABET, which is ASCII.
    digits.into_iter().map(char::from).collect()
}

/// Decodes a base62 string back to a `u32`.
///
/// Returns `None` for empty input, characters outside the alphabet, or values
/// that overflow 32 bits.
pub fn decode(encoded: &str) -> Option<u32> {
    if encoded.is_empty() {
        return None;
    }

    encoded.bytes().try_fold(0u32, |acc, byte| {
        let digit = digit_value(byte)?;
        acc.checked_mul(62)?.checked_add(digit)
    })
}

/// Returns `true` if `c` belongs to the base62 alphabet.
pub fn is_base62(c: char) -> bool {
    u8::try_from(c).ok().and_then(digit_value).is_some()
}

fn digit_value(byte: u8) -> Option<u32> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'A'..=b'Z' => byte - b'A' + 10,
        b'a'..=b'z' => byte - b'a' + 36,
        _ => return None,
    };
    Some(u32::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_62_unique_ascii_alphanumerics() {
        let unique: std::collections::HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn encode_known_values() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "A");
        assert_eq!(encode(35), "Z");
        assert_eq!(encode(36), "a");
        assert_eq!(encode(61), "z");
        assert_eq!(encode(62), "10");
        assert_eq!(encode(3843), "zz");
    }

    #[test]
    fn encode_max_fits_in_six_chars() {
        let encoded = encode(u32::MAX);
        assert_eq!(encoded, "4gfFC3");
        assert_eq!(encoded.len(), MAX_U32_LEN);
        assert_eq!(decode(&encoded), Some(u32::MAX));
    }

    #[test]
    fn decode_inverts_encode() {
        for value in [0, 1, 61, 62, 12_345, 987_654_321, u32::MAX - 1] {
            assert_eq!(decode(&encode(value)), Some(value));
        }
    }

    #[test]
    fn decode_rejects_bad_input() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("ab-c"), None);
        assert_eq!(decode("é"), None);
        // one past u32::MAX
        assert_eq!(decode("4gfFC4"), None);
        assert_eq!(decode("zzzzzzz"), None);
    }

    #[test]
    fn is_base62_agrees_with_alphabet() {
        for &byte in ALPHABET {
            assert!(is_base62(char::from(byte)));
        }
        for c in ['-', '_', ' ', '\u{e9}', '\u{ff}', '\u{1d7ce}'] {
            assert!(!is_base62(c), "{c:?}");
        }
    }
}
