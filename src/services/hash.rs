use std::borrow::Cow;

/// 32-bit rolling string hash, `hash * 31 + unit` over UTF-16 code units.
///
/// Arithmetic wraps as a signed 32-bit integer at every step and the result is
/// the absolute value of the final state, so `i32::MIN` comes back as `2^31`.
pub fn generate_hash(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

pub fn hash_input(username: &str, seed: Option<u32>) -> Cow<'_, str> {
    match seed {
        Some(seed) => Cow::Owned(format!("{}{}", username, seed)),
        None => Cow::Borrowed(username),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_hashes_to_zero() {
        assert_eq!(generate_hash(""), 0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(generate_hash("a"), 97);
        assert_eq!(generate_hash("abc"), 96354);
        assert_eq!(generate_hash("gamer1"), 1253235343);
        assert_eq!(generate_hash("john doe"), 1431932763);
    }

    #[test]
    fn test_hash_uses_utf16_code_units() {
        assert_eq!(generate_hash("héllo 😀"), 395407605);
    }

    #[test]
    fn test_hash_deterministic() {
        for input in ["", "Solo", "john doe", "a much longer username that overflows"] {
            assert_eq!(generate_hash(input), generate_hash(input));
        }
    }

    #[test]
    fn test_hash_never_negative_after_overflow() {
        let input = "z".repeat(200);
        let value = generate_hash(&input);
        assert!(i64::from(value) >= 0);
        assert!(value <= 1u32 << 31);
    }

    #[test]
    fn test_seed_appended_as_decimal() {
        assert_eq!(hash_input("gamer", Some(1)), "gamer1");
        assert_eq!(hash_input("gamer", None), "gamer");
        assert_eq!(
            generate_hash(&hash_input("gamer", Some(1))),
            generate_hash("gamer1")
        );
    }
}
