/// Cache fingerprints
use crate::constants::CACHE_KEY_PREFIX;
use crate::utils::normalize_url;

/// Deterministic key for a URL: `eco_` + lower-hex of a 32-bit rolling hash
///
/// The URL is normalized and lower-cased first, so `Example.com` and
/// `https://example.com` share a key. The hash runs `h = h * 31 + unit`
/// with 32-bit wrap-around over UTF-16 code units, then takes the absolute
/// value.
pub fn fingerprint(url: &str) -> String {
    let normalized = normalize_url(url).to_lowercase();
    let hash = normalized
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32));
    format!("{}{:x}", CACHE_KEY_PREFIX, hash.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_deterministic_and_normalized() {
        let a = fingerprint("example.com");
        assert_eq!(a, fingerprint("example.com"));
        assert_eq!(a, fingerprint("  https://EXAMPLE.com "));
        assert!(a.starts_with("eco_"));
        assert_ne!(a, fingerprint("example.org"));
    }

    #[test]
    fn test_fingerprint_known_value() {
        // Same recurrence in 64-bit arithmetic, truncated to 32 bits at each step
        let expected = "https://a"
            .bytes()
            .fold(0i64, |h, b| (h * 31 + b as i64) as i32 as i64);
        assert_eq!(fingerprint("a"), format!("eco_{:x}", (expected as i32).unsigned_abs()));
    }
}
