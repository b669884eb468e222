/// URL helpers shared by the cache key and the provider adapters
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Scheme and `www.` prefix stripped when a URL cannot be parsed
static SCHEME_WWW_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://)?(www\.)?").expect("static regex"));

/// Trim the input and make it absolute by prefixing `https://` when no
/// http(s) scheme is present
///
/// No other validation happens here: any non-empty string is accepted as a
/// best-effort URL.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Bare host name for the green hosting lookup (scheme and leading `www.` removed)
pub fn extract_domain(raw: &str) -> String {
    let normalized = normalize_url(raw);
    match Url::parse(&normalized) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
            None => strip_scheme_and_www(raw),
        },
        Err(_) => strip_scheme_and_www(raw),
    }
}

fn strip_scheme_and_www(raw: &str) -> String {
    SCHEME_WWW_PREFIX.replace(raw.trim(), "").into_owned()
}

/// Whether the URL is served without TLS
pub fn is_plain_http(url: &str) -> bool {
    url.trim().starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("  example.com "), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com/a"), "https://example.com/a");
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("https://www.example.com/page?q=1"), "example.com");
        assert_eq!(extract_domain("blog.example.org"), "blog.example.org");
        assert_eq!(extract_domain("http://www.Example.COM"), "example.com");
    }

    #[test]
    fn test_extract_domain_falls_back_on_unparseable_input() {
        assert_eq!(extract_domain("www.exa mple.com"), "exa mple.com");
    }

    #[test]
    fn test_is_plain_http() {
        assert!(is_plain_http("http://example.com"));
        assert!(!is_plain_http("example.com"));
    }
}
