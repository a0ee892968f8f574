//! Syntactic URL check run before any network access.

use once_cell::sync::Lazy;
use regex::Regex;

// scheme :// (dotted host | localhost | IPv4) [:port] [path or query]
const LINK_PATTERN: &str = concat!(
    r"(?i)^(?:http|ftp)s?://",
    r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
    r"|localhost",
    r"|[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
    r"(?::[0-9]+)?",
    r"(?:/?|[/?]\S+)$",
);

static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(LINK_PATTERN).expect("Failed to compile link regex pattern"));

/// Returns true when `raw` looks like an http(s)/ftp(s) link worth probing.
///
/// Surrounding whitespace is ignored and inner spaces are matched as `%20`.
/// The caller's value is never modified.
pub fn is_well_formed(raw: Option<&str>) -> bool {
    let Some(raw) = raw else {
        return false;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }

    let candidate = trimmed.replace(' ', "%20");
    LINK_REGEX.is_match(&candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_links() {
        assert!(is_well_formed(Some("https://example.com")));
        assert!(is_well_formed(Some("ftp://host.com/path")));
        assert!(is_well_formed(Some("http://192.168.1.1:8080/x")));
        assert!(is_well_formed(Some("https://localhost")));
        assert!(is_well_formed(Some("ftps://files.example.org/pub/")));
        assert!(is_well_formed(Some("https://sub.example.co.uk/a?b=c")));
    }

    #[test]
    fn test_rejects_absent_and_empty() {
        assert!(!is_well_formed(None));
        assert!(!is_well_formed(Some("")));
        assert!(!is_well_formed(Some("   ")));
    }

    #[test]
    fn test_rejects_non_links() {
        assert!(!is_well_formed(Some("not a url")));
        assert!(!is_well_formed(Some("example.com")));
        assert!(!is_well_formed(Some("mailto:someone@example.com")));
        assert!(!is_well_formed(Some("https://")));
        assert!(!is_well_formed(Some("https://nodot")));
        assert!(!is_well_formed(Some("gopher://example.com")));
    }

    #[test]
    fn test_is_case_insensitive() {
        assert!(is_well_formed(Some("HTTPS://EXAMPLE.COM/Path")));
        assert!(is_well_formed(Some("Http://LocalHost:3000")));
    }

    #[test]
    fn test_trims_and_encodes_spaces() {
        assert!(is_well_formed(Some("  https://example.com/a b  ")));
        assert!(is_well_formed(Some("\thttps://example.com\n")));
        // A space inside the host is still invalid once encoded
        assert!(!is_well_formed(Some("https://exa mple.com")));
    }

    #[test]
    fn test_port_and_trailing_slash() {
        assert!(is_well_formed(Some("http://example.com:80")));
        assert!(is_well_formed(Some("http://example.com/")));
        assert!(!is_well_formed(Some("http://example.com:port")));
    }
}
