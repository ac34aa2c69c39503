use crate::checkers::has_domain_labels;
use crate::parser::{Authority, parse_authority};

/// Result of looking for a domain in a string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainInfo {
    /// Whether a domain with at least two labels was found
    pub present: bool,
    /// `hostname` or `hostname:port` (non-default port only), empty when absent
    pub value: String,
}

impl DomainInfo {
    fn absent() -> Self {
        Self::default()
    }
}

/// Find the authority of `input` when its host qualifies as a domain
pub(crate) fn find_domain(input: &str) -> Option<Authority> {
    parse_authority(input)
        .ok()
        .filter(|authority| has_domain_labels(&authority.hostname))
}

/// Detect the domain of a protocol-qualified string.
///
/// Only strings starting with `<scheme>://` can have a domain; a relative
/// `//host` or a bare `host` always yields an absent result.
///
/// ```rust
/// use make_url::detect_domain;
///
/// let info = detect_domain("https://example.com/blog");
/// assert!(info.present);
/// assert_eq!(info.value, "example.com");
///
/// assert!(!detect_domain("http://example/blog").present);
/// ```
pub fn detect_domain(input: &str) -> DomainInfo {
    find_domain(input).map_or_else(DomainInfo::absent, |authority| DomainInfo {
        present: true,
        value: authority.host(),
    })
}
