use crate::domain::detect_domain;

/// Leading protocol marker of a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProtocolKind {
    Http,
    Https,
    /// Protocol-relative `//`
    Relative,
    #[default]
    None,
}

impl ProtocolKind {
    /// Canonical marker text that starts a serialized URL
    pub fn marker(self) -> &'static str {
        match self {
            Self::Http => "http://",
            Self::Https => "https://",
            Self::Relative => "//",
            Self::None => "",
        }
    }

    /// The separator searched for to find where the marker ends
    pub(crate) fn separator(self) -> &'static str {
        match self {
            Self::Relative => "//",
            _ => "://",
        }
    }
}

/// Result of looking for a protocol marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProtocolInfo {
    /// A usable protocol was found. A relative `//` only counts
    /// when a domain follows it.
    pub present: bool,
    pub kind: ProtocolKind,
}

/// Classify the leading protocol marker of `input`.
///
/// ```rust
/// use make_url::{ProtocolKind, detect_protocol};
///
/// assert_eq!(detect_protocol("https://example.com").kind, ProtocolKind::Https);
///
/// let relative = detect_protocol("//example/blog");
/// assert_eq!(relative.kind, ProtocolKind::Relative);
/// assert!(!relative.present);
/// ```
pub fn detect_protocol(input: &str) -> ProtocolInfo {
    let cleaned = input.trim().to_lowercase();

    if cleaned.starts_with("//") {
        // The domain detector needs a non-relative scheme in front
        let present = detect_domain(&format!("https:{cleaned}")).present;
        return ProtocolInfo {
            present,
            kind: ProtocolKind::Relative,
        };
    }

    let kind = if cleaned.starts_with("https://") {
        ProtocolKind::Https
    } else if cleaned.starts_with("http://") {
        ProtocolKind::Http
    } else {
        ProtocolKind::None
    };

    ProtocolInfo {
        present: kind != ProtocolKind::None,
        kind,
    }
}
