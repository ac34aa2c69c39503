/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    #[default]
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    NotSpecial,
}

impl SchemeType {
    /// Get the scheme type from a lowercase scheme string.
    /// Filters by length and first byte before the full comparison.
    pub fn from_scheme(scheme: &str) -> Self {
        let bytes = scheme.as_bytes();

        match (bytes.len(), bytes.first()) {
            (2, Some(b'w')) if bytes == b"ws" => Self::Ws,
            (3, Some(b'w')) if bytes == b"wss" => Self::Wss,
            (3, Some(b'f')) if bytes == b"ftp" => Self::Ftp,
            (4, Some(b'h')) if bytes == b"http" => Self::Http,
            (4, Some(b'f')) if bytes == b"file" => Self::File,
            (5, Some(b'h')) if bytes == b"https" => Self::Https,
            _ => Self::NotSpecial,
        }
    }

    /// Special schemes treat `\` like `/`
    pub fn is_special(self) -> bool {
        self != Self::NotSpecial
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::NotSpecial => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(SchemeType::from_scheme("http"), SchemeType::Http);
        assert_eq!(SchemeType::from_scheme("https"), SchemeType::Https);
        assert_eq!(SchemeType::from_scheme("ftp"), SchemeType::Ftp);
        assert_eq!(SchemeType::from_scheme("custom"), SchemeType::NotSpecial);
    }

    #[test]
    fn test_default_port() {
        assert_eq!(SchemeType::Https.default_port(), Some(443));
        assert_eq!(SchemeType::Ws.default_port(), Some(80));
        assert_eq!(SchemeType::NotSpecial.default_port(), None);
        assert!(!SchemeType::NotSpecial.is_special());
        assert!(SchemeType::File.is_special());
    }
}
