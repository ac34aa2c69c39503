use core::fmt;

/// Errors returned by `make_url`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MakeUrlError {
    /// No arguments, or the first argument is not a string fragment
    MissingFragment,
    /// A params object was passed somewhere other than the last position
    ParamsNotLast {
        /// Zero-based position of the offending argument
        position: usize,
    },
    /// Strict mode is on and the built URL has no detectable domain
    InvalidUrl {
        /// The URL that was built
        url: String,
    },
}

impl MakeUrlError {
    /// Argument errors are caused by the shape of the call itself
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::MissingFragment | Self::ParamsNotLast { .. })
    }

    /// Validation errors only happen in strict mode
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. })
    }

    /// The rejected URL, for validation errors
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::InvalidUrl { url } => Some(url),
            _ => None,
        }
    }
}

impl fmt::Display for MakeUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFragment => f.write_str("makeURL must receive at least one string item"),
            Self::ParamsNotLast { .. } => {
                f.write_str("Params config object argument must be the last argument")
            }
            Self::InvalidUrl { url } => write!(f, "The generated URL is not valid: {url}"),
        }
    }
}

impl std::error::Error for MakeUrlError {}

/// Errors from the authority scanner used for domain detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Missing or malformed scheme
    InvalidScheme,
    /// Scheme is not followed by `//`
    MissingAuthority,
    /// Empty host or forbidden host code point
    InvalidHost,
    /// Non-numeric or out of range port
    InvalidPort,
    /// Host ends in a number but is not a valid IPv4 address
    InvalidIpv4,
    /// Malformed `%XX` escape in the host
    InvalidPercentEncoding,
    /// IDNA processing error
    IdnaError,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::MissingAuthority => "Missing authority",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::InvalidIpv4 => "Invalid IPv4 address",
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::IdnaError => "IDNA processing error",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// A config value that does not name a known option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValueError {
    /// Config field being parsed
    pub field: &'static str,
    /// The rejected text
    pub value: String,
}

impl ConfigValueError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ConfigValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value '{}' for {}", self.value, self.field)
    }
}

impl std::error::Error for ConfigValueError {}

/// Result type for `make_url` operations
pub type Result<T> = core::result::Result<T, MakeUrlError>;
