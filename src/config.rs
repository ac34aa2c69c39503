use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigValueError;
use crate::protocol::ProtocolKind;

/// How a missing protocol is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForceProtocol {
    /// Always prepend `http://`
    Http,
    /// Always prepend `https://`
    Https,
    /// Leave the URL as it is
    None,
    /// Prepend `https://` when the URL starts with a domain
    #[default]
    Auto,
    /// Prepend `http://` when the URL starts with a domain
    AutoInsecure,
}

impl ForceProtocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::None => "none",
            Self::Auto => "auto",
            Self::AutoInsecure => "auto-insecure",
        }
    }

    /// Protocol prepended when the URL qualifies
    pub(crate) fn protocol(self) -> Option<ProtocolKind> {
        match self {
            Self::Http | Self::AutoInsecure => Some(ProtocolKind::Http),
            Self::Https | Self::Auto => Some(ProtocolKind::Https),
            Self::None => None,
        }
    }

    /// Whether the protocol is only added in front of a domain
    pub(crate) fn needs_domain(self) -> bool {
        matches!(self, Self::Auto | Self::AutoInsecure)
    }
}

impl FromStr for ForceProtocol {
    type Err = ConfigValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            "none" => Ok(Self::None),
            "auto" => Ok(Self::Auto),
            "auto-insecure" => Ok(Self::AutoInsecure),
            _ => Err(ConfigValueError::new("forceProtocol", value)),
        }
    }
}

impl fmt::Display for ForceProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens to a `/` at the end of the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    #[default]
    Add,
    Remove,
}

impl TrailingSlash {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl FromStr for TrailingSlash {
    type Err = ConfigValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            _ => Err(ConfigValueError::new("trailingSlash", value)),
        }
    }
}

impl fmt::Display for TrailingSlash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How array query values are written.
///
/// For `arr = ["a", "b"]`:
/// - `Stringify`: `arr=%5B%22a%22%2C%22b%22%5D` (JSON text)
/// - `Repeat`: `arr=a&arr=b`
/// - `Comma`: `arr=a%2Cb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArraySerializer {
    Stringify,
    #[default]
    Repeat,
    Comma,
}

impl ArraySerializer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stringify => "stringify",
            Self::Repeat => "repeat",
            Self::Comma => "comma",
        }
    }
}

impl FromStr for ArraySerializer {
    type Err = ConfigValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "stringify" => Ok(Self::Stringify),
            "repeat" => Ok(Self::Repeat),
            "comma" => Ok(Self::Comma),
            _ => Err(ConfigValueError::new("arraySerializer", value)),
        }
    }
}

impl fmt::Display for ArraySerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The configuration used when nothing has been overridden
pub const BASE_DEFAULT_CONFIG: Config = Config {
    force_protocol: ForceProtocol::Auto,
    trailing_slash: TrailingSlash::Add,
    strict: false,
    allow_empty_path_segments: false,
    array_serializer: ArraySerializer::Repeat,
};

/// A complete set of options for building URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub force_protocol: ForceProtocol,
    pub trailing_slash: TrailingSlash,
    /// Fail when the final URL has no domain
    pub strict: bool,
    /// Keep blank fragments and repeated slashes
    pub allow_empty_path_segments: bool,
    pub array_serializer: ArraySerializer,
}

impl Default for Config {
    fn default() -> Self {
        BASE_DEFAULT_CONFIG
    }
}

impl Config {
    /// Apply every option set in `partial` on top of `self`
    #[must_use]
    pub fn merge(self, partial: &PartialConfig) -> Self {
        Self {
            force_protocol: partial.force_protocol.unwrap_or(self.force_protocol),
            trailing_slash: partial.trailing_slash.unwrap_or(self.trailing_slash),
            strict: partial.strict.unwrap_or(self.strict),
            allow_empty_path_segments: partial
                .allow_empty_path_segments
                .unwrap_or(self.allow_empty_path_segments),
            array_serializer: partial.array_serializer.unwrap_or(self.array_serializer),
        }
    }
}

/// Config overrides; `None` fields keep the value they are merged over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_protocol: Option<ForceProtocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_slash: Option<TrailingSlash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_empty_path_segments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_serializer: Option<ArraySerializer>,
}

impl PartialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn force_protocol(mut self, value: ForceProtocol) -> Self {
        self.force_protocol = Some(value);
        self
    }

    #[must_use]
    pub fn trailing_slash(mut self, value: TrailingSlash) -> Self {
        self.trailing_slash = Some(value);
        self
    }

    #[must_use]
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = Some(value);
        self
    }

    #[must_use]
    pub fn allow_empty_path_segments(mut self, value: bool) -> Self {
        self.allow_empty_path_segments = Some(value);
        self
    }

    #[must_use]
    pub fn array_serializer(mut self, value: ArraySerializer) -> Self {
        self.array_serializer = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<Config> for PartialConfig {
    fn from(config: Config) -> Self {
        Self {
            force_protocol: Some(config.force_protocol),
            trailing_slash: Some(config.trailing_slash),
            strict: Some(config.strict),
            allow_empty_path_segments: Some(config.allow_empty_path_segments),
            array_serializer: Some(config.array_serializer),
        }
    }
}
