//! Assemble well-formed URLs from loose string fragments.
//!
//! Fragments can be split anywhere, even inside the protocol or the domain.
//! The protocol and domain are found first, path fragments are encoded, and
//! `:key` placeholders, query parameters and a hash are filled in from
//! [`Params`].
//!
//! ```rust
//! use make_url::{make_url, Params};
//!
//! let url = make_url!("example.com", "blog", "post/:id", Params::new().param("id", 1)).unwrap();
//! assert_eq!(url, "https://example.com/blog/post/1/");
//!
//! let url = make_url!("htt", "ps:", "//example", ".com", "about me").unwrap();
//! assert_eq!(url, "https://example.com/about%20me/");
//! ```

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod helpers;
mod ipv4;
mod parser;
mod partition;
mod scheme;
mod unicode;

mod assembler;
mod config;
mod domain;
mod error;
mod maker;
mod params;
mod protocol;
mod query;
mod serializer;

// Public API
pub use assembler::{Assembled, assemble};
pub use config::{ArraySerializer, BASE_DEFAULT_CONFIG, Config, ForceProtocol, PartialConfig, TrailingSlash};
pub use domain::{DomainInfo, detect_domain};
pub use error::{ConfigValueError, MakeUrlError, ParseError, Result};
pub use maker::{Arg, UrlMaker, make_url};
pub use params::Params;
pub use parser::{Authority, parse_authority};
pub use protocol::{ProtocolInfo, ProtocolKind, detect_protocol};
pub use query::{QueryParams, QueryValue};
pub use serializer::{encode_fragments, serialize};

/// Build a URL from fragments and an optional trailing [`Params`].
///
/// `make_url!(a, b, ...)` uses the built-in default config;
/// `make_url!(in maker; a, b, ...)` uses the default config of a [`UrlMaker`].
///
/// ```rust
/// use make_url::{make_url, PartialConfig, TrailingSlash, UrlMaker};
///
/// let mut maker = UrlMaker::new();
/// maker.set_config(PartialConfig::new().trailing_slash(TrailingSlash::Remove));
/// assert_eq!(make_url!(in maker; "example.com", "docs").unwrap(), "https://example.com/docs");
/// ```
#[macro_export]
macro_rules! make_url {
    (in $maker:expr; $($arg:expr),+ $(,)?) => {
        $maker.make_url([$($crate::Arg::from($arg)),+])
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::make_url([$($crate::Arg::from($arg)),+])
    };
}
