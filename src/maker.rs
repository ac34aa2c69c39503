use tracing::{debug, trace};

use crate::assembler::{Assembled, assemble};
use crate::config::{Config, ForceProtocol, PartialConfig, TrailingSlash};
use crate::domain::find_domain;
use crate::error::{MakeUrlError, Result};
use crate::helpers::{collapse_slashes, collapse_slashes_keep_relative};
use crate::params::Params;
use crate::protocol::ProtocolKind;
use crate::query::QueryParams;
use crate::serializer::{encode_fragments, serialize};
use crate::unicode::percent_encode::encode_component;

/// One argument of a `make_url` call
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A piece of URL text
    Fragment(String),
    /// Query values, hash and config overrides; only valid as the last argument
    Params(Params),
}

impl From<&str> for Arg {
    fn from(fragment: &str) -> Self {
        Self::Fragment(fragment.to_string())
    }
}

impl From<String> for Arg {
    fn from(fragment: String) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<&String> for Arg {
    fn from(fragment: &String) -> Self {
        Self::Fragment(fragment.clone())
    }
}

impl From<Params> for Arg {
    fn from(params: Params) -> Self {
        Self::Params(params)
    }
}

/// Builds URLs from fragments, owning the default config they are built with.
///
/// ```rust
/// use make_url::{Arg, Params, UrlMaker};
///
/// let maker = UrlMaker::new();
/// let url = maker
///     .make_url([
///         Arg::from("example.com"),
///         Arg::from("blog"),
///         Arg::from(":id"),
///         Params::new().param("id", 7).param("ref", "rss").into(),
///     ])
///     .unwrap();
/// assert_eq!(url, "https://example.com/blog/7/?ref=rss");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlMaker {
    config: Config,
}

impl UrlMaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// The default config calls are merged over
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Merge `config` over the current default
    pub fn set_config(&mut self, config: impl Into<PartialConfig>) {
        self.config = self.config.merge(&config.into());
        debug!(config = ?self.config, "updated default config");
    }

    /// Restore the built-in default config
    pub fn reset_config(&mut self) {
        self.config = Config::default();
    }

    /// Build a URL from fragments, optionally followed by one `Params`.
    ///
    /// # Errors
    ///
    /// Returns `MissingFragment` when there are no arguments or the first is
    /// not a fragment, `ParamsNotLast` when `Params` is not the last argument,
    /// and `InvalidUrl` when strict mode rejects the result.
    pub fn make_url<I>(&self, args: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let (fragments, params) = split_args(args)?;
        self.build(&fragments, &params)
    }

    /// Build a URL from fragments and params given separately.
    ///
    /// # Errors
    ///
    /// Returns `MissingFragment` for an empty fragment list and `InvalidUrl`
    /// when strict mode rejects the result.
    pub fn build<S: AsRef<str>>(&self, fragments: &[S], params: &Params) -> Result<String> {
        if fragments.is_empty() {
            return Err(MakeUrlError::MissingFragment);
        }
        let config = self.config.merge(&params.config);

        let mut assembled = assemble(fragments, &config);
        encode_fragments(&mut assembled);
        if !assembled.has_protocol {
            force_protocol(&mut assembled, config.force_protocol);
        }

        let mut url = serialize(&assembled);
        match config.trailing_slash {
            TrailingSlash::Add if !url.ends_with('/') => url.push('/'),
            TrailingSlash::Remove if url.ends_with('/') => {
                url.pop();
            }
            _ => {}
        }

        if !config.allow_empty_path_segments {
            url = if assembled.has_protocol && assembled.protocol == ProtocolKind::Relative {
                collapse_slashes_keep_relative(&url)
            } else {
                collapse_slashes(&url)
            };
        }

        let mut query = QueryParams::from_params(&params.params, config.array_serializer);
        query.fill_placeholders(&mut url);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.serialize());
        }

        let hash = params.hash.trim();
        if !hash.is_empty() {
            url.push('#');
            url.push_str(&encode_component(hash));
        }

        if config.strict && find_domain(&url).is_none() {
            debug!(%url, "rejected url without a domain");
            return Err(MakeUrlError::InvalidUrl { url });
        }

        trace!(%url, "built url");
        Ok(url)
    }
}

/// Build a URL with the built-in default config.
///
/// # Errors
///
/// See [`UrlMaker::make_url`].
pub fn make_url<I>(args: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    UrlMaker::new().make_url(args)
}

fn split_args<I>(args: I) -> Result<(Vec<String>, Params)>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
    if !matches!(args.first(), Some(Arg::Fragment(_))) {
        return Err(MakeUrlError::MissingFragment);
    }

    let last = args.len() - 1;
    let mut fragments = Vec::with_capacity(args.len());
    let mut params = Params::default();

    for (position, arg) in args.into_iter().enumerate() {
        match arg {
            Arg::Fragment(fragment) => fragments.push(fragment),
            Arg::Params(found) if position == last => params = found,
            Arg::Params(_) => return Err(MakeUrlError::ParamsNotLast { position }),
        }
    }

    Ok((fragments, params))
}

fn force_protocol(assembled: &mut Assembled, mode: ForceProtocol) {
    let Some(kind) = mode.protocol() else {
        return;
    };

    if mode.needs_domain() {
        let probe = format!("https://{}", serialize(assembled));
        if find_domain(&probe).is_none() {
            return;
        }
    }

    debug!(mode = %mode, protocol = kind.marker(), "forcing protocol");
    assembled.prepend_protocol(kind);
}
