use super::State;
use crate::character_sets::{is_authority_end, is_scheme_byte, is_slash};
use crate::checkers::{ends_in_number, parse_port};
use crate::error::ParseError;
use crate::helpers::{has_tabs_or_newline, trimmed_range};
use crate::ipv4::canonicalize_ipv4;
use crate::scheme::SchemeType;
use crate::unicode::idna::domain_to_ascii;

/// Scheme and host of a URL-like string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    /// Scheme type (special schemes get default ports and `\` handling)
    pub scheme_type: SchemeType,
    /// Serialized hostname: lowercase ASCII, IPv4 canonicalized
    pub hostname: String,
    /// Explicit port, `None` when absent or equal to the scheme default
    pub port: Option<u16>,
    /// Byte offset in the input where the raw `[userinfo@]host[:port]` ends
    pub end: usize,
}

impl Authority {
    /// `hostname` or `hostname:port`
    pub fn host(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{port}", self.hostname),
            None => self.hostname.clone(),
        }
    }
}

/// Scan `scheme://[userinfo@]host[:port]` from the start of `input`.
///
/// Unlike a full WHATWG parser, extra slashes after `//` are not skipped:
/// `https:///example.com` has an empty host and fails.
///
/// # Errors
///
/// Returns an error when the scheme, the `//` marker, the host or the port is invalid.
pub fn parse_authority(input: &str) -> Result<Authority, ParseError> {
    let (start, end) = trimmed_range(input);
    let bytes = &input.as_bytes()[..end];

    let mut state = State::SchemeStart;
    let mut pointer = start;
    let mut scheme_type = SchemeType::NotSpecial;

    loop {
        match state {
            State::SchemeStart => {
                if !bytes.get(pointer).is_some_and(u8::is_ascii_alphabetic) {
                    return Err(ParseError::InvalidScheme);
                }
                state = State::Scheme;
            }

            State::Scheme => {
                let scheme_start = pointer;
                while bytes.get(pointer).is_some_and(|&b| is_scheme_byte(b)) {
                    pointer += 1;
                }
                if bytes.get(pointer) != Some(&b':') {
                    return Err(ParseError::InvalidScheme);
                }

                let scheme = input[scheme_start..pointer].to_ascii_lowercase();
                scheme_type = SchemeType::from_scheme(&scheme);
                pointer += 1; // Skip ':'
                state = State::AuthoritySlashes;
            }

            State::AuthoritySlashes => {
                let special = scheme_type.is_special();
                let has_slashes = bytes
                    .get(pointer..pointer + 2)
                    .is_some_and(|pair| pair.iter().all(|&b| is_slash(b, special)));
                if !has_slashes {
                    return Err(ParseError::MissingAuthority);
                }
                pointer += 2;
                state = State::Authority;
            }

            State::Authority => {
                let special = scheme_type.is_special();
                let authority_end = bytes[pointer..]
                    .iter()
                    .position(|&b| is_authority_end(b, special))
                    .map_or(bytes.len(), |offset| pointer + offset);
                let authority = &input[pointer..authority_end];

                // Credentials end at the last '@'
                let host_and_port = memchr::memrchr(b'@', authority.as_bytes())
                    .map_or(authority, |at| &authority[at + 1..]);

                let (hostname, port) = parse_host_and_port(host_and_port, scheme_type)?;
                return Ok(Authority {
                    scheme_type,
                    hostname,
                    port,
                    end: authority_end,
                });
            }
        }
    }
}

fn parse_host_and_port(
    host_and_port: &str,
    scheme_type: SchemeType,
) -> Result<(String, Option<u16>), ParseError> {
    let (hostname, port_str) = if host_and_port.starts_with('[') {
        // IPv6 literal, kept as written; it never counts as a domain
        let bracket_end =
            memchr::memchr(b']', host_and_port.as_bytes()).ok_or(ParseError::InvalidHost)?;
        let rest = &host_and_port[bracket_end + 1..];
        let port = match rest.strip_prefix(':') {
            Some(port) => Some(port),
            None if rest.is_empty() => None,
            None => return Err(ParseError::InvalidHost),
        };
        (&host_and_port[..=bracket_end], port)
    } else {
        match memchr::memrchr(b':', host_and_port.as_bytes()) {
            Some(colon) => (
                &host_and_port[..colon],
                Some(&host_and_port[colon + 1..]),
            ),
            None => (host_and_port, None),
        }
    };

    let port = match port_str {
        Some(port) if !port.is_empty() => {
            let number = parse_port(port).ok_or(ParseError::InvalidPort)?;
            (scheme_type.default_port() != Some(number)).then_some(number)
        }
        _ => None,
    };

    if hostname.is_empty() || has_tabs_or_newline(hostname) {
        return Err(ParseError::InvalidHost);
    }
    if hostname.starts_with('[') {
        return Ok((hostname.to_ascii_lowercase(), port));
    }

    Ok((parse_domain(hostname)?, port))
}

/// Percent-decode, IDNA-process and canonicalize a non-bracketed host
fn parse_domain(hostname: &str) -> Result<String, ParseError> {
    let decoded = if hostname.contains('%') {
        validate_escapes(hostname)?;
        percent_encoding::percent_decode_str(hostname)
            .decode_utf8()
            .map_err(|_| ParseError::InvalidPercentEncoding)?
            .into_owned()
    } else {
        hostname.to_string()
    };

    let ascii = domain_to_ascii(&decoded)?;
    if ends_in_number(&ascii) {
        return canonicalize_ipv4(&ascii);
    }
    Ok(ascii)
}

fn validate_escapes(hostname: &str) -> Result<(), ParseError> {
    let bytes = hostname.as_bytes();
    for pos in memchr::memchr_iter(b'%', bytes) {
        let well_formed = bytes
            .get(pos + 1..pos + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(ParseError::InvalidPercentEncoding);
        }
    }
    Ok(())
}
