//! Turns raw caller fragments into `[protocol] [domain] path...`.
//!
//! Callers may split a URL anywhere: `"htt", "ps:", "//example", ".com"` is
//! as valid as `"https://example.com"`. The protocol is found on the plain
//! concatenation of the fragments, the domain on a probe where fragments are
//! joined the way they will be serialized.

use tracing::debug;

use crate::checkers::is_port_fragment;
use crate::config::Config;
use crate::domain::find_domain;
use crate::helpers::{is_blank, strip_leading_slashes};
use crate::parser::Authority;
use crate::partition::{Piece, cumulative_pieces, repartition};
use crate::protocol::{ProtocolKind, detect_protocol};


/// Fragments arranged so protocol and domain each sit in their own slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembled {
    /// `[protocol marker] [domain] path fragments...`
    pub fragments: Vec<String>,
    /// `fragments[0]` is a protocol marker
    pub has_protocol: bool,
    /// Detected protocol kind, also set for a relative `//` without a domain
    pub protocol: ProtocolKind,
    /// The fragment after the protocol slot is the domain
    pub has_domain: bool,
}

impl Assembled {
    /// Index of the first fragment after the protocol slot
    pub fn body_start(&self) -> usize {
        usize::from(self.has_protocol)
    }

    /// The protocol marker, when present
    pub fn protocol_marker(&self) -> Option<&str> {
        self.has_protocol
            .then(|| self.fragments.first().map(String::as_str))
            .flatten()
    }

    /// The domain fragment (`[userinfo@]host[:port]`, host and port serialized), when present
    pub fn domain(&self) -> Option<&str> {
        self.has_domain
            .then(|| self.fragments.get(self.body_start()).map(String::as_str))
            .flatten()
    }

    /// Fragments after the protocol and domain slots
    pub fn path(&self) -> &[String] {
        let start = (self.body_start() + usize::from(self.has_domain)).min(self.fragments.len());
        &self.fragments[start..]
    }

    /// Put `kind` in front of a URL that has no protocol yet
    pub(crate) fn prepend_protocol(&mut self, kind: ProtocolKind) {
        if self.has_protocol {
            return;
        }
        trim_body_start(&mut self.fragments);
        self.fragments.insert(0, kind.marker().to_string());
        self.has_protocol = true;
        self.protocol = kind;
    }
}

/// Drop leading empty fragments and the slashes that start the first real one
fn trim_body_start(body: &mut Vec<String>) {
    let mut skip = 0;
    for fragment in body.iter_mut() {
        let stripped = strip_leading_slashes(fragment);
        if stripped.is_empty() {
            skip += 1;
            continue;
        }
        if stripped.len() != fragment.len() {
            *fragment = stripped.to_string();
        }
        break;
    }
    body.drain(..skip);
}

/// Text the domain is searched in, with the position of each fragment in it
struct Probe {
    text: String,
    pieces: Vec<Piece>,
}

impl Probe {
    /// Join non-blank fragments the way they will be serialized.
    ///
    /// Fragments continuing a host (`.com`, `:8080`, or digits after a
    /// trailing `:`) are glued on directly, others get a `/`.
    fn new(body: &[String]) -> Self {
        let mut text = String::new();
        let mut pieces = Vec::with_capacity(body.len());
        let mut previous: Option<&str> = None;

        for (index, fragment) in body.iter().enumerate() {
            if is_blank(fragment) {
                continue;
            }
            if previous.is_some_and(|previous| !continues_host(previous, fragment)) {
                text.push('/');
            }
            pieces.push(Piece {
                index,
                start: text.len(),
            });
            text.push_str(fragment);
            previous = Some(fragment);
        }

        Self { text, pieces }
    }
}

fn continues_host(previous: &str, fragment: &str) -> bool {
    fragment.starts_with('.')
        || is_port_fragment(fragment)
        || (previous.ends_with(':') && fragment.starts_with(|c: char| c.is_ascii_digit()))
}

/// Scheme the domain probe is read with, so default ports are the ones the
/// URL will end up with
fn probe_scheme(assembled: &Assembled, config: &Config) -> &'static str {
    let kind = if assembled.has_protocol {
        Some(assembled.protocol)
    } else {
        config.force_protocol.protocol()
    };
    match kind {
        Some(ProtocolKind::Http) => "http://",
        _ => "https://",
    }
}

/// `raw` with its host and port replaced by their serialized form.
/// Credentials are kept as written.
fn canonical_domain(raw: &str, authority: &Authority) -> String {
    match raw.rfind('@') {
        Some(at) => format!("{}{}", &raw[..=at], authority.host()),
        None => authority.host(),
    }
}

/// Arrange `fragments` into protocol, domain and path slots.
///
/// Blank fragments are dropped unless `allow_empty_path_segments` is set.
/// Path fragments are not encoded here. The domain fragment gets its
/// serialized host, with credentials kept as written.
pub fn assemble<S: AsRef<str>>(fragments: &[S], config: &Config) -> Assembled {
    let mut body: Vec<String> = fragments
        .iter()
        .map(AsRef::as_ref)
        .filter(|fragment| config.allow_empty_path_segments || !is_blank(fragment))
        .map(str::to_string)
        .collect();

    let joined = body.concat();
    let protocol = detect_protocol(&joined);
    debug!(present = protocol.present, kind = ?protocol.kind, "detected protocol");

    let mut assembled = Assembled {
        protocol: protocol.kind,
        ..Assembled::default()
    };

    if protocol.present {
        let separator = protocol.kind.separator();
        if let Some(position) = joined.find(separator) {
            let end = position + separator.len();
            body = repartition(&body, &cumulative_pieces(&body), end).tail;
            trim_body_start(&mut body);
            assembled.has_protocol = true;
        }
    }

    let scheme = probe_scheme(&assembled, config);
    let probe = Probe::new(&body);
    if let Some(authority) = find_domain(&format!("{scheme}{}", probe.text)) {
        let end = authority.end.saturating_sub(scheme.len());
        let mut partition = repartition(&body, &probe.pieces, end);
        let domain = canonical_domain(&partition.head, &authority);
        debug!(raw = %partition.head, %domain, "detected domain");

        // The separator between domain and path is added back when serializing
        if partition.split
            && let Some(rest) = partition.tail.first_mut()
            && rest.starts_with('/')
        {
            rest.replace_range(..1, "");
        }

        body = Vec::with_capacity(partition.tail.len() + 1);
        body.push(domain);
        body.extend(partition.tail);
        assembled.has_domain = true;
    }

    if assembled.has_protocol {
        assembled.fragments.push(protocol.kind.marker().to_string());
    }
    assembled.fragments.extend(body);
    assembled
}
