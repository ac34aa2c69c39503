#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Cross-check of the authority scanner against the `url` crate
///
/// Hosts and ports must match what a full WHATWG parser produces for the
/// inputs both accept, and both must reject the same malformed hosts.
use make_url::parse_authority;

const ACCEPTED: &[&str] = &[
    "https://example.com/",
    "http://EXAMPLE.com:8080/x",
    "https://user:pw@sub.example.org?q",
    "https://example.com:443/",
    "http://example.com:80#top",
    "http://192.168.0.1/",
    "http://0x7f.1/",
    "http://3232235777/",
    "http://0300.0250.0.1/",
    "https://bücher.example/",
    "https://xn--bcher-kva.example/",
    "http://ex%61mple.com/",
    "http://[::1]:8080/",
    "https:\\\\example.com\\path",
    "  https://example.com/trimmed  ",
];

const REJECTED: &[&str] = &[
    "https://",
    "https://exa mple.com/",
    "http://1.2.3.256/",
    "http://example.com:99999/",
    "https://ex%zzample.com/",
    "https://exa<mple.com/",
];

#[test]
fn test_hosts_match_url_crate() {
    for input in ACCEPTED {
        let ours = parse_authority(input).unwrap_or_else(|e| panic!("{input}: {e}"));
        let theirs = url::Url::parse(input).unwrap_or_else(|e| panic!("{input}: {e}"));

        assert_eq!(Some(ours.hostname.as_str()), theirs.host_str(), "host of {input}");
        assert_eq!(ours.port, theirs.port(), "port of {input}");
    }
}

#[test]
fn test_rejections_match_url_crate() {
    for input in REJECTED {
        assert!(parse_authority(input).is_err(), "{input} should be rejected");
        assert!(url::Url::parse(input).is_err(), "url crate accepts {input}");
    }
}

#[test]
fn test_authority_end_points_at_path() {
    for input in ACCEPTED {
        let authority = parse_authority(input).unwrap();
        let rest = &input[authority.end..];
        assert!(
            rest.is_empty() || rest.starts_with(['/', '?', '#', '\\', ' ']),
            "{input}: authority ends before {rest:?}"
        );
    }
}
