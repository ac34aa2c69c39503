/// Check if a host "ends in a number" and must be parsed as IPv4.
/// A single trailing dot is ignored; the last label must be all digits
/// or a `0x`-prefixed hexadecimal number.
pub fn ends_in_number(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    let last = host.rsplit('.').next().unwrap_or(host);

    if last.is_empty() {
        return false;
    }
    if last.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    last.strip_prefix("0x")
        .or_else(|| last.strip_prefix("0X"))
        .is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading zeros are allowed, so "0000080" is port 80
    let trimmed = port.trim_start_matches('0');
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<u16>().ok()
}

/// A hostname counts as a domain when it has at least two dot-separated labels.
/// `example.` qualifies, `localhost` does not.
pub fn has_domain_labels(hostname: &str) -> bool {
    !hostname.starts_with('[') && memchr::memchr(b'.', hostname.as_bytes()).is_some()
}

/// Check for a port-looking fragment such as `:8080` or `:8080/path`
pub fn is_port_fragment(fragment: &str) -> bool {
    fragment
        .strip_prefix(':')
        .and_then(|rest| rest.bytes().next())
        .is_some_and(|b| b.is_ascii_digit())
}
