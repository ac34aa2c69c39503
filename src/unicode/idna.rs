use crate::character_sets::is_forbidden_domain_byte;
use crate::error::ParseError;

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Process a decoded hostname into its ASCII serialization.
/// Plain ASCII hosts are lowercased and checked for forbidden code points;
/// anything else goes through IDNA `ToASCII`.
pub fn domain_to_ascii(domain: &str) -> Result<String, ParseError> {
    if domain.is_ascii() && !has_punycode(domain) {
        if domain.bytes().any(is_forbidden_domain_byte) {
            return Err(ParseError::InvalidHost);
        }
        return Ok(domain.to_ascii_lowercase());
    }

    let ascii = idna::domain_to_ascii(domain).map_err(|_| ParseError::IdnaError)?;
    if ascii.is_empty() || ascii.bytes().any(is_forbidden_domain_byte) {
        return Err(ParseError::InvalidHost);
    }
    Ok(ascii)
}
