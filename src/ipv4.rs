//! IPv4 host canonicalization for hosts that end in a number.
//! Parts may be decimal, octal (`0` prefix) or hexadecimal (`0x` prefix).
use crate::error::ParseError;

/// Parse an IPv4 host and serialize it back in dotted decimal form.
/// `1.2` becomes `1.0.0.2`, `0x7f.1` becomes `127.0.0.1`.
pub fn canonicalize_ipv4(host: &str) -> Result<String, ParseError> {
    parse_ipv4(host).map(serialize_ipv4)
}

fn parse_ipv4(host: &str) -> Result<u32, ParseError> {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() {
        return Err(ParseError::InvalidIpv4);
    }

    let numbers = host
        .split('.')
        .map(parse_number)
        .collect::<Result<Vec<u64>, _>>()?;

    let Some((&last, init)) = numbers.split_last() else {
        return Err(ParseError::InvalidIpv4);
    };
    if numbers.len() > 4 || init.iter().any(|&n| n > 255) {
        return Err(ParseError::InvalidIpv4);
    }
    // The last part fills every byte the leading parts left over
    if last >= 256u64.pow(5 - numbers.len() as u32) {
        return Err(ParseError::InvalidIpv4);
    }

    let address = init
        .iter()
        .enumerate()
        .fold(last, |acc, (i, &n)| acc | (n << (8 * (3 - i))));

    u32::try_from(address).map_err(|_| ParseError::InvalidIpv4)
}

fn parse_number(part: &str) -> Result<u64, ParseError> {
    if part.is_empty() {
        return Err(ParseError::InvalidIpv4);
    }

    let (digits, radix) = if let Some(hex) = part.strip_prefix("0x").or_else(|| part.strip_prefix("0X")) {
        (hex, 16)
    } else if part.len() > 1 && part.starts_with('0') {
        (&part[1..], 8)
    } else {
        (part, 10)
    };

    // Bare "0x" is zero
    if digits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(digits, radix).map_err(|_| ParseError::InvalidIpv4)
}

fn serialize_ipv4(address: u32) -> String {
    let [a, b, c, d] = address.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}
