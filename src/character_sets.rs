/// Forbidden domain code points (ASCII only)
/// C0 controls, space, DEL and `# % / : < > ? @ [ \ ] ^ |`
const FORBIDDEN_DOMAIN_TABLE: [bool; 128] = {
    let mut table = [false; 128];

    let mut i = 0;
    while i <= 0x20 {
        table[i] = true;
        i += 1;
    }
    table[0x7F] = true;

    table[b'#' as usize] = true;
    table[b'%' as usize] = true;
    table[b'/' as usize] = true;
    table[b':' as usize] = true;
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'?' as usize] = true;
    table[b'@' as usize] = true;
    table[b'[' as usize] = true;
    table[b'\\' as usize] = true;
    table[b']' as usize] = true;
    table[b'^' as usize] = true;
    table[b'|' as usize] = true;

    table
};

/// Check if an ASCII byte may not appear in a domain
pub fn is_forbidden_domain_byte(b: u8) -> bool {
    b.is_ascii() && FORBIDDEN_DOMAIN_TABLE[b as usize]
}

/// Check if a byte may continue a scheme after its first letter
pub fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Check if a byte ends the authority section.
/// Backslash only counts for special schemes.
pub fn is_authority_end(b: u8, special: bool) -> bool {
    matches!(b, b'/' | b'?' | b'#') || (special && b == b'\\')
}

/// Check if a byte is a path separator (`\` only for special schemes)
pub fn is_slash(b: u8, special: bool) -> bool {
    b == b'/' || (special && b == b'\\')
}
