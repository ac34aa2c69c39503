use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Encode sets mirror the ECMAScript and WHATWG definitions
// https://tc39.es/ecma262/#sec-encodeuricomponent-uricomponent
// https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set

/// `encodeURIComponent` set
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Path segment set
/// Component set with `:` left alone so ports and `:key` placeholders survive
pub const SEGMENT_SET: &AsciiSet = &COMPONENT_SET.remove(b':');

/// `application/x-www-form-urlencoded` set
/// Everything except ASCII alphanumerics and `* - . _`; space is written as `+`
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode with the `encodeURIComponent` set
pub fn encode_component(input: &str) -> String {
    let mut buffer = String::with_capacity(input.len());
    percent_encode_into(&mut buffer, input, COMPONENT_SET);
    buffer
}

/// Check for a well-formed `%XX` escape at `pos`
fn is_escape(bytes: &[u8], pos: usize) -> bool {
    bytes.len() > pos + 2 && bytes[pos + 1].is_ascii_hexdigit() && bytes[pos + 2].is_ascii_hexdigit()
}

/// Percent-encode a path segment into buffer.
/// Well-formed `%XX` escapes are copied as they are, a stray `%` becomes `%25`.
pub fn percent_encode_segment_into(buffer: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let mut start = 0;

    for pos in memchr::memchr_iter(b'%', bytes) {
        if pos < start || !is_escape(bytes, pos) {
            continue;
        }
        percent_encode_into(buffer, &input[start..pos], SEGMENT_SET);
        buffer.push_str(&input[pos..pos + 3]);
        start = pos + 3;
    }

    percent_encode_into(buffer, &input[start..], SEGMENT_SET);
}

/// Form-urlencode a query key or value into buffer
pub fn percent_encode_form_into(buffer: &mut String, input: &str) {
    for (i, piece) in input.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        percent_encode_into(buffer, piece, FORM_SET);
    }
}
