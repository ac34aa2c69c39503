use crate::assembler::Assembled;
use crate::unicode::percent_encode::percent_encode_segment_into;

/// Join assembled fragments into URL text.
///
/// The protocol marker is glued to what follows, every other fragment is
/// joined with `/`. Empty fragments are kept, so they show up as `//`.
pub fn serialize(assembled: &Assembled) -> String {
    let capacity = assembled.fragments.iter().map(|f| f.len() + 1).sum();
    let mut url = String::with_capacity(capacity);

    let body = match assembled.protocol_marker() {
        Some(marker) => {
            url.push_str(marker);
            &assembled.fragments[1..]
        }
        None => &assembled.fragments[..],
    };

    for (i, fragment) in body.iter().enumerate() {
        if i > 0 {
            url.push('/');
        }
        url.push_str(fragment);
    }
    url
}

/// Percent-encode every path fragment in place.
///
/// The protocol marker and the already serialized domain are left alone. Inside a
/// fragment, `/` separators and existing `%XX` escapes are preserved.
pub fn encode_fragments(assembled: &mut Assembled) {
    let skip = assembled.body_start() + usize::from(assembled.has_domain);
    for fragment in assembled.fragments.iter_mut().skip(skip) {
        *fragment = encode_fragment(fragment);
    }
}

fn encode_fragment(fragment: &str) -> String {
    let mut buffer = String::with_capacity(fragment.len());
    for (i, segment) in fragment.split('/').enumerate() {
        if i > 0 {
            buffer.push('/');
        }
        percent_encode_segment_into(&mut buffer, segment);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ProtocolKind;

    fn assembled(fragments: &[&str], has_protocol: bool, has_domain: bool) -> Assembled {
        Assembled {
            fragments: fragments.iter().map(ToString::to_string).collect(),
            has_protocol,
            protocol: if has_protocol {
                ProtocolKind::Https
            } else {
                ProtocolKind::None
            },
            has_domain,
        }
    }

    #[test]
    fn test_serialize_with_protocol() {
        let parts = assembled(&["https://", "example.com", "blog", "post/1"], true, true);
        assert_eq!(serialize(&parts), "https://example.com/blog/post/1");
    }

    #[test]
    fn test_serialize_keeps_empty_fragments() {
        let parts = assembled(&["https://", "example.com", "", " ", "blog"], true, true);
        assert_eq!(serialize(&parts), "https://example.com// /blog");
    }

    #[test]
    fn test_serialize_without_protocol() {
        assert_eq!(serialize(&assembled(&["blog", "post"], false, false)), "blog/post");
        assert_eq!(serialize(&assembled(&[], false, false)), "");
        assert_eq!(serialize(&assembled(&["https://"], true, false)), "https://");
    }

    #[test]
    fn test_encode_skips_protocol_and_domain() {
        let mut parts = assembled(
            &["https://", "üser@exämple.com", "pÖ&st/1", "about me", "/:id/"],
            true,
            true,
        );
        encode_fragments(&mut parts);
        assert_eq!(
            parts.fragments,
            vec![
                "https://",
                "üser@exämple.com",
                "p%C3%96%26st/1",
                "about%20me",
                "/:id/"
            ]
        );
    }

    #[test]
    fn test_encode_without_domain_encodes_first_fragment() {
        let mut parts = assembled(&["a b", "c?d"], false, false);
        encode_fragments(&mut parts);
        assert_eq!(parts.fragments, vec!["a%20b", "c%3Fd"]);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let mut parts = assembled(&["caf%C3%A9 100%", "x"], false, false);
        encode_fragments(&mut parts);
        assert_eq!(parts.fragments, vec!["caf%C3%A9%20100%25", "x"]);

        let once = parts.clone();
        encode_fragments(&mut parts);
        assert_eq!(parts, once);
    }
}
