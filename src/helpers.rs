/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Byte range left after trimming leading and trailing C0 controls and spaces.
/// Offsets refer to `input`, so callers can map positions back.
pub fn trimmed_range(input: &str) -> (usize, usize) {
    let bytes = input.as_bytes();
    let start = bytes.iter().position(|&b| b > 0x20).unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| b > 0x20)
        .map_or(start, |pos| pos + 1);
    (start, end.max(start))
}

/// Remove every leading `/`
pub fn strip_leading_slashes(input: &str) -> &str {
    input.trim_start_matches('/')
}

/// Check if a fragment holds nothing but whitespace
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Collapse runs of slashes into one.
/// A run right after `:` keeps two slashes so `https://` survives.
pub fn collapse_slashes(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut result = String::with_capacity(input.len());
    let mut start = 0;

    while let Some(offset) = memchr::memchr(b'/', &bytes[start..]) {
        let run_start = start + offset;
        let run_end = bytes[run_start..]
            .iter()
            .position(|&b| b != b'/')
            .map_or(bytes.len(), |len| run_start + len);

        result.push_str(&input[start..run_start]);
        let after_colon = run_start > 0 && bytes[run_start - 1] == b':';
        result.push_str(if after_colon && run_end - run_start >= 2 {
            "//"
        } else {
            "/"
        });
        start = run_end;
    }

    result.push_str(&input[start..]);
    result
}

/// Collapse slashes but keep a leading `//` (protocol-relative URLs)
pub fn collapse_slashes_keep_relative(input: &str) -> String {
    match input.strip_prefix("//") {
        Some(rest) => {
            let mut result = String::from("//");
            result.push_str(&collapse_slashes(strip_leading_slashes(rest)));
            result
        }
        None => collapse_slashes(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_range() {
        assert_eq!(trimmed_range("  abc \n"), (2, 5));
        assert_eq!(trimmed_range("abc"), (0, 3));
        assert_eq!(trimmed_range(" \t "), (3, 3));
        assert_eq!(trimmed_range(""), (0, 0));
    }

    #[test]
    fn test_collapse_slashes() {
        assert_eq!(
            collapse_slashes("https://example.com//path///to/"),
            "https://example.com/path/to/"
        );
        assert_eq!(collapse_slashes("/blog//post/1"), "/blog/post/1");
        assert_eq!(collapse_slashes("//example/blog"), "/example/blog");
        assert_eq!(collapse_slashes("ftp://example.com"), "ftp://example.com");
        assert_eq!(collapse_slashes("a:/b"), "a:/b");
        // A longer run after a colon is trimmed to two, like `(?<!:)/{2,}`
        assert_eq!(collapse_slashes("https:///x"), "https://x");
        assert_eq!(collapse_slashes("no-slashes"), "no-slashes");
    }

    #[test]
    fn test_collapse_keep_relative() {
        assert_eq!(
            collapse_slashes_keep_relative("//example.com//blog"),
            "//example.com/blog"
        );
        assert_eq!(collapse_slashes_keep_relative("///x//y"), "//x/y");
        assert_eq!(collapse_slashes_keep_relative("/a//b"), "/a/b");
    }

    #[test]
    fn test_tabs_and_newlines() {
        assert!(has_tabs_or_newline("a\tb"));
        assert!(has_tabs_or_newline("a\r\n"));
        assert!(!has_tabs_or_newline("ab"));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t"));
        assert!(!is_blank(" a "));
    }
}
