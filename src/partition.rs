//! Character-offset re-partitioning of a fragment sequence.
//!
//! Offsets are measured over a *probe*: the text made from the fragments
//! that count toward offsets (`Piece`s), possibly with separators between
//! them. Fragments without a piece (blank ones skipped by the probe) take
//! no room in the probe.

use std::cmp::Ordering;

use tracing::trace;

/// A fragment that counts toward offsets, and where its text starts in the probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// Position of the fragment in the sequence
    pub index: usize,
    /// Byte offset of the fragment's first character in the probe
    pub start: usize,
}

/// Fragments split around a cut
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// All text before the cut, as one fragment
    pub head: String,
    /// Everything after the cut, in order
    pub tail: Vec<String>,
    /// The cut fell inside a fragment and `tail[0]` is the rest of it
    pub split: bool,
}

/// Pieces for a plain concatenation: every fragment counts, no separators
pub fn cumulative_pieces<S: AsRef<str>>(fragments: &[S]) -> Vec<Piece> {
    let mut start = 0;
    fragments
        .iter()
        .enumerate()
        .map(|(index, fragment)| {
            let piece = Piece { index, start };
            start += fragment.as_ref().len();
            piece
        })
        .collect()
}

/// Split `fragments` at probe offset `end`.
///
/// The cut lands in the first non-empty piece whose text reaches `end`.
/// Counted fragments before the cut go into `head`, uncounted ones before it
/// are consumed. The cut fragment is divided between `head` and `tail`, and
/// every fragment after it (empty ones too) is kept in `tail`.
///
/// `pieces` must be sorted by `index`.
pub fn repartition<S: AsRef<str>>(fragments: &[S], pieces: &[Piece], end: usize) -> Partition {
    let cut = pieces.iter().find(|piece| {
        let len = fragments.get(piece.index).map_or(0, |f| f.as_ref().len());
        len > 0 && piece.start + len >= end
    });

    let mut partition = Partition::default();
    let is_counted = |index: usize| {
        pieces
            .binary_search_by_key(&index, |piece| piece.index)
            .is_ok()
    };

    let Some(cut) = cut else {
        // The cut is past the last piece
        for (index, fragment) in fragments.iter().enumerate() {
            if is_counted(index) {
                partition.head.push_str(fragment.as_ref());
            }
        }
        return partition;
    };

    for (index, fragment) in fragments.iter().enumerate() {
        let fragment = fragment.as_ref();
        match index.cmp(&cut.index) {
            Ordering::Less => {
                if is_counted(index) {
                    partition.head.push_str(fragment);
                }
            }
            Ordering::Equal => {
                let at = end.saturating_sub(cut.start).min(fragment.len());
                match fragment.split_at_checked(at) {
                    Some((before, after)) => {
                        partition.head.push_str(before);
                        if !after.is_empty() {
                            partition.tail.push(after.to_string());
                            partition.split = true;
                        }
                    }
                    // Not a char boundary: keep the fragment whole
                    None => partition.head.push_str(fragment),
                }
            }
            Ordering::Greater => partition.tail.push(fragment.to_string()),
        }
    }

    trace!(end, cut = cut.index, head = %partition.head, "repartitioned fragments");
    partition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(fragments: &[&str], end: usize) -> (String, Vec<String>) {
        let partition = repartition(fragments, &cumulative_pieces(fragments), end);
        (partition.head, partition.tail)
    }

    #[test]
    fn test_cumulative_pieces() {
        let pieces = cumulative_pieces(&["ab", "", "cde"]);
        assert_eq!(
            pieces,
            vec![
                Piece { index: 0, start: 0 },
                Piece { index: 1, start: 2 },
                Piece { index: 2, start: 2 },
            ]
        );
    }

    #[test]
    fn test_cut_at_fragment_edge() {
        let (head, tail) = split(&["https://", "example.com", "blog"], 8);
        assert_eq!(head, "https://");
        assert_eq!(tail, vec!["example.com", "blog"]);
    }

    #[test]
    fn test_cut_mid_fragment() {
        let (head, tail) = split(&["https://example.com", "blog"], 8);
        assert_eq!(head, "https://");
        assert_eq!(tail, vec!["example.com", "blog"]);
    }

    #[test]
    fn test_split_flag() {
        let fragments = ["https://example.com", "blog"];
        let pieces = cumulative_pieces(&fragments);
        assert!(repartition(&fragments, &pieces, 8).split);

        // Cut on a fragment edge
        let fragments = ["https://", "example.com"];
        let pieces = cumulative_pieces(&fragments);
        assert!(!repartition(&fragments, &pieces, 8).split);

        // Cut at the very end of a fragment leaves no rest
        let fragments = ["https://example.com", "blog"];
        let pieces = cumulative_pieces(&fragments);
        assert!(!repartition(&fragments, &pieces, 19).split);
    }

    #[test]
    fn test_span_across_many_fragments() {
        let (head, tail) = split(&["ht", "tp", "s:", "/", "/exa", "mple"], 8);
        assert_eq!(head, "https://");
        assert_eq!(tail, vec!["exa", "mple"]);
    }

    #[test]
    fn test_empty_fragments_at_boundaries() {
        // Inside the span: consumed
        let (head, tail) = split(&["https:", "", "//", "x"], 8);
        assert_eq!(head, "https://");
        assert_eq!(tail, vec!["x"]);

        // Right after the boundary: kept
        let (head, tail) = split(&["https://", "", "x", ""], 8);
        assert_eq!(head, "https://");
        assert_eq!(tail, vec!["", "x", ""]);
    }

    #[test]
    fn test_end_past_the_last_piece() {
        let (head, tail) = split(&["ab", "cd"], 10);
        assert_eq!(head, "abcd");
        assert!(tail.is_empty());
    }

    #[test]
    fn test_uncounted_fragments() {
        // Probe "example.com/blog": " " and "" are not counted
        let fragments = ["example", " ", ".com", "", "blog"];
        let pieces = [
            Piece { index: 0, start: 0 },
            Piece { index: 2, start: 7 },
            Piece { index: 4, start: 12 },
        ];
        let partition = repartition(&fragments, &pieces, 11);
        assert_eq!(partition.head, "example.com");
        assert_eq!(partition.tail, vec!["", "blog"]);
    }

    #[test]
    fn test_non_char_boundary_keeps_fragment_whole() {
        let (head, tail) = split(&["é", "x"], 1);
        assert_eq!(head, "é");
        assert_eq!(tail, vec!["x"]);
    }
}
