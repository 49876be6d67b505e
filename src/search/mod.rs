//! Separator search within a byte sequence.
//!
//! The search is a plain left-to-right sliding window: every candidate
//! offset is compared byte-for-byte against the needle and the first
//! match wins. There is no preprocessing of the needle.
//!
//! - [`index_of`] - Search the whole haystack
//! - [`index_of_in`] - Search `haystack[from..to]`, with bounds checking
//! - [`index_of_range`] - Same as [`index_of_in`] with a [`SearchRange`]
//!
//! Returned indices are always relative to the start of the haystack.
//!
//! An empty needle matches at the first candidate offset, i.e. at `from`.

use crate::error::ByteError;
use crate::range::SearchRange;

/// Returns the index of the first occurrence of `needle` in `haystack`.
///
/// Returns `None` if `needle` does not occur, including when it is longer
/// than `haystack`.
///
/// # Example
///
/// ```
/// use bytesep::index_of;
///
/// assert_eq!(index_of(b"abcbc", b"bc"), Some(1));
/// assert_eq!(index_of(b"abc", b"x"), None);
/// assert_eq!(index_of(b"ab", b"abc"), None);
/// ```
pub fn index_of(haystack: impl AsRef<[u8]>, needle: impl AsRef<[u8]>) -> Option<usize> {
    let haystack = haystack.as_ref();
    find(haystack, SearchRange::full(haystack.len()), needle.as_ref())
}

/// Returns the index of the first occurrence of `needle` that lies entirely
/// within `haystack[from..to]`.
///
/// # Errors
///
/// Returns [`ByteError::OutOfRange`] unless `from <= to <= haystack.len()`.
///
/// # Example
///
/// ```
/// use bytesep::index_of_in;
///
/// assert_eq!(index_of_in([0x01u8, 0x02, 0x03], 1, 3, [0x03u8])?, Some(2));
/// assert_eq!(index_of_in([0x01u8, 0x02], 0, 2, [0x01u8, 0x02, 0x03])?, None);
/// assert!(index_of_in([0x01u8, 0x02], 0, 3, [0x01u8]).is_err());
/// # Ok::<(), bytesep::ByteError>(())
/// ```
pub fn index_of_in(
    haystack: impl AsRef<[u8]>,
    from: usize,
    to: usize,
    needle: impl AsRef<[u8]>,
) -> Result<Option<usize>, ByteError> {
    let range = SearchRange::default().with_from(from).with_to(to);
    index_of_range(haystack, range, needle)
}

/// Returns the index of the first occurrence of `needle` that lies entirely
/// within `range` of `haystack`.
///
/// # Errors
///
/// Returns [`ByteError::OutOfRange`] if `range` does not fit `haystack`.
///
/// # Example
///
/// ```
/// use bytesep::{index_of_range, SearchRange};
///
/// let range = SearchRange::new(2, 5)?;
/// assert_eq!(index_of_range(b"abcbc", range, b"bc")?, Some(3));
/// # Ok::<(), bytesep::ByteError>(())
/// ```
pub fn index_of_range(
    haystack: impl AsRef<[u8]>,
    range: SearchRange,
    needle: impl AsRef<[u8]>,
) -> Result<Option<usize>, ByteError> {
    let haystack = haystack.as_ref();
    range.validate(haystack.len())?;
    Ok(find(haystack, range, needle.as_ref()))
}

/// Sliding-window search. `range` must already fit `haystack`.
fn find(haystack: &[u8], range: SearchRange, needle: &[u8]) -> Option<usize> {
    let window = &haystack[range.from()..range.to()];

    if needle.len() > window.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(range.from());
    }

    window
        .windows(needle.len())
        .position(|candidate| candidate == needle)
        .map(|pos| range.from() + pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_repeated() {
        assert_eq!(index_of([0x61u8, 0x62, 0x63, 0x62, 0x63], [0x62u8, 0x63]), Some(1));
    }

    #[test]
    fn test_match_at_start_and_end() {
        assert_eq!(index_of(b"\r\nbody", b"\r\n"), Some(0));
        assert_eq!(index_of(b"body\r\n", b"\r\n"), Some(4));
    }

    #[test]
    fn test_whole_haystack_match() {
        assert_eq!(index_of(b"abc", b"abc"), Some(0));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(index_of(b"abcdef", b"fa"), None);
    }

    #[test]
    fn test_needle_longer_than_haystack() {
        assert_eq!(index_of(b"ab", b"abc"), None);
        assert_eq!(index_of(b"", b"a"), None);
    }

    #[test]
    fn test_partial_match_then_full() {
        // "aab" needs a restart one byte after the first candidate
        assert_eq!(index_of(b"aaab", b"aab"), Some(1));
    }

    #[test]
    fn test_empty_needle() {
        assert_eq!(index_of(b"abc", b""), Some(0));
        assert_eq!(index_of(b"", b""), Some(0));
        assert_eq!(index_of_in(b"abc", 2, 3, b"").unwrap(), Some(2));
        assert_eq!(index_of_in(b"abc", 3, 3, b"").unwrap(), Some(3));
    }

    #[test]
    fn test_bounded_finds_trailing_byte() {
        assert_eq!(index_of_in([0x01u8, 0x02, 0x03], 1, 3, [0x03u8]).unwrap(), Some(2));
    }

    #[test]
    fn test_bounded_needle_longer_than_range() {
        assert_eq!(
            index_of_in([0x01u8, 0x02], 0, 2, [0x01u8, 0x02, 0x03]).unwrap(),
            None
        );
    }

    #[test]
    fn test_bounded_ignores_match_before_from() {
        assert_eq!(index_of_in(b"bcabc", 1, 5, b"bc").unwrap(), Some(3));
    }

    #[test]
    fn test_bounded_ignores_match_crossing_to() {
        // "bc" starts at 3 but ends past `to`
        assert_eq!(index_of_in(b"abcbc", 2, 4, b"bc").unwrap(), None);
        assert_eq!(index_of_in(b"abcbc", 2, 5, b"bc").unwrap(), Some(3));
    }

    #[test]
    fn test_bounded_empty_range() {
        assert_eq!(index_of_in(b"abc", 1, 1, b"b").unwrap(), None);
    }

    #[test]
    fn test_to_past_end() {
        let err = index_of_in(b"abc", 0, 4, b"a").unwrap_err();
        assert_eq!(
            err,
            ByteError::OutOfRange {
                from: 0,
                to: 4,
                len: Some(3)
            }
        );
    }

    #[test]
    fn test_from_past_to() {
        let err = index_of_in(b"abc", 2, 1, b"a").unwrap_err();
        assert_eq!(
            err,
            ByteError::OutOfRange {
                from: 2,
                to: 1,
                len: Some(3)
            }
        );
    }

    #[test]
    fn test_from_past_end() {
        assert!(index_of_in(b"abc", 5, 5, b"").is_err());
    }

    #[test]
    fn test_range_variant_matches_in_variant() {
        let range = SearchRange::new(1, 5).unwrap();
        assert_eq!(
            index_of_range(b"abcbc", range, b"cb"),
            index_of_in(b"abcbc", 1, 5, b"cb")
        );
    }

    #[test]
    fn test_unvalidated_range_rejected() {
        let range = SearchRange::full(3).with_from(4);
        assert!(index_of_range(b"abc", range, b"a").is_err());
    }
}
