//! Search range over a byte sequence's index space.
//!
//! - [`SearchRange`] - Validated `(from, to)` pair, `from <= to`
//!
//! # Example
//!
//! ```
//! use bytesep::SearchRange;
//!
//! let range = SearchRange::new(1, 3)?;
//! assert_eq!(range.len(), 2);
//!
//! // Bounds against a concrete sequence are checked separately
//! assert!(range.validate(2).is_err());
//! assert!(range.validate(3).is_ok());
//! # Ok::<(), bytesep::ByteError>(())
//! ```

use std::ops::Range;

use crate::error::ByteError;

/// A half-open range `[from, to)` of byte indices.
///
/// A `SearchRange` built with [`SearchRange::new`] always satisfies
/// `from <= to`. Whether it fits a particular sequence is checked with
/// [`SearchRange::validate`], since the range itself does not know the
/// sequence length.
///
/// # Example
///
/// ```
/// use bytesep::SearchRange;
///
/// let range = SearchRange::full(5).with_from(2);
/// assert_eq!(range.from(), 2);
/// assert_eq!(range.to(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SearchRange {
    /// Start index (inclusive).
    from: usize,

    /// End index (exclusive).
    to: usize,
}

impl SearchRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns [`ByteError::OutOfRange`] if `from > to`.
    ///
    /// # Example
    ///
    /// ```
    /// use bytesep::SearchRange;
    ///
    /// assert!(SearchRange::new(0, 4).is_ok());
    /// assert!(SearchRange::new(4, 0).is_err());
    /// ```
    pub fn new(from: usize, to: usize) -> Result<Self, ByteError> {
        if from > to {
            return Err(ByteError::OutOfRange {
                from,
                to,
                len: None,
            });
        }

        Ok(Self { from, to })
    }

    /// Creates a range covering a whole sequence of length `len`.
    pub const fn full(len: usize) -> Self {
        Self { from: 0, to: len }
    }

    /// Sets the start index.
    ///
    /// Note: This does not validate the range. Use [`SearchRange::validate`]
    /// before searching with it.
    pub fn with_from(mut self, from: usize) -> Self {
        self.from = from;
        self
    }

    /// Sets the end index.
    ///
    /// Note: This does not validate the range. Use [`SearchRange::validate`]
    /// before searching with it.
    pub fn with_to(mut self, to: usize) -> Self {
        self.to = to;
        self
    }

    /// Returns the start index (inclusive).
    pub fn from(&self) -> usize {
        self.from
    }

    /// Returns the end index (exclusive).
    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns the number of indices covered, 0 if the range is inverted.
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    /// Returns true if the range covers no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks `from <= to <= len` for a sequence of length `len`.
    ///
    /// # Example
    ///
    /// ```
    /// use bytesep::SearchRange;
    ///
    /// let range = SearchRange::full(3).with_from(4);
    /// assert!(range.validate(3).is_err());
    /// ```
    pub fn validate(&self, len: usize) -> Result<(), ByteError> {
        if self.from > self.to || self.to > len {
            return Err(ByteError::OutOfRange {
                from: self.from,
                to: self.to,
                len: Some(len),
            });
        }
        Ok(())
    }
}

impl From<SearchRange> for Range<usize> {
    fn from(range: SearchRange) -> Self {
        range.from..range.to
    }
}

impl TryFrom<Range<usize>> for SearchRange {
    type Error = ByteError;

    fn try_from(range: Range<usize>) -> Result<Self, Self::Error> {
        Self::new(range.start, range.end)
    }
}
