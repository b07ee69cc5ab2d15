use std::fmt;

/// Rejected query or update.
///
/// Bounds are always checked; a [`SegmentTree`](crate::SegmentTree) never
/// reads outside its elements. An empty tree reports [`Empty`](Self::Empty)
/// before any bounds are looked at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SegmentTreeError {
    /// The tree holds no elements.
    Empty,
    /// `index >= len` on a point operation.
    IndexOutOfBounds { index: usize, len: usize },
    /// `start >= last` or `last > len` on a range query.
    InvalidRange { start: usize, last: usize, len: usize },
}

impl fmt::Display for SegmentTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => f.write_str("segment tree is empty"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of range for segment tree of length {len}")
            }
            Self::InvalidRange { start, last, len } if start >= last => {
                write!(f, "range [{start}, {last}) is empty (segment tree of length {len})")
            }
            Self::InvalidRange { start, last, len } => {
                write!(f, "range [{start}, {last}) out of range for segment tree of length {len}")
            }
        }
    }
}

impl std::error::Error for SegmentTreeError {}

#[cfg(test)]
mod tests {
    use super::SegmentTreeError;

    #[test]
    fn messages() {
        assert_eq!(SegmentTreeError::Empty.to_string(), "segment tree is empty");
        assert_eq!(
            SegmentTreeError::IndexOutOfBounds { index: 7, len: 3 }.to_string(),
            "index 7 out of range for segment tree of length 3"
        );
        assert_eq!(
            SegmentTreeError::InvalidRange { start: 2, last: 2, len: 3 }.to_string(),
            "range [2, 2) is empty (segment tree of length 3)"
        );
        assert_eq!(
            SegmentTreeError::InvalidRange { start: 0, last: 4, len: 3 }.to_string(),
            "range [0, 4) out of range for segment tree of length 3"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&SegmentTreeError::Empty);
    }
}
