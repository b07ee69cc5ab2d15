//! Array-backed segment tree with point update and range fold.
//!
//! The aggregate is described by an [`AggregatePolicy`]: an identity element
//! and an associative `combine`. Both operations run in `O(log n)`;
//! construction and [`SegmentTree::build`] run in `O(n)`.
//!
//! ```
//! use segment_tree::RangeMin;
//!
//! let mut st: RangeMin<i32> = (0..10).collect();
//! assert_eq!(st.query(2, 8), Ok(2));
//! st.update(5, -1).unwrap();
//! assert_eq!(st.query(0, 10), Ok(-1));
//! ```
//!
//! Ranges are half-open: `query(start, last)` folds `[start, last)`. Empty or
//! out-of-bounds ranges and indices are rejected with [`SegmentTreeError`].
//! The tree is single-threaded; callers serialize concurrent access.

mod error;
mod layout;
pub mod policy;
mod tree;

pub use error::SegmentTreeError;
pub use policy::{AggregatePolicy, Gcd, Max, Min, PrimInt, Sum, Xor};
pub use tree::SegmentTree;

pub type RangeMin<T> = SegmentTree<Min<T>>;
pub type RangeMax<T> = SegmentTree<Max<T>>;
pub type RangeSum<T> = SegmentTree<Sum<T>>;
