use std::fmt;
use std::ops::{Bound, RangeBounds};

use log::{debug, trace};

use crate::SegmentTreeError;
use crate::layout::{height_for, left_child, level_range, right_child, tree_len};
use crate::policy::AggregatePolicy;

/// Point-update / range-fold tree over a fixed-length sequence.
///
/// Internal nodes live in a flat array in heap order (root at `0`, children
/// of `k` at `2k + 1` and `2k + 2`). Leaves are not stored there: node
/// `tree.len() + i` is element `i`, and positions at or past `len()` act as
/// the policy's identity.
pub struct SegmentTree<P: AggregatePolicy> {
    elements: Vec<P::Value>,
    tree: Vec<P::Value>,
    height: u32,
}

impl<P: AggregatePolicy> SegmentTree<P> {
    /// An empty tree. Every query and update on it is rejected.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            tree: Vec::new(),
            height: 0,
        }
    }

    /// `n` copies of `fill`.
    pub fn from_elem(n: usize, fill: P::Value) -> Self {
        Self::from_vec(vec![fill; n])
    }

    pub fn from_vec(elements: Vec<P::Value>) -> Self {
        let mut this = Self {
            elements,
            tree: Vec::new(),
            height: 0,
        };
        this.build();
        this
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Depth of the leaves; `2^height >= len()`.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, index: usize) -> Option<&P::Value> {
        self.elements.get(index)
    }

    pub fn as_slice(&self) -> &[P::Value] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P::Value> {
        self.elements.iter()
    }

    pub fn into_vec(self) -> Vec<P::Value> {
        self.elements
    }

    /// Recomputes every internal node from the current elements in `O(n)`.
    pub fn build(&mut self) {
        let n = self.elements.len();
        self.height = height_for(n);
        self.tree = vec![P::identity(); tree_len(self.height)];
        debug!("segment tree build: len={n} height={}", self.height);

        if self.height == 0 {
            return;
        }

        let deepest = self.height - 1;
        let base = level_range(deepest);
        for node in base.clone() {
            let pair = 2 * (node - base.start);
            self.tree[node] = join::<P>(self.elements.get(pair), self.elements.get(pair + 1));
        }

        for depth in (0..deepest).rev() {
            for node in level_range(depth) {
                let value = P::combine(&self.tree[left_child(node)], &self.tree[right_child(node)]);
                self.tree[node] = value;
            }
        }
    }

    /// Fold of `[start, last)`.
    pub fn query(&self, start: usize, last: usize) -> Result<P::Value, SegmentTreeError> {
        self.check_range(start, last)?;
        let width = 1_usize << self.height;
        Ok(self.fold(0, 0, width, start, last))
    }

    /// [`query`](Self::query) taking any `usize` range expression.
    pub fn query_range<R: RangeBounds<usize>>(&self, range: R) -> Result<P::Value, SegmentTreeError> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let last = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        self.query(start, last)
    }

    /// Sets element `index` and refreshes its `O(log n)` ancestors.
    pub fn update(&mut self, index: usize, value: P::Value) -> Result<(), SegmentTreeError> {
        self.replace(index, value).map(drop)
    }

    /// [`update`](Self::update) returning the element it overwrote.
    pub fn replace(&mut self, index: usize, value: P::Value) -> Result<P::Value, SegmentTreeError> {
        self.check_index(index)?;
        trace!("segment tree update: index={index}");
        let old = std::mem::replace(&mut self.elements[index], value);
        let width = 1_usize << self.height;
        self.refresh(0, 0, width, index);
        Ok(old)
    }

    fn check_index(&self, index: usize) -> Result<(), SegmentTreeError> {
        let len = self.len();
        let err = if len == 0 {
            SegmentTreeError::Empty
        } else if index >= len {
            SegmentTreeError::IndexOutOfBounds { index, len }
        } else {
            return Ok(());
        };
        debug!("segment tree update rejected: {err}");
        Err(err)
    }

    fn check_range(&self, start: usize, last: usize) -> Result<(), SegmentTreeError> {
        let len = self.len();
        let err = if len == 0 {
            SegmentTreeError::Empty
        } else if start >= last || last > len {
            SegmentTreeError::InvalidRange { start, last, len }
        } else {
            return Ok(());
        };
        debug!("segment tree query rejected: {err}");
        Err(err)
    }

    /// Current value of `node`, or `None` for a padding leaf.
    #[inline(always)]
    fn node_value(&self, node: usize) -> Option<&P::Value> {
        match node.checked_sub(self.tree.len()) {
            Some(leaf) => self.elements.get(leaf),
            None => Some(&self.tree[node]),
        }
    }

    /// `node` covers `[lo, hi)`.
    fn fold(&self, node: usize, lo: usize, hi: usize, start: usize, last: usize) -> P::Value {
        if last <= lo || hi <= start {
            return P::identity();
        }
        if start <= lo && hi <= last {
            return self.node_value(node).cloned().unwrap_or_else(P::identity);
        }
        let mid = lo + (hi - lo) / 2;
        let left = self.fold(left_child(node), lo, mid, start, last);
        let right = self.fold(right_child(node), mid, hi, start, last);
        P::combine(&left, &right)
    }

    fn refresh(&mut self, node: usize, lo: usize, hi: usize, index: usize) {
        if node >= self.tree.len() {
            return;
        }
        let mid = lo + (hi - lo) / 2;
        if index < mid {
            self.refresh(left_child(node), lo, mid, index);
        } else {
            self.refresh(right_child(node), mid, hi, index);
        }
        let value = join::<P>(
            self.node_value(left_child(node)),
            self.node_value(right_child(node)),
        );
        self.tree[node] = value;
    }
}

/// `combine` where a missing side stands for the identity.
#[inline(always)]
fn join<P: AggregatePolicy>(left: Option<&P::Value>, right: Option<&P::Value>) -> P::Value {
    match (left, right) {
        (Some(l), Some(r)) => P::combine(l, r),
        (Some(l), None) => P::combine(l, &P::identity()),
        (None, Some(r)) => P::combine(&P::identity(), r),
        (None, None) => P::identity(),
    }
}

impl<P: AggregatePolicy> Default for SegmentTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: AggregatePolicy> Clone for SegmentTree<P> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            tree: self.tree.clone(),
            height: self.height,
        }
    }
}

impl<P: AggregatePolicy> fmt::Debug for SegmentTree<P>
where
    P::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("elements", &self.elements)
            .field("tree", &self.tree)
            .field("height", &self.height)
            .finish()
    }
}

impl<P: AggregatePolicy> From<Vec<P::Value>> for SegmentTree<P> {
    fn from(elements: Vec<P::Value>) -> Self {
        Self::from_vec(elements)
    }
}

impl<P: AggregatePolicy> From<&[P::Value]> for SegmentTree<P> {
    fn from(elements: &[P::Value]) -> Self {
        Self::from_vec(elements.to_vec())
    }
}

impl<P: AggregatePolicy> From<SegmentTree<P>> for Vec<P::Value> {
    fn from(tree: SegmentTree<P>) -> Self {
        tree.into_vec()
    }
}

impl<P: AggregatePolicy> FromIterator<P::Value> for SegmentTree<P> {
    fn from_iter<I: IntoIterator<Item = P::Value>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, P: AggregatePolicy> IntoIterator for &'a SegmentTree<P> {
    type Item = &'a P::Value;
    type IntoIter = std::slice::Iter<'a, P::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
