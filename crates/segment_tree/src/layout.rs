use std::ops::Range;

/// Smallest `h` with `2^h >= n`. Zero when `n <= 1`.
#[inline(always)]
pub(crate) fn height_for(n: usize) -> u32 {
    if n <= 1 {
        return 0;
    }
    usize::BITS - (n - 1).leading_zeros()
}

/// Number of internal nodes of a complete tree of the given height.
#[inline(always)]
pub(crate) fn tree_len(height: u32) -> usize {
    debug_assert!(height < usize::BITS);
    (1_usize << height) - 1
}

/// Node indices at `depth`: `[2^depth - 1, 2^(depth+1) - 1)`.
#[inline(always)]
pub(crate) fn level_range(depth: u32) -> Range<usize> {
    debug_assert!(depth < usize::BITS - 1);
    ((1_usize << depth) - 1)..((1_usize << (depth + 1)) - 1)
}

#[inline(always)]
pub(crate) fn left_child(node: usize) -> usize {
    2 * node + 1
}

#[inline(always)]
pub(crate) fn right_child(node: usize) -> usize {
    2 * node + 2
}
