//! Assorted index helpers shared by the forward and backward passes.

/// Last site index still compatible with taking site `i`, if any.
///
/// Taking `i` rules out `i - d ..= i - 1`, so the best compatible prefix ends
/// at `i - d - 1`. Returns `None` when that index would be negative.
#[inline]
pub fn compatible_predecessor(i: usize, min_distance: usize) -> Option<usize> {
    i.checked_sub(min_distance)?.checked_sub(1)
}

/// True if 1-indexed sites `p < q` may both be selected under `min_distance`.
#[inline]
pub fn well_separated(p: usize, q: usize, min_distance: usize) -> bool {
    q > p && q - p > min_distance
}
