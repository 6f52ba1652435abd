//! Working buffers filled by the forward pass.
//!
//! A `PrefixTable` holds one entry per site: the prefix-optimal revenue over
//! sites `0..=i` and whether site `i` was taken when that entry was computed.

use crate::traits::Revenue;

/// Result of the forward pass over `n` sites.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixTable<R> {
    /// `best_revenue[i]` is the best total using only sites `0..=i`.
    pub best_revenue: Vec<R>,
    /// `chosen[i]` is true when site `i` was taken at step `i`.
    pub chosen: Vec<bool>,
}

impl<R: Revenue> PrefixTable<R> {
    /// Allocate a table for `n` sites, zero-filled and with nothing chosen.
    pub fn with_len(n: usize) -> Self {
        Self {
            best_revenue: vec![R::ZERO; n],
            chosen: vec![false; n],
        }
    }

    /// Number of sites covered.
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.best_revenue.len(), self.chosen.len());
        self.best_revenue.len()
    }

    /// Returns true if the table covers no sites.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Best revenue over all sites (zero for an empty table).
    #[inline]
    pub fn optimum(&self) -> R {
        self.best_revenue.last().copied().unwrap_or(R::ZERO)
    }

    /// Whether the 0-indexed site `i` was taken; false when out of range.
    #[inline]
    pub fn is_chosen(&self, i: usize) -> bool {
        self.chosen.get(i).copied().unwrap_or(false)
    }
}
