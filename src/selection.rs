//! Result type returned by the selector.

use crate::error::{Result, SiteError};
use crate::traits::{sum_revenues, Revenue};
use crate::utils::well_separated;

/// Optimal revenue together with the sites that realise it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<R> {
    /// Total revenue of the selected sites.
    pub revenue: R,
    /// Selected sites, 1-indexed and strictly increasing.
    pub sites: Vec<usize>,
}

impl<R: Revenue> Selection<R> {
    /// The empty selection, worth zero.
    pub fn empty() -> Self {
        Self {
            revenue: R::ZERO,
            sites: Vec::new(),
        }
    }

    /// Number of selected sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns true if no site is selected.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Sum of `revenues` at the selected sites, in ascending site order.
    ///
    /// # Panics
    /// Panics if a site lies outside `revenues`; call [`Selection::verify`]
    /// first for untrusted selections.
    pub fn total_of(&self, revenues: &[R]) -> R {
        sum_revenues(self.sites.iter().map(|&s| revenues[s - 1]))
    }

    /// Check that this selection is feasible for `min_distance` and that its
    /// reported revenue matches the selected sites exactly.
    pub fn verify(&self, min_distance: usize, revenues: &[R]) -> Result<()> {
        let len = revenues.len();
        for &site in &self.sites {
            if site == 0 || site > len {
                return Err(SiteError::SiteOutOfRange { site, len });
            }
        }
        for pair in self.sites.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            if second <= first {
                return Err(SiteError::NotIncreasing {
                    previous: first,
                    site: second,
                });
            }
            if !well_separated(first, second, min_distance) {
                return Err(SiteError::TooClose {
                    first,
                    second,
                    min_distance,
                });
            }
        }
        let actual = self.total_of(revenues);
        if actual != self.revenue {
            return Err(SiteError::RevenueMismatch {
                reported: format!("{:?}", self.revenue),
                actual: format!("{actual:?}"),
            });
        }
        Ok(())
    }
}
