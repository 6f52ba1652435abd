//! Site-selection engine.
//!
//! This module implements the two-phase algorithm:
//! 1. A forward pass that fills a [`PrefixTable`] with the best revenue
//!    reachable over every prefix of sites, marking the sites it takes.
//! 2. A backward pass that walks the markers from the last site, jumping over
//!    the exclusion window after every taken site, to recover the selection.
//!
//! Both phases are O(n) in time and use two linear buffers.

use crate::selection::Selection;
use crate::table::PrefixTable;
use crate::traits::Revenue;
use crate::utils::compatible_predecessor;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Site-selection instance: revenues plus the minimum distance between picks.
///
/// Typical usage:
/// ```
/// use site_dp::SiteSelector;
///
/// let selector = SiteSelector::new(1, vec![2, 4, 5, 17, 11, 8, 4, 2]);
/// let selection = selector.run();
/// assert_eq!(selection.revenue, 31);
/// assert_eq!(selection.sites, vec![2, 4, 6, 8]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSelector<R> {
    min_distance: usize,
    revenues: Vec<R>,
}

impl<R: Revenue> SiteSelector<R> {
    /// Create a selector over `revenues` (site 1 first).
    pub fn new(min_distance: usize, revenues: impl Into<Vec<R>>) -> Self {
        Self {
            min_distance,
            revenues: revenues.into(),
        }
    }

    /// Number of sites that must be skipped between two selected sites.
    pub fn min_distance(&self) -> usize {
        self.min_distance
    }

    /// Revenue per site, in site order.
    pub fn revenues(&self) -> &[R] {
        &self.revenues
    }

    /// Number of candidate sites.
    pub fn len(&self) -> usize {
        self.revenues.len()
    }

    /// Returns true if there are no candidate sites.
    pub fn is_empty(&self) -> bool {
        self.revenues.is_empty()
    }

    /// Run only the forward pass and return its working buffers.
    pub fn table(&self) -> PrefixTable<R> {
        forward_pass(self.min_distance, &self.revenues)
    }

    /// Solve the instance.
    pub fn run(&self) -> Selection<R> {
        solve(self.min_distance, &self.revenues)
    }
}

/// Maximum revenue over selections whose sites are more than `min_distance`
/// apart, together with one selection attaining it.
///
/// With `min_distance == 0` and a non-positive total over all sites, the
/// empty selection is returned without running the recurrence.
///
/// ```
/// use site_dp::solve;
///
/// let selection = solve(2, &[5, 1, 1, 5]);
/// assert_eq!((selection.revenue, selection.sites), (10, vec![1, 4]));
/// ```
pub fn solve<R: Revenue>(min_distance: usize, revenues: &[R]) -> Selection<R> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("site_solve", sites = revenues.len(), min_distance);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if min_distance == 0 && R::total_at_most_zero(revenues) {
        #[cfg(feature = "tracing")]
        tracing::debug!("non-positive total with zero distance; selecting nothing");
        return Selection::empty();
    }
    if revenues.is_empty() {
        return Selection::empty();
    }

    let table = {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("forward_pass");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        forward_pass(min_distance, revenues)
    };

    let sites = {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("reconstruct");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        reconstruct(min_distance, &table)
    };

    Selection {
        revenue: table.optimum(),
        sites,
    }
}

/// Phase I: prefix-optimal revenue and take/skip markers for every site.
///
/// Skipping wins only when strictly better; equal payoffs take the site.
pub fn forward_pass<R: Revenue>(min_distance: usize, revenues: &[R]) -> PrefixTable<R> {
    let mut table = PrefixTable::with_len(revenues.len());

    for (i, &value) in revenues.iter().enumerate() {
        let select_revenue = match compatible_predecessor(i, min_distance) {
            Some(j) => value + table.best_revenue[j],
            None => value,
        };

        if i == 0 {
            table.best_revenue[0] = R::ZERO.max_revenue(value);
            table.chosen[0] = value > R::ZERO;
            continue;
        }

        let skip_revenue = table.best_revenue[i - 1];
        if skip_revenue > select_revenue {
            table.best_revenue[i] = skip_revenue;
        } else {
            table.best_revenue[i] = select_revenue;
            table.chosen[i] = true;
        }
    }

    table
}

/// Phase II: recover the selected sites (1-indexed, ascending) from `table`.
pub fn reconstruct<R: Revenue>(min_distance: usize, table: &PrefixTable<R>) -> Vec<usize> {
    let mut sites = Vec::new();
    let mut cursor = table.len().checked_sub(1);

    while let Some(i) = cursor {
        if table.chosen[i] {
            sites.push(i + 1);
            cursor = compatible_predecessor(i, min_distance);
        } else {
            cursor = i.checked_sub(1);
        }
    }

    sites.reverse();
    sites
}

/// Solve independent instances, returning results in input order.
#[cfg(feature = "parallel")]
pub fn solve_batch<R>(selectors: &[SiteSelector<R>]) -> Vec<Selection<R>>
where
    R: Revenue + Send + Sync,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("solve_batch", instances = selectors.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();
    selectors.par_iter().map(SiteSelector::run).collect()
}

/// Solve independent instances, returning results in input order.
#[cfg(not(feature = "parallel"))]
pub fn solve_batch<R: Revenue>(selectors: &[SiteSelector<R>]) -> Vec<Selection<R>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("solve_batch", instances = selectors.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();
    selectors.iter().map(SiteSelector::run).collect()
}
