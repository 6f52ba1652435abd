use crate::error::{Result, SiteError};
use crate::selection::Selection;
use crate::traits::Revenue;
use crate::SiteSelector;

/// Distance as supplied to the builder, checked in [`SiteSelectorBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DistanceArg {
    Unsigned(usize),
    Signed(i64),
}

/// Validated construction of a [`SiteSelector`].
///
/// The distance defaults to zero. Non-finite revenues are rejected unless
/// explicitly allowed.
pub struct SiteSelectorBuilder<R: Revenue> {
    revenues: Vec<R>,
    min_distance: DistanceArg,
    allow_non_finite: bool,
}

impl<R: Revenue> SiteSelectorBuilder<R> {
    pub fn new(revenues: impl Into<Vec<R>>) -> Self {
        Self {
            revenues: revenues.into(),
            min_distance: DistanceArg::Unsigned(0),
            allow_non_finite: false,
        }
    }

    pub fn with_min_distance(mut self, min_distance: usize) -> Self {
        self.min_distance = DistanceArg::Unsigned(min_distance);
        self
    }

    /// Accept a signed distance; negative values fail in [`Self::build`].
    pub fn with_signed_min_distance(mut self, min_distance: i64) -> Self {
        self.min_distance = DistanceArg::Signed(min_distance);
        self
    }

    pub fn allow_non_finite(mut self, allow: bool) -> Self {
        self.allow_non_finite = allow;
        self
    }

    pub fn build(self) -> Result<SiteSelector<R>> {
        let min_distance = match self.min_distance {
            DistanceArg::Unsigned(d) => d,
            DistanceArg::Signed(d) => {
                usize::try_from(d).map_err(|_| SiteError::NegativeDistance(d))?
            }
        };
        if !self.allow_non_finite {
            if let Some(i) = self.revenues.iter().position(|r| !r.is_finite_revenue()) {
                return Err(SiteError::NonFiniteRevenue { site: i + 1 });
            }
        }
        Ok(SiteSelector::new(min_distance, self.revenues))
    }
}

/// Validate the arguments, then solve.
///
/// ```
/// use site_dp::{try_solve, SiteError};
///
/// assert_eq!(try_solve(-1, &[3, 4]).unwrap_err(), SiteError::NegativeDistance(-1));
/// assert_eq!(try_solve(0, &[1, 2, 3]).unwrap().sites, vec![1, 2, 3]);
/// ```
pub fn try_solve<R: Revenue>(min_distance: i64, revenues: &[R]) -> Result<Selection<R>> {
    let selector = SiteSelectorBuilder::new(revenues)
        .with_signed_min_distance(min_distance)
        .build()?;
    Ok(selector.run())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_zero_distance() {
        let selector = SiteSelectorBuilder::new(vec![1, 2]).build().unwrap();
        assert_eq!(selector.min_distance(), 0);
        assert_eq!(selector.revenues(), &[1, 2]);
    }

    #[test]
    fn rejects_negative_distance() {
        let err = SiteSelectorBuilder::new(vec![1i32])
            .with_signed_min_distance(-3)
            .build()
            .unwrap_err();
        assert_eq!(err, SiteError::NegativeDistance(-3));
        assert_eq!(
            err.to_string(),
            "minimum distance must be non-negative, got -3"
        );
    }

    #[test]
    fn unsigned_distance_round_trips() {
        let selector = SiteSelectorBuilder::new(vec![1i64])
            .with_min_distance(7)
            .build()
            .unwrap();
        assert_eq!(selector.min_distance(), 7);

        let selector = SiteSelectorBuilder::new(vec![1i64])
            .with_min_distance(usize::MAX)
            .build()
            .unwrap();
        assert_eq!(selector.min_distance(), usize::MAX);
    }

    #[test]
    fn last_distance_setter_wins() {
        let selector = SiteSelectorBuilder::new(vec![2i32])
            .with_signed_min_distance(-1)
            .with_min_distance(3)
            .build()
            .unwrap();
        assert_eq!(selector.min_distance(), 3);

        let err = SiteSelectorBuilder::new(vec![2i32])
            .with_min_distance(3)
            .with_signed_min_distance(i64::MIN)
            .build()
            .unwrap_err();
        assert_eq!(err, SiteError::NegativeDistance(i64::MIN));
    }

    #[test]
    fn non_finite_revenues() {
        let err = SiteSelectorBuilder::new(vec![1.0, f64::NAN, f64::INFINITY])
            .build()
            .unwrap_err();
        assert_eq!(err, SiteError::NonFiniteRevenue { site: 2 });

        let selector = SiteSelectorBuilder::new(vec![1.0, f64::NAN])
            .with_min_distance(1)
            .allow_non_finite(true)
            .build()
            .unwrap();
        assert_eq!(selector.len(), 2);
    }
}
