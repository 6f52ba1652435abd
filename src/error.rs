use thiserror::Error;

/// Errors raised by validated construction and by selection verification.
///
/// Site positions are reported 1-indexed, matching [`crate::Selection::sites`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("minimum distance must be non-negative, got {0}")]
    NegativeDistance(i64),
    #[error("revenue at site {site} is not finite")]
    NonFiniteRevenue { site: usize },
    #[error("site {site} is outside 1..={len}")]
    SiteOutOfRange { site: usize, len: usize },
    #[error("site {site} does not follow site {previous} in increasing order")]
    NotIncreasing { previous: usize, site: usize },
    #[error("sites {first} and {second} are not more than {min_distance} apart")]
    TooClose {
        first: usize,
        second: usize,
        min_distance: usize,
    },
    #[error("reported revenue {reported} differs from selected total {actual}")]
    RevenueMismatch { reported: String, actual: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;
