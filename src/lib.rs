//! Optimal site selection under a minimum-distance constraint.
//!
//! Given candidate sites along a line, each with a (possibly negative)
//! revenue, this crate finds the subset of sites with maximum total revenue
//! such that any two selected sites are more than `d` positions apart, and
//! reports the selected sites.
//!
//! ## Core idea
//! 1. A forward pass computes, for every prefix of sites, the best revenue
//!    achievable using only that prefix, marking the sites it takes.
//! 2. A backward pass walks those markers from the last site to recover one
//!    optimal selection, skipping `d` sites after each taken one.
//!
//! Both passes are O(n) time and use two linear buffers.
//!
//! ## Quick start
//! ```
//! use site_dp::solve;
//!
//! let selection = solve(1, &[2, 4, 5, 17, 11, 8, 4, 2]);
//! assert_eq!(selection.revenue, 31);
//! assert_eq!(selection.sites, vec![2, 4, 6, 8]);
//! assert!(selection.verify(1, &[2, 4, 5, 17, 11, 8, 4, 2]).is_ok());
//! ```
//!
//! ## Cargo features
//! - `parallel`: [`solve_batch`] spreads independent instances over rayon.
//! - `tracing`: emit `tracing` spans for each solve and its two phases.
//! - `heavy`: enable large stress tests.

pub mod builder;
pub mod engine;
pub mod error;
pub mod selection;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::{try_solve, SiteSelectorBuilder};
pub use crate::engine::{solve, solve_batch, SiteSelector};
pub use crate::error::{Result, SiteError};
pub use crate::selection::Selection;
pub use crate::table::PrefixTable;
pub use crate::traits::Revenue;
