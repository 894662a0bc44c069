//! Statistical primitives for the timerespect project.
//!
//! This crate provides the small set of statistical tools the analysis engine
//! is built on:
//!
//! - **Descriptive statistics**: mean and median
//! - **Percentiles**: linear-interpolated quantiles over sorted data
//! - **Weighted median**: the value at which cumulative weight reaches half the total mass
//! - **Ranking**: average ranks with tie handling
//!
//! # Modules
//!
//! - [`descriptive`]: Unweighted mean and median
//! - [`percentiles`]: Percentile computation and storage
//! - [`weighted`]: Weighted median
//! - [`rank`]: Average ranking of values
//!
//! # Examples
//!
//! ## Computing a median
//!
//! ```
//! use timerespect_stats::descriptive::median;
//!
//! assert_eq!(median([5.0, 1.0, 4.0, 2.0, 3.0]), Some(3.0));
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use timerespect_stats::percentiles::Percentiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
//! assert_eq!(percentiles.get(50.0), Some(3.0));
//! ```
//!
//! ## Computing a weighted median
//!
//! ```
//! use timerespect_stats::weighted::weighted_median;
//!
//! // The heavy observation dominates even though it is outnumbered.
//! let median = weighted_median(&[10.0, 50.0, 50.0, 50.0], &[100.0, 1.0, 1.0, 1.0]);
//! assert_eq!(median, 10.0);
//! ```
//!
//! ## Ranking values
//!
//! ```
//! use timerespect_stats::rank::average_ranks;
//!
//! assert_eq!(average_ranks(&[30.0, 10.0, 20.0]), vec![3.0, 1.0, 2.0]);
//! ```

pub mod descriptive;
pub mod percentiles;
pub mod rank;
pub mod weighted;
