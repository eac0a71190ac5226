#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! The pure pipeline stages between loading and map construction.
//!
//! Every user interaction re-runs these from scratch over the in-memory
//! datasets: [`filter::filter_reports`] narrows the report set,
//! [`classify::classify_population`] assigns the synthetic population
//! groups, and [`aggregate::aggregate`] joins per-alcaldía counts onto
//! the boundary set.

pub mod aggregate;
pub mod classify;
pub mod filter;

pub use aggregate::{BoroughCount, aggregate, count_by_borough};
pub use classify::{DEFAULT_SAMPLE_SEED, SENIOR_FRACTION, classify_population};
pub use filter::{FilterCriteria, distinct_crime_types, distinct_years, filter_reports};
