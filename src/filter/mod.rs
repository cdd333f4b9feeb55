//! Company filtering
//!
//! A [`CompanyFilter`] is the user's set of selected companies. The
//! [`FilterAggregator`] owns the active filter and the derived
//! [`FilterSnapshot`] (visible ideas, per-cluster counts), recomputed on
//! every filter change or data reload.

pub mod aggregator;
pub mod company;

pub use aggregator::{aggregate, FilterAggregator, FilterSnapshot};
pub use company::CompanyFilter;
