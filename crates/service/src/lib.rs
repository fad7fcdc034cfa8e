//! Rates Service
//!
//! Core logic for fanning a rate request out to carrier adapters and
//! merging the results.

pub mod aggregator;

pub use aggregator::{AggregatedRates, CarrierFailure, RateService};
