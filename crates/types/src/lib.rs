//! Rates Types
//!
//! Shared models and traits for the shipping-rate aggregator.
//! This crate contains all domain models organized by business entity.

pub mod carriers;
pub mod models;
pub mod rates;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use carriers::{
	Carrier, CarrierError, CarrierErrorCode, CarrierResult, SerializedCarrierError,
};

pub use models::{Address, DimensionUnit, Dimensions, Package, SecretString, Weight, WeightUnit};

pub use rates::{RateQuote, RateRequest, RateValidationError, RateValidationResult};
