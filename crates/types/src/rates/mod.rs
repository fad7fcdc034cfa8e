//! Rate request and quote models

pub mod errors;
pub mod quote;
pub mod request;

pub use errors::{RateValidationError, RateValidationResult};
pub use quote::RateQuote;
pub use request::RateRequest;
