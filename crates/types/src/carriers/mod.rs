//! Carrier integration contract: trait and error taxonomy

pub mod errors;
pub mod traits;

pub use errors::{CarrierError, CarrierErrorCode, CarrierResult, SerializedCarrierError};
pub use traits::Carrier;
