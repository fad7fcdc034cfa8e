//! Error types for rate request validation

use thiserror::Error;

/// Field-level validation errors for rate requests
///
/// These are the caller-correctable precondition failures; unlike
/// carrier errors they are never swallowed by the aggregation service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateValidationError {
	#[error("Missing required field: {field}")]
	MissingRequiredField { field: String },

	#[error("Invalid country code: {field} must be a 2-letter ISO code")]
	InvalidCountryCode { field: String },

	#[error("Invalid weight: {field} - {reason}")]
	InvalidWeight { field: String, reason: String },

	#[error("Invalid dimensions: {field} - {reason}")]
	InvalidDimensions { field: String, reason: String },

	#[error("At least one package is required")]
	EmptyPackages,
}

impl RateValidationError {
	/// The request field the error refers to, when one applies
	pub fn field(&self) -> Option<&str> {
		match self {
			Self::MissingRequiredField { field }
			| Self::InvalidCountryCode { field }
			| Self::InvalidWeight { field, .. }
			| Self::InvalidDimensions { field, .. } => Some(field),
			Self::EmptyPackages => None,
		}
	}
}

pub type RateValidationResult<T> = Result<T, RateValidationError>;
