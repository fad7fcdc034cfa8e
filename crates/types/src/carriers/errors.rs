//! Error taxonomy for carrier integrations
//!
//! Every failure boundary (transport, OAuth, response parsing) maps
//! into one of four variants. Variants carry a message plus optional
//! structured details and serialize to a stable
//! `{ code, message, details? }` shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::rates::RateValidationError;

/// Stable machine-readable carrier error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarrierErrorCode {
	#[serde(rename = "CARRIER_VALIDATION")]
	Validation,
	#[serde(rename = "CARRIER_UNAVAILABLE")]
	Unavailable,
	#[serde(rename = "CARRIER_RATE_FETCH_FAILED")]
	RateFetchFailed,
	#[serde(rename = "CARRIER_TIMEOUT")]
	Timeout,
}

/// Carrier integration errors
///
/// `Clone` is required so a single in-flight token fetch can hand the
/// same failure to every concurrent waiter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarrierError {
	/// Malformed or rejected input, or a 4xx carrier response
	#[error("{message}")]
	Validation {
		message: String,
		details: Option<Value>,
	},

	/// Carrier or network outage, 5xx, or a malformed token response
	#[error("{message}")]
	Unavailable {
		message: String,
		details: Option<Value>,
	},

	/// Response received but unparseable, or an unclassified non-2xx
	#[error("{message}")]
	RateFetchFailed {
		message: String,
		details: Option<Value>,
	},

	/// Call exceeded its deadline
	#[error("{message}")]
	Timeout {
		message: String,
		details: Option<Value>,
	},
}

/// Wire shape for carrier errors: `{ code, message, details? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedCarrierError {
	pub code: CarrierErrorCode,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<Value>,
}

impl CarrierError {
	pub fn validation(message: impl Into<String>, details: Option<Value>) -> Self {
		Self::Validation {
			message: message.into(),
			details,
		}
	}

	pub fn unavailable(message: impl Into<String>, details: Option<Value>) -> Self {
		Self::Unavailable {
			message: message.into(),
			details,
		}
	}

	pub fn rate_fetch_failed(message: impl Into<String>, details: Option<Value>) -> Self {
		Self::RateFetchFailed {
			message: message.into(),
			details,
		}
	}

	pub fn timeout(message: impl Into<String>, details: Option<Value>) -> Self {
		Self::Timeout {
			message: message.into(),
			details,
		}
	}

	/// The stable machine-readable code for this variant
	pub fn code(&self) -> CarrierErrorCode {
		match self {
			Self::Validation { .. } => CarrierErrorCode::Validation,
			Self::Unavailable { .. } => CarrierErrorCode::Unavailable,
			Self::RateFetchFailed { .. } => CarrierErrorCode::RateFetchFailed,
			Self::Timeout { .. } => CarrierErrorCode::Timeout,
		}
	}

	/// Structured details attached at the failure boundary, if any
	pub fn details(&self) -> Option<&Value> {
		match self {
			Self::Validation { details, .. }
			| Self::Unavailable { details, .. }
			| Self::RateFetchFailed { details, .. }
			| Self::Timeout { details, .. } => details.as_ref(),
		}
	}

	/// Extract an HTTP status code from the details if one was recorded
	pub fn status_code(&self) -> Option<u16> {
		self.details()
			.and_then(|details| details.get("statusCode"))
			.and_then(Value::as_u64)
			.map(|status| status as u16)
	}

	/// Serialize to the stable `{ code, message, details? }` shape
	pub fn to_serialized(&self) -> SerializedCarrierError {
		SerializedCarrierError {
			code: self.code(),
			message: self.to_string(),
			details: self.details().cloned(),
		}
	}
}

impl From<RateValidationError> for CarrierError {
	fn from(error: RateValidationError) -> Self {
		let details = error
			.field()
			.map(|field| serde_json::json!({ "field": field }));
		Self::validation(error.to_string(), details)
	}
}

pub type CarrierResult<T> = Result<T, CarrierError>;
