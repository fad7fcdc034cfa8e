//! Shared domain value types
//!
//! Addresses and packages are immutable values created at request
//! validation time and shared by every carrier adapter.

pub mod secret_string;

use serde::{Deserialize, Serialize};

pub use secret_string::SecretString;

/// A postal address as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
	pub address_line1: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub address_line2: Option<String>,
	pub city: String,
	pub state_or_province_code: String,
	pub postal_code: String,
	/// Two-letter ISO country code, normalized to upper-case during validation
	pub country_code: String,
}

/// Weight units accepted on rate requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
	Kg,
	Lb,
}

/// Dimension units accepted on rate requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
	Cm,
	In,
}

/// Package weight; value must be strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
	pub value: f64,
	pub unit: WeightUnit,
}

/// Optional package dimensions; all sides must be non-negative
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
	pub length: f64,
	pub width: f64,
	pub height: f64,
	pub unit: DimensionUnit,
}

/// A single parcel within a rate request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
	pub weight: Weight,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dimensions: Option<Dimensions>,
}

impl Address {
	/// Returns a copy with the country code normalized to upper-case
	pub fn normalized(&self) -> Self {
		Self {
			country_code: self.country_code.to_uppercase(),
			..self.clone()
		}
	}
}
