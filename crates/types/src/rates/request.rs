//! Rate request model and validation

use serde::{Deserialize, Serialize};

use crate::models::{Address, Package};

use super::{RateValidationError, RateValidationResult};

/// Normalized rate request, insulated from any carrier's wire format
///
/// Created from untrusted caller input; must pass [`validated`]
/// before reaching any adapter.
///
/// [`validated`]: RateRequest::validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
	pub origin: Address,
	pub destination: Address,
	/// Ordered, non-empty package list
	pub packages: Vec<Package>,
	/// Optional carrier-specific service level code
	#[serde(skip_serializing_if = "Option::is_none")]
	pub service_level: Option<String>,
}

impl RateRequest {
	/// Validate the request and return a normalized copy
	///
	/// Applied validations:
	/// - **Addresses**: line 1, city, state/province and postal code must
	///   be non-empty; country code must be exactly 2 letters and is
	///   normalized to upper-case
	/// - **Packages**: at least one; weight strictly positive; dimensions,
	///   when present, non-negative on every side
	pub fn validated(&self) -> RateValidationResult<RateRequest> {
		validate_address(&self.origin, "origin")?;
		validate_address(&self.destination, "destination")?;

		if self.packages.is_empty() {
			return Err(RateValidationError::EmptyPackages);
		}
		for (index, package) in self.packages.iter().enumerate() {
			validate_package(package, index)?;
		}

		Ok(RateRequest {
			origin: self.origin.normalized(),
			destination: self.destination.normalized(),
			packages: self.packages.clone(),
			service_level: self.service_level.clone(),
		})
	}
}

fn validate_address(address: &Address, field: &str) -> RateValidationResult<()> {
	let required = [
		("addressLine1", &address.address_line1),
		("city", &address.city),
		("stateOrProvinceCode", &address.state_or_province_code),
		("postalCode", &address.postal_code),
	];
	for (name, value) in required {
		if value.trim().is_empty() {
			return Err(RateValidationError::MissingRequiredField {
				field: format!("{}.{}", field, name),
			});
		}
	}

	let code = &address.country_code;
	if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
		return Err(RateValidationError::InvalidCountryCode {
			field: format!("{}.countryCode", field),
		});
	}

	Ok(())
}

fn validate_package(package: &Package, index: usize) -> RateValidationResult<()> {
	if !(package.weight.value > 0.0) {
		return Err(RateValidationError::InvalidWeight {
			field: format!("packages[{}].weight", index),
			reason: "weight must be positive".to_string(),
		});
	}

	if let Some(dimensions) = &package.dimensions {
		let sides = [
			("length", dimensions.length),
			("width", dimensions.width),
			("height", dimensions.height),
		];
		for (name, value) in sides {
			if !(value >= 0.0) {
				return Err(RateValidationError::InvalidDimensions {
					field: format!("packages[{}].dimensions.{}", index, name),
					reason: format!("{} must be non-negative", name),
				});
			}
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::{DimensionUnit, Dimensions, Weight, WeightUnit};

	fn address() -> Address {
		Address {
			address_line1: "123 Main St".to_string(),
			address_line2: None,
			city: "New York".to_string(),
			state_or_province_code: "NY".to_string(),
			postal_code: "10001".to_string(),
			country_code: "us".to_string(),
		}
	}

	fn request() -> RateRequest {
		RateRequest {
			origin: address(),
			destination: address(),
			packages: vec![Package {
				weight: Weight {
					value: 5.0,
					unit: WeightUnit::Lb,
				},
				dimensions: Some(Dimensions {
					length: 10.0,
					width: 8.0,
					height: 6.0,
					unit: DimensionUnit::In,
				}),
			}],
			service_level: None,
		}
	}

	#[test]
	fn valid_request_normalizes_country_codes() {
		let validated = request().validated().unwrap();
		assert_eq!(validated.origin.country_code, "US");
		assert_eq!(validated.destination.country_code, "US");
	}

	#[test]
	fn empty_packages_rejected() {
		let mut req = request();
		req.packages.clear();
		assert_eq!(req.validated(), Err(RateValidationError::EmptyPackages));
	}

	#[test]
	fn blank_address_line_rejected() {
		let mut req = request();
		req.origin.address_line1 = "  ".to_string();
		let err = req.validated().unwrap_err();
		assert_eq!(err.field(), Some("origin.addressLine1"));
	}

	#[test]
	fn country_code_must_be_two_letters() {
		let mut req = request();
		req.destination.country_code = "USA".to_string();
		let err = req.validated().unwrap_err();
		assert_eq!(err.field(), Some("destination.countryCode"));

		req.destination.country_code = "U1".to_string();
		assert!(req.validated().is_err());
	}

	#[test]
	fn non_positive_weight_rejected() {
		let mut req = request();
		req.packages[0].weight.value = 0.0;
		let err = req.validated().unwrap_err();
		assert_eq!(err.field(), Some("packages[0].weight"));
	}

	#[test]
	fn negative_dimension_rejected() {
		let mut req = request();
		req.packages[0].dimensions = Some(Dimensions {
			length: -1.0,
			width: 8.0,
			height: 6.0,
			unit: DimensionUnit::In,
		});
		let err = req.validated().unwrap_err();
		assert_eq!(err.field(), Some("packages[0].dimensions.length"));
	}

	#[test]
	fn serde_uses_camel_case_field_names() {
		let json = serde_json::to_value(request()).unwrap();
		assert!(json["origin"]["addressLine1"].is_string());
		assert!(json["origin"]["stateOrProvinceCode"].is_string());
		assert!(json.get("serviceLevel").is_none());
	}
}
