//! Request mapping: domain rate request → UPS wire payload
//!
//! Pure, total functions; no I/O.

use rates_types::{Address, DimensionUnit, Package, RateRequest, WeightUnit};
use serde::{Deserialize, Serialize};

const PACKAGING_TYPE_CODE: &str = "02";
const PACKAGING_TYPE_DESC: &str = "Package";
const PAYMENT_TYPE: &str = "01";
const WEIGHT_LBS: &str = "LBS";
const WEIGHT_KGS: &str = "KGS";
const DIM_IN: &str = "IN";
const DIM_CM: &str = "CM";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsCodeDescription {
	#[serde(rename = "Code")]
	pub code: String,
	#[serde(rename = "Description")]
	pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsAddress {
	#[serde(rename = "AddressLine")]
	pub address_line: Vec<String>,
	#[serde(rename = "City")]
	pub city: String,
	#[serde(rename = "StateProvinceCode")]
	pub state_province_code: String,
	#[serde(rename = "PostalCode")]
	pub postal_code: String,
	#[serde(rename = "CountryCode")]
	pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsParty {
	#[serde(rename = "Name")]
	pub name: String,
	#[serde(rename = "Address")]
	pub address: UpsAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsDimensions {
	#[serde(rename = "UnitOfMeasurement")]
	pub unit_of_measurement: UpsCodeDescription,
	#[serde(rename = "Length")]
	pub length: String,
	#[serde(rename = "Width")]
	pub width: String,
	#[serde(rename = "Height")]
	pub height: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsPackageWeight {
	#[serde(rename = "UnitOfMeasurement")]
	pub unit_of_measurement: UpsCodeDescription,
	#[serde(rename = "Weight")]
	pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsPackage {
	#[serde(rename = "PackagingType")]
	pub packaging_type: UpsCodeDescription,
	#[serde(rename = "Dimensions")]
	pub dimensions: UpsDimensions,
	#[serde(rename = "PackageWeight")]
	pub package_weight: UpsPackageWeight,
}

/// The wire format distinguishes one package from many structurally:
/// a single package is a scalar field, several are a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpsPackageField {
	Single(UpsPackage),
	Multiple(Vec<UpsPackage>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsBillShipper {
	#[serde(rename = "AccountNumber")]
	pub account_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsShipmentCharge {
	#[serde(rename = "Type")]
	pub charge_type: String,
	#[serde(rename = "BillShipper")]
	pub bill_shipper: UpsBillShipper,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsPaymentDetails {
	#[serde(rename = "ShipmentCharge")]
	pub shipment_charge: Vec<UpsShipmentCharge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsShipment {
	#[serde(rename = "Shipper")]
	pub shipper: UpsParty,
	#[serde(rename = "ShipTo")]
	pub ship_to: UpsParty,
	#[serde(rename = "ShipFrom")]
	pub ship_from: UpsParty,
	#[serde(rename = "PaymentDetails")]
	pub payment_details: UpsPaymentDetails,
	#[serde(rename = "Service", skip_serializing_if = "Option::is_none")]
	pub service: Option<UpsCodeDescription>,
	#[serde(rename = "NumOfPieces")]
	pub num_of_pieces: String,
	#[serde(rename = "Package")]
	pub package: UpsPackageField,
}

/// Empty transaction block; UPS accepts `{}` here
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpsTransactionInfo {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsRateRequest {
	#[serde(rename = "Request")]
	pub request: UpsTransactionInfo,
	#[serde(rename = "Shipment")]
	pub shipment: UpsShipment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsRatePayload {
	#[serde(rename = "RateRequest")]
	pub rate_request: UpsRateRequest,
}

fn map_address(address: &Address) -> UpsAddress {
	let mut lines = vec![address.address_line1.clone()];
	if let Some(line2) = &address.address_line2 {
		lines.push(line2.clone());
	}
	UpsAddress {
		address_line: lines,
		city: address.city.clone(),
		state_province_code: address.state_or_province_code.clone(),
		postal_code: address.postal_code.clone(),
		country_code: address.country_code.clone(),
	}
}

fn map_package(package: &Package) -> UpsPackage {
	let weight_code = match package.weight.unit {
		WeightUnit::Lb => WEIGHT_LBS,
		WeightUnit::Kg => WEIGHT_KGS,
	};

	let dimensions = match &package.dimensions {
		Some(dims) => {
			let (code, description) = match dims.unit {
				DimensionUnit::In => (DIM_IN, "Inches"),
				DimensionUnit::Cm => (DIM_CM, "Centimeters"),
			};
			UpsDimensions {
				unit_of_measurement: UpsCodeDescription {
					code: code.to_string(),
					description: description.to_string(),
				},
				length: dims.length.to_string(),
				width: dims.width.to_string(),
				height: dims.height.to_string(),
			}
		},
		// Carriers typically require a dimensions block; substitute a
		// neutral placeholder.
		None => UpsDimensions {
			unit_of_measurement: UpsCodeDescription {
				code: DIM_IN.to_string(),
				description: "Inches".to_string(),
			},
			length: "1".to_string(),
			width: "1".to_string(),
			height: "1".to_string(),
		},
	};

	UpsPackage {
		packaging_type: UpsCodeDescription {
			code: PACKAGING_TYPE_CODE.to_string(),
			description: PACKAGING_TYPE_DESC.to_string(),
		},
		dimensions,
		package_weight: UpsPackageWeight {
			unit_of_measurement: UpsCodeDescription {
				code: weight_code.to_string(),
				description: weight_code.to_string(),
			},
			weight: package.weight.value.to_string(),
		},
	}
}

/// Map a validated rate request onto the UPS rating payload
pub fn map_rate_request(request: &RateRequest) -> UpsRatePayload {
	let origin = map_address(&request.origin);
	let destination = map_address(&request.destination);

	let mut packages: Vec<UpsPackage> = request.packages.iter().map(map_package).collect();
	let package = if packages.len() == 1 {
		UpsPackageField::Single(packages.remove(0))
	} else {
		UpsPackageField::Multiple(packages)
	};

	let shipment = UpsShipment {
		shipper: UpsParty {
			name: request.origin.address_line1.clone(),
			address: origin.clone(),
		},
		ship_to: UpsParty {
			name: request.destination.address_line1.clone(),
			address: destination,
		},
		ship_from: UpsParty {
			name: request.origin.address_line1.clone(),
			address: origin,
		},
		payment_details: UpsPaymentDetails {
			shipment_charge: vec![UpsShipmentCharge {
				charge_type: PAYMENT_TYPE.to_string(),
				bill_shipper: UpsBillShipper {
					account_number: String::new(),
				},
			}],
		},
		service: request.service_level.as_ref().map(|level| UpsCodeDescription {
			code: level.clone(),
			description: level.clone(),
		}),
		num_of_pieces: request.packages.len().to_string(),
		package,
	};

	UpsRatePayload {
		rate_request: UpsRateRequest {
			request: UpsTransactionInfo::default(),
			shipment,
		},
	}
}
