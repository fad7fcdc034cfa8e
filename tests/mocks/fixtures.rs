//! Request and response fixtures shared across integration tests

use rates_aggregator::{
	Address, DimensionUnit, Dimensions, Package, RateRequest, Weight, WeightUnit,
};
use serde_json::{json, Value};

/// A valid New York to Los Angeles request with one five-pound package
pub fn rate_request() -> RateRequest {
	RateRequest {
		origin: Address {
			address_line1: "123 Main St".to_string(),
			address_line2: None,
			city: "New York".to_string(),
			state_or_province_code: "NY".to_string(),
			postal_code: "10001".to_string(),
			country_code: "US".to_string(),
		},
		destination: Address {
			address_line1: "456 Ocean Ave".to_string(),
			address_line2: None,
			city: "Los Angeles".to_string(),
			state_or_province_code: "CA".to_string(),
			postal_code: "90001".to_string(),
			country_code: "US".to_string(),
		},
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

/// A UPS Shop response offering Ground and Next Day Air
#[allow(dead_code)]
pub fn ups_rating_response() -> Value {
	json!({
		"RateResponse": {
			"RatedShipment": [
				{
					"Service": { "Code": "03", "Description": "Ground" },
					"TotalCharges": { "CurrencyCode": "USD", "MonetaryValue": "15.99" },
					"TimeInTransit": { "BusinessTransitDays": "3" }
				},
				{
					"Service": { "Code": "01", "Description": "Next Day Air" },
					"TotalCharges": { "CurrencyCode": "USD", "MonetaryValue": "42.50" },
					"TimeInTransit": { "BusinessTransitDays": "1" }
				}
			]
		}
	})
}
