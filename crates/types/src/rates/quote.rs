//! Normalized rate quote model

use serde::{Deserialize, Serialize};

/// A single normalized quote produced from one carrier response record
///
/// Immutable; carries no identity beyond its fields. Invariants
/// (non-empty carrier and service level, non-negative amount, 3-letter
/// upper-case currency) are enforced by the carrier response mappers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateQuote {
	pub carrier_id: String,
	pub service_level: String,
	pub amount: f64,
	pub currency: String,
	/// Positive number of business transit days, when the carrier reports one
	#[serde(skip_serializing_if = "Option::is_none")]
	pub estimated_transit_days: Option<u32>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn transit_days_omitted_from_json_when_absent() {
		let quote = RateQuote {
			carrier_id: "ups".to_string(),
			service_level: "03".to_string(),
			amount: 15.99,
			currency: "USD".to_string(),
			estimated_transit_days: None,
		};

		let json = serde_json::to_value(&quote).unwrap();
		assert_eq!(json["carrierId"], "ups");
		assert_eq!(json["serviceLevel"], "03");
		assert!(json.get("estimatedTransitDays").is_none());
	}
}
