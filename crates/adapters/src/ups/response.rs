//! Response mapping: UPS rating response → normalized quotes
//!
//! Pure, lenient walk over the parsed JSON. Individual records that
//! fail to map are dropped; malformed top-level input yields an empty
//! sequence rather than an error.

use rates_types::RateQuote;
use serde_json::Value;

use super::CARRIER_ID;

const DEFAULT_CURRENCY: &str = "USD";

fn parse_amount(value: Option<&Value>) -> Option<f64> {
	let n = match value? {
		Value::Number(n) => n.as_f64()?,
		// String parsing accepts "NaN" and "inf"; only finite values
		// are meaningful amounts.
		Value::String(s) => s.trim().parse::<f64>().ok()?,
		_ => return None,
	};
	n.is_finite().then_some(n)
}

fn parse_transit_days(value: Option<&Value>) -> Option<u32> {
	let n = parse_amount(value)?;
	if n >= 1.0 && n.fract() == 0.0 {
		Some(n as u32)
	} else {
		None
	}
}

fn parse_currency(value: Option<&Value>) -> String {
	match value.and_then(Value::as_str) {
		Some(code) if code.len() >= 3 => code.chars().take(3).collect::<String>().to_uppercase(),
		_ => DEFAULT_CURRENCY.to_string(),
	}
}

fn parse_service_level(rated: &Value) -> Option<String> {
	let service = rated.get("Service")?;
	for field in ["Code", "Description"] {
		if let Some(text) = service.get(field).and_then(Value::as_str) {
			let trimmed = text.trim();
			if !trimmed.is_empty() {
				return Some(trimmed.to_string());
			}
		}
	}
	None
}

fn map_rated_shipment(rated: &Value) -> Option<RateQuote> {
	if !rated.is_object() {
		return None;
	}

	let charges = rated.get("TotalCharges");
	let amount = parse_amount(charges.and_then(|c| c.get("MonetaryValue")))?;
	if amount < 0.0 {
		return None;
	}

	let service_level = parse_service_level(rated)?;

	Some(RateQuote {
		carrier_id: CARRIER_ID.to_string(),
		service_level,
		amount,
		currency: parse_currency(charges.and_then(|c| c.get("CurrencyCode"))),
		estimated_transit_days: parse_transit_days(
			rated
				.get("TimeInTransit")
				.and_then(|t| t.get("BusinessTransitDays")),
		),
	})
}

/// Absent, single-record, and sequence shapes all normalize to a sequence
fn rated_shipments(body: &Value) -> Vec<&Value> {
	match body.get("RateResponse").and_then(|r| r.get("RatedShipment")) {
		Some(Value::Array(items)) => items.iter().collect(),
		Some(single @ Value::Object(_)) => vec![single],
		_ => Vec::new(),
	}
}

/// Map a parsed UPS rating response to zero or more quotes
pub fn map_rate_response(body: &Value) -> Vec<RateQuote> {
	if !body.is_object() {
		return Vec::new();
	}

	rated_shipments(body)
		.into_iter()
		.filter_map(map_rated_shipment)
		.collect()
}
