//! UPS carrier adapter
//!
//! Validates the domain request, obtains an OAuth bearer token, calls
//! the UPS rating endpoint, and maps the response into normalized
//! quotes.

pub mod request;
pub mod response;

use async_trait::async_trait;
use rates_types::{Carrier, CarrierError, CarrierResult, RateQuote, RateRequest};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::http::{HttpClient, RequestBody};
use crate::oauth::UpsOAuthClient;

pub use request::{map_rate_request, UpsRatePayload};
pub use response::map_rate_response;

pub(crate) const CARRIER_ID: &str = "ups";
const DEFAULT_RATING_PATH: &str = "/rating/v2409/Shop";

/// UPS adapter configuration
#[derive(Debug)]
pub struct UpsCarrierConfig {
	pub oauth: Arc<UpsOAuthClient>,
	/// Rating endpoint path; defaults to the Shop endpoint
	pub rating_path: Option<String>,
}

/// UPS carrier adapter implementing the [`Carrier`] contract
#[derive(Debug)]
pub struct UpsCarrier {
	oauth: Arc<UpsOAuthClient>,
	http: Arc<HttpClient>,
	rating_path: String,
}

impl UpsCarrier {
	pub fn new(config: UpsCarrierConfig, http: Arc<HttpClient>) -> Self {
		Self {
			oauth: config.oauth,
			http,
			rating_path: config
				.rating_path
				.unwrap_or_else(|| DEFAULT_RATING_PATH.to_string()),
		}
	}
}

#[async_trait]
impl Carrier for UpsCarrier {
	fn id(&self) -> &str {
		CARRIER_ID
	}

	async fn get_rates(&self, request: &RateRequest) -> CarrierResult<Vec<RateQuote>> {
		let validated = request.validated()?;
		let payload = map_rate_request(&validated);

		let token = self.oauth.get_access_token().await?;
		let headers = HashMap::from([
			("Authorization".to_string(), format!("Bearer {}", token)),
			("Content-Type".to_string(), "application/json".to_string()),
		]);

		let body = serde_json::to_value(&payload).map_err(|e| {
			CarrierError::rate_fetch_failed(
				"Failed to serialize rating payload",
				Some(json!({ "cause": e.to_string() })),
			)
		})?;

		debug!(packages = validated.packages.len(), "requesting UPS rates");
		let response = self
			.http
			.post(&self.rating_path, Some(RequestBody::Json(body)), Some(&headers))
			.await?;

		// A transport success with an unparseable body is a distinct
		// failure from any transport-level error.
		let parsed: Value = response.json().map_err(|e| {
			CarrierError::rate_fetch_failed(
				"Failed to parse UPS rating response",
				Some(json!({ "cause": e.to_string() })),
			)
		})?;

		Ok(map_rate_response(&parsed))
	}
}
