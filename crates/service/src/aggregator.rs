//! Core aggregation service logic

use futures::future::join_all;
use rates_types::{
	Carrier, RateQuote, RateRequest, RateValidationResult, SerializedCarrierError,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One carrier's failure within an aggregated call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierFailure {
	pub carrier_id: String,
	pub error: SerializedCarrierError,
}

/// Aggregated quotes plus the per-carrier failure side-channel
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedRates {
	pub quotes: Vec<RateQuote>,
	pub failures: Vec<CarrierFailure>,
}

/// Service aggregating quotes from all configured carriers
///
/// Carriers are invoked concurrently; the service waits for every
/// carrier to settle. A failing carrier contributes nothing and never
/// fails the aggregate call. Results concatenate in carrier
/// configuration order with each carrier's own quote order preserved.
pub struct RateService {
	carriers: Vec<Arc<dyn Carrier>>,
}

impl RateService {
	pub fn new(carriers: Vec<Arc<dyn Carrier>>) -> Self {
		Self { carriers }
	}

	pub fn carrier_count(&self) -> usize {
		self.carriers.len()
	}

	/// Fetch rates from all configured carriers and merge the quotes
	///
	/// A request validation failure propagates to the caller; carrier
	/// failures are isolated per carrier.
	pub async fn get_rates(&self, request: &RateRequest) -> RateValidationResult<Vec<RateQuote>> {
		Ok(self.get_rates_detailed(request).await?.quotes)
	}

	/// Like [`get_rates`](Self::get_rates), additionally reporting which
	/// carriers failed and why
	pub async fn get_rates_detailed(
		&self,
		request: &RateRequest,
	) -> RateValidationResult<AggregatedRates> {
		let request = request.validated()?;

		if self.carriers.is_empty() {
			return Ok(AggregatedRates {
				quotes: Vec::new(),
				failures: Vec::new(),
			});
		}

		info!(carriers = self.carriers.len(), "fetching rates");

		let tasks = self.carriers.iter().map(|carrier| {
			let request = request.clone();
			let carrier = Arc::clone(carrier);
			async move {
				debug!(carrier_id = carrier.id(), "starting rate fetch");
				let result = carrier.get_rates(&request).await;
				(carrier.id().to_string(), result)
			}
		});

		let mut quotes = Vec::new();
		let mut failures = Vec::new();
		for (carrier_id, result) in join_all(tasks).await {
			match result {
				Ok(carrier_quotes) => {
					debug!(
						carrier_id = %carrier_id,
						count = carrier_quotes.len(),
						"carrier returned quotes"
					);
					quotes.extend(carrier_quotes);
				},
				Err(error) => {
					warn!(carrier_id = %carrier_id, %error, "carrier failed, excluding from results");
					failures.push(CarrierFailure {
						carrier_id,
						error: error.to_serialized(),
					});
				},
			}
		}

		info!(
			quotes = quotes.len(),
			failures = failures.len(),
			"rate aggregation completed"
		);

		Ok(AggregatedRates { quotes, failures })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use rates_types::{
		Address, Carrier, CarrierError, CarrierResult, Package, RateQuote, RateRequest,
		Weight, WeightUnit,
	};
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[derive(Debug)]
	struct StubCarrier {
		id: String,
		outcome: CarrierResult<Vec<RateQuote>>,
		calls: AtomicUsize,
	}

	impl StubCarrier {
		fn with_quotes(id: &str, amounts: &[f64]) -> Arc<Self> {
			let quotes = amounts
				.iter()
				.map(|amount| RateQuote {
					carrier_id: id.to_string(),
					service_level: "std".to_string(),
					amount: *amount,
					currency: "USD".to_string(),
					estimated_transit_days: None,
				})
				.collect();
			Arc::new(Self {
				id: id.to_string(),
				outcome: Ok(quotes),
				calls: AtomicUsize::new(0),
			})
		}

		fn failing(id: &str, error: CarrierError) -> Arc<Self> {
			Arc::new(Self {
				id: id.to_string(),
				outcome: Err(error),
				calls: AtomicUsize::new(0),
			})
		}
	}

	#[async_trait]
	impl Carrier for StubCarrier {
		fn id(&self) -> &str {
			&self.id
		}

		async fn get_rates(&self, _request: &RateRequest) -> CarrierResult<Vec<RateQuote>> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			self.outcome.clone()
		}
	}

	fn request() -> RateRequest {
		let address = Address {
			address_line1: "123 Main St".to_string(),
			address_line2: None,
			city: "New York".to_string(),
			state_or_province_code: "NY".to_string(),
			postal_code: "10001".to_string(),
			country_code: "US".to_string(),
		};
		RateRequest {
			origin: address.clone(),
			destination: address,
			packages: vec![Package {
				weight: Weight {
					value: 5.0,
					unit: WeightUnit::Lb,
				},
				dimensions: None,
			}],
			service_level: None,
		}
	}

	#[tokio::test]
	async fn zero_carriers_yield_empty_result() {
		let service = RateService::new(Vec::new());
		let quotes = service.get_rates(&request()).await.unwrap();
		assert!(quotes.is_empty());
	}

	#[tokio::test]
	async fn failing_carrier_is_isolated_and_order_preserved() {
		let first = StubCarrier::with_quotes("first", &[10.0, 20.0]);
		let broken = StubCarrier::failing(
			"broken",
			CarrierError::unavailable("Carrier returned server error: 503", None),
		);
		let last = StubCarrier::with_quotes("last", &[30.0]);

		let service = RateService::new(vec![
			first.clone(),
			broken.clone(),
			last.clone(),
		]);

		let result = service.get_rates_detailed(&request()).await.unwrap();
		let amounts: Vec<f64> = result.quotes.iter().map(|q| q.amount).collect();
		assert_eq!(amounts, vec![10.0, 20.0, 30.0]);

		assert_eq!(result.failures.len(), 1);
		assert_eq!(result.failures[0].carrier_id, "broken");
		assert_eq!(broken.calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn all_carriers_failing_still_succeeds() {
		let service = RateService::new(vec![
			StubCarrier::failing("a", CarrierError::timeout("Request timed out", None)) as Arc<dyn Carrier>,
			StubCarrier::failing("b", CarrierError::unavailable("down", None)),
		]);

		let result = service.get_rates_detailed(&request()).await.unwrap();
		assert!(result.quotes.is_empty());
		assert_eq!(result.failures.len(), 2);
	}

	#[tokio::test]
	async fn invalid_request_propagates_without_calling_carriers() {
		let carrier = StubCarrier::with_quotes("only", &[10.0]);
		let service = RateService::new(vec![carrier.clone()]);

		let mut bad = request();
		bad.packages.clear();

		assert!(service.get_rates(&bad).await.is_err());
		assert_eq!(carrier.calls.load(Ordering::SeqCst), 0);
	}
}
