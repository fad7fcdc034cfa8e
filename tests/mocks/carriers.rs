//! Mock carrier adapters with canned outcomes and call tracking

use async_trait::async_trait;
use rates_aggregator::{Carrier, CarrierError, CarrierResult, RateQuote, RateRequest};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Carrier returning a fixed outcome and counting invocations
#[derive(Debug)]
pub struct MockCarrier {
	id: String,
	outcome: CarrierResult<Vec<RateQuote>>,
	calls: AtomicUsize,
}

impl MockCarrier {
	/// A carrier answering every request with the given quote amounts
	pub fn with_quotes(id: &str, amounts: &[f64]) -> Arc<Self> {
		let quotes = amounts
			.iter()
			.map(|amount| RateQuote {
				carrier_id: id.to_string(),
				service_level: "standard".to_string(),
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

	/// A carrier failing every request with the given error
	#[allow(dead_code)]
	pub fn failing(id: &str, error: CarrierError) -> Arc<Self> {
		Arc::new(Self {
			id: id.to_string(),
			outcome: Err(error),
			calls: AtomicUsize::new(0),
		})
	}

	#[allow(dead_code)]
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl Carrier for MockCarrier {
	fn id(&self) -> &str {
		&self.id
	}

	async fn get_rates(&self, _request: &RateRequest) -> CarrierResult<Vec<RateQuote>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.outcome.clone()
	}
}
