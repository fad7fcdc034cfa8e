//! Core carrier trait for adapter implementations

use async_trait::async_trait;
use std::fmt::Debug;

use super::CarrierResult;
use crate::rates::{RateQuote, RateRequest};

/// Capability interface for one shipping carrier
///
/// Any implementation may be registered with the aggregation service.
/// Implementations validate the request, talk to their carrier's API,
/// and return normalized quotes in the carrier's own response order.
#[async_trait]
pub trait Carrier: Send + Sync + Debug {
	/// Stable carrier identifier (e.g. "ups")
	fn id(&self) -> &str;

	/// Fetch shipping rates for the given request
	///
	/// Returns quotes in the carrier's response order; an empty list when
	/// the carrier has no offers for the shipment.
	async fn get_rates(&self, request: &RateRequest) -> CarrierResult<Vec<RateQuote>>;
}
