//! Rates Aggregator Library
//!
//! Aggregates shipping rates across carrier APIs: each carrier adapter
//! normalizes its provider's request and response shapes, and the rate
//! service fans a request out to every configured carrier concurrently
//! and merges the quotes.

use std::sync::Arc;

use rates_adapters::{HttpClient, HttpClientConfig, UpsCarrier, UpsCarrierConfig, UpsOAuthClient, UpsOAuthConfig};
use rates_config::{ConfigurableValueError, UpsSettings};
use tracing::info;

// Core domain types
pub use rates_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	Address,
	// Carrier contract and errors
	Carrier,
	CarrierError,
	CarrierErrorCode,
	CarrierResult,
	DimensionUnit,
	Dimensions,
	Package,
	// Primary domain entities
	RateQuote,
	RateRequest,
	RateValidationError,
	SecretString,
	SerializedCarrierError,
	Weight,
	WeightUnit,
};

// Service layer
pub use rates_service::{AggregatedRates, CarrierFailure, RateService};

// Adapters
pub use rates_adapters::{HttpResponse, RequestBody};

// Config
pub use rates_config::{load_config, ConfigurableValue, LogFormat, Settings};

// Module aliases for advanced usage
pub mod models {
	pub use rates_types::*;
}

pub mod config {
	pub use rates_config::*;
}

pub mod adapters {
	pub use rates_adapters::*;
}

pub mod service {
	pub use rates_service::*;
}

/// Errors raised while assembling the aggregator from settings
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
	#[error("Failed to resolve carrier credentials: {0}")]
	Credentials(#[from] ConfigurableValueError),
}

/// Builder assembling a [`RateService`] from settings and custom carriers
///
/// Carriers register in call order; aggregated quotes concatenate in
/// that same order.
pub struct AggregatorBuilder {
	settings: Settings,
	carriers: Vec<Arc<dyn Carrier>>,
}

impl Default for AggregatorBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl AggregatorBuilder {
	pub fn new() -> Self {
		Self {
			settings: Settings::default(),
			carriers: Vec::new(),
		}
	}

	/// Use the provided settings instead of defaults
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	/// Register a custom carrier adapter
	pub fn with_carrier(mut self, carrier: Arc<dyn Carrier>) -> Self {
		self.carriers.push(carrier);
		self
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Assemble the rate service
	///
	/// Carriers enabled in settings are wired up first, followed by any
	/// carriers registered via [`with_carrier`](Self::with_carrier).
	pub fn build(self) -> Result<RateService, BuildError> {
		let mut carriers: Vec<Arc<dyn Carrier>> = Vec::new();

		if let Some(ups) = self.settings.enabled_ups() {
			carriers.push(build_ups_carrier(ups, self.settings.timeouts.request_ms)?);
		}
		carriers.extend(self.carriers);

		info!(carriers = carriers.len(), "rate service assembled");
		Ok(RateService::new(carriers))
	}
}

fn build_ups_carrier(
	settings: &UpsSettings,
	default_timeout_ms: u64,
) -> Result<Arc<dyn Carrier>, BuildError> {
	let http = Arc::new(HttpClient::new(HttpClientConfig {
		base_url: settings.base_url.clone(),
		timeout_ms: Some(settings.timeout_ms.unwrap_or(default_timeout_ms)),
		headers: None,
	}));

	let oauth = Arc::new(UpsOAuthClient::new(
		UpsOAuthConfig {
			client_id: settings.client_id.resolve()?,
			client_secret: settings.client_secret.resolve_secret()?,
			token_url: settings.token_url.clone(),
		},
		Arc::clone(&http),
	));

	Ok(Arc::new(UpsCarrier::new(
		UpsCarrierConfig {
			oauth,
			rating_path: settings.rating_path.clone(),
		},
		http,
	)))
}

/// Initialize tracing from logging settings
///
/// `RUST_LOG` takes precedence over the configured level when set.
/// Loads a `.env` file first so env-referenced configuration resolves.
pub fn init_tracing(settings: &Settings) {
	dotenvy::dotenv().ok();

	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

	match settings.logging.format {
		LogFormat::Json => {
			tracing_subscriber::fmt().json().with_env_filter(env_filter).init();
		},
		LogFormat::Pretty => {
			tracing_subscriber::fmt().pretty().with_env_filter(env_filter).init();
		},
		LogFormat::Compact => {
			tracing_subscriber::fmt().compact().with_env_filter(env_filter).init();
		},
	}

	info!(
		level = %settings.logging.level,
		format = ?settings.logging.format,
		"logging configuration applied"
	);
}
