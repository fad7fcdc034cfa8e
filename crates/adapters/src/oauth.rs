//! UPS OAuth 2.0 client-credentials flow
//!
//! Token acquisition, caching, and refresh on expiry. Concurrent
//! callers that find no usable token all join a single in-flight fetch;
//! at most one token request is outstanding at any instant. The pending
//! fetch lives in a mutex-guarded slot as a shared future, so the
//! guarantee holds under real thread parallelism; the lock is never
//! held across an await point.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use futures::future::{BoxFuture, FutureExt, Shared};
use rates_types::{CarrierError, CarrierResult, SecretString};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::http::{HttpClient, RequestBody};

const REFRESH_BUFFER_SECS: i64 = 60;
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// Credentials and endpoint for the UPS token flow
#[derive(Debug, Clone)]
pub struct UpsOAuthConfig {
	pub client_id: String,
	pub client_secret: SecretString,
	/// Token endpoint; absolute URLs bypass the HTTP client's base URL
	pub token_url: String,
}

/// A bearer token with its absolute expiry
#[derive(Debug, Clone, PartialEq)]
pub struct CachedToken {
	pub access_token: String,
	pub expires_at: DateTime<Utc>,
}

impl CachedToken {
	/// Usable while `now < expires_at - refresh buffer`, so callers never
	/// receive a token expiring imminently
	pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
		now < self.expires_at - Duration::seconds(REFRESH_BUFFER_SECS)
	}
}

#[derive(Deserialize)]
struct TokenResponse {
	access_token: Option<String>,
	expires_in: Option<i64>,
}

type TokenFetch = Shared<BoxFuture<'static, CarrierResult<CachedToken>>>;

#[derive(Default)]
struct TokenState {
	cached: Option<CachedToken>,
	in_flight: Option<TokenFetch>,
	/// Bumped whenever a new fetch is installed, so a settling fetch only
	/// clears the slot it still owns
	generation: u64,
}

/// Cached OAuth client for one UPS credential set
///
/// One instance per credential set; its lifecycle is tied to the
/// adapter that owns it.
pub struct UpsOAuthClient {
	config: UpsOAuthConfig,
	http: Arc<HttpClient>,
	state: Arc<Mutex<TokenState>>,
}

impl UpsOAuthClient {
	pub fn new(config: UpsOAuthConfig, http: Arc<HttpClient>) -> Self {
		Self {
			config,
			http,
			state: Arc::new(Mutex::new(TokenState::default())),
		}
	}

	/// Returns a valid access token, fetching and caching as needed
	///
	/// Refreshes when the token is absent, expired, or within the
	/// 60-second refresh buffer.
	pub async fn get_access_token(&self) -> CarrierResult<String> {
		let fetch = {
			let mut state = self.state.lock().expect("token state lock poisoned");

			if let Some(cached) = &state.cached {
				if cached.is_valid_at(Utc::now()) {
					return Ok(cached.access_token.clone());
				}
			}

			match &state.in_flight {
				Some(fetch) => fetch.clone(),
				None => {
					state.generation += 1;
					debug!(generation = state.generation, "starting UPS token fetch");
					let fetch = Self::fetch_and_settle(
						Arc::clone(&self.http),
						self.config.clone(),
						Arc::clone(&self.state),
						state.generation,
					)
					.boxed()
					.shared();
					state.in_flight = Some(fetch.clone());
					fetch
				},
			}
		};

		fetch.await.map(|token| token.access_token)
	}

	/// Clears the cached token and the in-flight slot
	///
	/// An outstanding network call is not cancelled; if its result
	/// lands, it still populates the cache.
	pub fn clear_cache(&self) {
		let mut state = self.state.lock().expect("token state lock poisoned");
		state.cached = None;
		state.in_flight = None;
	}

	async fn fetch_and_settle(
		http: Arc<HttpClient>,
		config: UpsOAuthConfig,
		state: Arc<Mutex<TokenState>>,
		generation: u64,
	) -> CarrierResult<CachedToken> {
		let result = Self::request_token(&http, &config).await;

		let mut state = state.lock().expect("token state lock poisoned");
		if state.generation == generation {
			state.in_flight = None;
		}
		match result {
			Ok(token) => {
				state.cached = Some(token.clone());
				Ok(token)
			},
			Err(error) => Err(error),
		}
	}

	async fn request_token(http: &HttpClient, config: &UpsOAuthConfig) -> CarrierResult<CachedToken> {
		let credentials = BASE64.encode(format!(
			"{}:{}",
			config.client_id,
			config.client_secret.expose_secret()
		));
		let headers = HashMap::from([
			(
				"Content-Type".to_string(),
				"application/x-www-form-urlencoded".to_string(),
			),
			("Authorization".to_string(), format!("Basic {}", credentials)),
		]);

		let response = http
			.post(
				&config.token_url,
				Some(RequestBody::Raw("grant_type=client_credentials".to_string())),
				Some(&headers),
			)
			.await?;

		let token: TokenResponse = response.json().map_err(|e| {
			CarrierError::unavailable(
				"Invalid token response",
				Some(json!({ "statusCode": response.status, "cause": e.to_string() })),
			)
		})?;

		let access_token = token.access_token.ok_or_else(|| {
			CarrierError::unavailable(
				"Invalid token response: missing access_token",
				Some(json!({ "statusCode": response.status })),
			)
		})?;

		let expires_in = token.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
		debug!(expires_in, "UPS token fetched");

		Ok(CachedToken {
			access_token,
			expires_at: Utc::now() + Duration::seconds(expires_in),
		})
	}
}

// Manual impl because the in-flight future slot has no Debug.
impl fmt::Debug for UpsOAuthClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("UpsOAuthClient")
			.field("client_id", &self.config.client_id)
			.field("token_url", &self.config.token_url)
			.finish_non_exhaustive()
	}
}
