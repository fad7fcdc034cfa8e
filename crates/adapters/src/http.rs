//! HTTP transport wrapper for carrier calls
//!
//! Issues one outbound call per invocation with a per-call timeout and
//! maps network failures and non-2xx statuses into the carrier error
//! taxonomy. Retries, if any, are the caller's responsibility; none are
//! performed here.

use rates_types::{CarrierError, CarrierResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
	/// Base URL that relative paths resolve against
	pub base_url: String,
	/// Default per-call timeout in milliseconds (30s when absent)
	pub timeout_ms: Option<u64>,
	/// Default headers; per-call headers win on conflict
	pub headers: Option<HashMap<String, String>>,
}

/// Request body accepted by the wrapper
#[derive(Debug, Clone)]
pub enum RequestBody {
	/// Raw string sent as-is (e.g. form-encoded grant bodies)
	Raw(String),
	/// Structured body serialized to its JSON wire form
	Json(Value),
}

/// Response surface exposed to adapters: status plus body text
#[derive(Debug, Clone)]
pub struct HttpResponse {
	pub status: u16,
	pub body: String,
}

impl HttpResponse {
	/// Parse the body as JSON into the requested type
	pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
		serde_json::from_str(&self.body)
	}
}

/// Reusable HTTP client with base URL, default headers, and timeout
#[derive(Debug)]
pub struct HttpClient {
	base_url: String,
	default_timeout: Duration,
	default_headers: HashMap<String, String>,
	client: reqwest::Client,
}

impl HttpClient {
	pub fn new(config: HttpClientConfig) -> Self {
		Self {
			base_url: config.base_url.trim_end_matches('/').to_string(),
			default_timeout: Duration::from_millis(config.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)),
			default_headers: config.headers.unwrap_or_default(),
			client: reqwest::Client::new(),
		}
	}

	/// Issue a single outbound request
	///
	/// Relative paths resolve against the configured base URL; absolute
	/// URLs pass through unchanged. A deadline hit surfaces as
	/// [`CarrierError::Timeout`]; other network failures as `Unavailable`;
	/// non-2xx statuses per the taxonomy (4xx validation, 5xx
	/// unavailable, anything else a rate-fetch failure).
	pub async fn request(
		&self,
		method: Method,
		path_or_url: &str,
		body: Option<RequestBody>,
		headers: Option<&HashMap<String, String>>,
		timeout_ms: Option<u64>,
	) -> CarrierResult<HttpResponse> {
		let url = self.resolve_url(path_or_url);
		let header_map = self.merge_headers(headers)?;
		let timeout = timeout_ms
			.map(Duration::from_millis)
			.unwrap_or(self.default_timeout);

		debug!(%method, %url, "issuing carrier HTTP request");

		let mut builder = self
			.client
			.request(method, &url)
			.headers(header_map)
			.timeout(timeout);

		if let Some(body) = body {
			let raw = match body {
				RequestBody::Raw(raw) => raw,
				RequestBody::Json(value) => serde_json::to_string(&value).map_err(|e| {
					CarrierError::rate_fetch_failed(
						"Failed to serialize request body",
						Some(json!({ "cause": e.to_string() })),
					)
				})?,
			};
			builder = builder.body(raw);
		}

		let response = builder.send().await.map_err(map_send_error)?;

		let status = response.status();
		if status.is_success() {
			let body = response.text().await.map_err(|e| {
				CarrierError::unavailable(
					"Network request failed",
					Some(json!({ "cause": e.to_string() })),
				)
			})?;
			return Ok(HttpResponse {
				status: status.as_u16(),
				body,
			});
		}

		// Best-effort diagnostics only; body read failures are swallowed.
		let body_text = response.text().await.unwrap_or_default();
		Err(error_for_status(status, &body_text))
	}

	pub async fn get(
		&self,
		path_or_url: &str,
		headers: Option<&HashMap<String, String>>,
	) -> CarrierResult<HttpResponse> {
		self.request(Method::GET, path_or_url, None, headers, None)
			.await
	}

	pub async fn post(
		&self,
		path_or_url: &str,
		body: Option<RequestBody>,
		headers: Option<&HashMap<String, String>>,
	) -> CarrierResult<HttpResponse> {
		self.request(Method::POST, path_or_url, body, headers, None)
			.await
	}

	fn resolve_url(&self, path_or_url: &str) -> String {
		if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
			return path_or_url.to_string();
		}
		format!("{}/{}", self.base_url, path_or_url.trim_start_matches('/'))
	}

	fn merge_headers(&self, request_headers: Option<&HashMap<String, String>>) -> CarrierResult<HeaderMap> {
		let mut merged = self.default_headers.clone();
		if let Some(headers) = request_headers {
			for (key, value) in headers {
				merged.insert(key.clone(), value.clone());
			}
		}

		let mut header_map = HeaderMap::new();
		for (key, value) in &merged {
			let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
				CarrierError::validation(
					format!("Invalid header name: {}", key),
					None,
				)
			})?;
			let value = HeaderValue::from_str(value).map_err(|_| {
				CarrierError::validation(
					format!("Invalid header value for: {}", key),
					None,
				)
			})?;
			header_map.insert(name, value);
		}
		Ok(header_map)
	}
}

fn map_send_error(error: reqwest::Error) -> CarrierError {
	if error.is_timeout() {
		return CarrierError::timeout(
			"Request timed out",
			Some(json!({ "cause": error.to_string() })),
		);
	}
	CarrierError::unavailable(
		"Network request failed",
		Some(json!({ "cause": error.to_string() })),
	)
}

fn error_for_status(status: StatusCode, body_text: &str) -> CarrierError {
	let mut details = json!({
		"statusCode": status.as_u16(),
		"statusText": status.canonical_reason().unwrap_or(""),
	});
	if !body_text.is_empty() {
		details["responseBody"] = serde_json::from_str(body_text)
			.unwrap_or_else(|_| Value::String(body_text.to_string()));
	}

	if status.is_client_error() {
		return CarrierError::validation(
			format!("Request failed with status {}", status.as_u16()),
			Some(details),
		);
	}
	if status.is_server_error() {
		return CarrierError::unavailable(
			format!("Carrier returned server error: {}", status.as_u16()),
			Some(details),
		);
	}
	CarrierError::rate_fetch_failed(
		format!("Request failed with status {}", status.as_u16()),
		Some(details),
	)
}
