//! Stub UPS endpoints for integration tests
//!
//! Serves the OAuth token and rating endpoints on an ephemeral local
//! port, with configurable behavior and request capture.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

const TOKEN_PATH: &str = "/security/v1/oauth/token";
const RATING_PATH: &str = "/rating/v2409/Shop";

/// How the stub token endpoint answers
#[derive(Debug, Clone)]
pub enum TokenMode {
	/// Issue `token-<n>` where `<n>` is the hit count; `expires_in` is
	/// omitted from the body when `None`
	Issue { expires_in: Option<i64> },
	/// 200 with a body that carries no access token
	MissingAccessToken,
	/// Plain 500
	ServerError,
}

struct StubState {
	token_mode: TokenMode,
	rating_status: StatusCode,
	rating_response: Value,
	token_hits: AtomicUsize,
	rating_hits: AtomicUsize,
	last_rating_body: Mutex<Option<Value>>,
}

/// A running stub server bound to an ephemeral local port
pub struct UpsStub {
	pub base_url: String,
	state: Arc<StubState>,
	handle: JoinHandle<()>,
}

impl UpsStub {
	pub async fn spawn(token_mode: TokenMode, rating_response: Value) -> Self {
		Self::spawn_with_rating_status(token_mode, StatusCode::OK, rating_response).await
	}

	pub async fn spawn_with_rating_status(
		token_mode: TokenMode,
		rating_status: StatusCode,
		rating_response: Value,
	) -> Self {
		let state = Arc::new(StubState {
			token_mode,
			rating_status,
			rating_response,
			token_hits: AtomicUsize::new(0),
			rating_hits: AtomicUsize::new(0),
			last_rating_body: Mutex::new(None),
		});

		let app = Router::new()
			.route(TOKEN_PATH, post(token_handler))
			.route(RATING_PATH, post(rating_handler))
			.with_state(Arc::clone(&state));

		let spawned = spawn_app(app).await;
		Self {
			base_url: spawned.base_url,
			state,
			handle: spawned.handle,
		}
	}

	pub fn token_url(&self) -> String {
		format!("{}{}", self.base_url, TOKEN_PATH)
	}

	pub fn token_hits(&self) -> usize {
		self.state.token_hits.load(Ordering::SeqCst)
	}

	#[allow(dead_code)]
	pub fn rating_hits(&self) -> usize {
		self.state.rating_hits.load(Ordering::SeqCst)
	}

	#[allow(dead_code)]
	pub fn last_rating_body(&self) -> Option<Value> {
		self.state
			.last_rating_body
			.lock()
			.expect("rating body lock poisoned")
			.clone()
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}

async fn token_handler(State(state): State<Arc<StubState>>) -> (StatusCode, Json<Value>) {
	let hit = state.token_hits.fetch_add(1, Ordering::SeqCst) + 1;
	match &state.token_mode {
		TokenMode::Issue { expires_in } => {
			let mut body = json!({
				"access_token": format!("token-{}", hit),
				"token_type": "Bearer"
			});
			if let Some(expires_in) = expires_in {
				body["expires_in"] = json!(expires_in);
			}
			(StatusCode::OK, Json(body))
		},
		TokenMode::MissingAccessToken => {
			(StatusCode::OK, Json(json!({ "token_type": "Bearer" })))
		},
		TokenMode::ServerError => (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(json!({ "error": "server_error" })),
		),
	}
}

async fn rating_handler(
	State(state): State<Arc<StubState>>,
	Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
	state.rating_hits.fetch_add(1, Ordering::SeqCst);
	*state
		.last_rating_body
		.lock()
		.expect("rating body lock poisoned") = Some(body);
	(state.rating_status, Json(state.rating_response.clone()))
}

/// A spawned test application with its base URL
pub struct SpawnedApp {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

/// Serve any router on an ephemeral local port
pub async fn spawn_app(app: Router) -> SpawnedApp {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
		.await
		.expect("bind test port");
	let addr = listener.local_addr().expect("local addr");
	let base_url = format!("http://{}", addr);

	let handle = tokio::spawn(async move {
		let _ = axum::serve(listener, app).await;
	});

	// Give the server time to start
	tokio::time::sleep(std::time::Duration::from_millis(10)).await;

	SpawnedApp { base_url, handle }
}
