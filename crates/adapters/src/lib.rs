//! Rates Adapters
//!
//! Carrier-specific adapters for the rates aggregator, plus the HTTP
//! transport wrapper and OAuth token cache they are built on.

pub mod http;
pub mod oauth;
pub mod ups;

pub use http::{HttpClient, HttpClientConfig, HttpResponse, RequestBody};
pub use oauth::{UpsOAuthClient, UpsOAuthConfig};
pub use rates_types::{Carrier, CarrierError, CarrierResult};
pub use ups::{UpsCarrier, UpsCarrierConfig};
