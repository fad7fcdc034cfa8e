//! Configuration settings structures

use serde::{Deserialize, Serialize};

use crate::configurable_value::ConfigurableValue;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
	#[serde(default)]
	pub carriers: CarrierSettings,
	#[serde(default)]
	pub timeouts: TimeoutSettings,
	#[serde(default)]
	pub logging: LoggingSettings,
}

/// Per-carrier configuration; a carrier is only wired up when present
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CarrierSettings {
	pub ups: Option<UpsSettings>,
}

/// UPS carrier configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpsSettings {
	pub enabled: bool,
	pub client_id: ConfigurableValue,
	pub client_secret: ConfigurableValue,
	/// OAuth token endpoint (absolute URL)
	pub token_url: String,
	/// Base URL for the rating API
	pub base_url: String,
	/// Rating endpoint path; the adapter default applies when absent
	pub rating_path: Option<String>,
	/// Per-call timeout override in milliseconds
	pub timeout_ms: Option<u64>,
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TimeoutSettings {
	/// Default HTTP request timeout in milliseconds
	pub request_ms: u64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			carriers: CarrierSettings::default(),
			timeouts: TimeoutSettings::default(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self { request_ms: 30_000 }
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
		}
	}
}

impl Settings {
	/// Carriers that are configured and enabled
	pub fn enabled_ups(&self) -> Option<&UpsSettings> {
		self.carriers.ups.as_ref().filter(|ups| ups.enabled)
	}
}
