//! Rates Configuration
//!
//! Configuration structures and loading for the rates aggregator.

pub mod configurable_value;
pub mod loader;
pub mod settings;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::load_config;
pub use settings::{
	CarrierSettings, LogFormat, LoggingSettings, Settings, TimeoutSettings, UpsSettings,
};
