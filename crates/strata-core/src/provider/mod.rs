//! Built-in setting value providers
//!
//! - [`DefaultValueProvider`] serves the definition's default value
//! - [`ConfigurationValueProvider`] serves values from the configuration file
//! - [`StoreValueProvider`] reads and writes a [`SettingStore`](strata_types::store_adapter::SettingStore)
//!   for the global, tenant and user scopes

pub mod configuration;
pub mod default_value;
pub mod store;

pub use configuration::ConfigurationValueProvider;
pub use default_value::DefaultValueProvider;
pub use store::{CurrentKeyFn, StoreValueProvider};

pub const DEFAULT: &str = "D";
pub const CONFIGURATION: &str = "C";
pub const GLOBAL: &str = "G";
pub const TENANT: &str = "T";
pub const USER: &str = "U";

// vim: ts=4
