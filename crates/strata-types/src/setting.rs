//! Setting definitions and resolved values
//!
//! A definition is created while the registry is being assembled and is immutable
//! afterwards. Only the name and the inheritance flag take part in resolution; the
//! remaining metadata is served to providers and callers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, StResult};

/// Setting definition - metadata for one named value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingDefinition {
	/// Unique name (e.g. "App.Ui.Theme")
	pub name: String,

	/// Value served by the default-value provider
	pub default_value: Option<String>,

	/// Whether resolution may fall back to more general scopes
	pub is_inherited: bool,

	pub description: Option<String>,

	/// Whether the value may be exposed to client applications
	pub is_visible_to_clients: bool,

	/// Provider names allowed to hold a value for this setting; empty allows all
	pub providers: Vec<String>,
}

impl SettingDefinition {
	/// Create a builder for constructing a SettingDefinition
	pub fn builder(name: impl Into<String>) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder::new(name)
	}

	/// Check whether the provider with the given name may hold a value
	pub fn allows_provider(&self, provider_name: &str) -> bool {
		self.providers.is_empty() || self.providers.iter().any(|p| p == provider_name)
	}
}

/// Builder for SettingDefinition with fluent API
#[derive(Debug)]
pub struct SettingDefinitionBuilder {
	name: String,
	default_value: Option<String>,
	is_inherited: bool,
	description: Option<String>,
	is_visible_to_clients: bool,
	providers: Vec<String>,
}

impl SettingDefinitionBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			default_value: None,
			is_inherited: true,
			description: None,
			is_visible_to_clients: false,
			providers: Vec::new(),
		}
	}

	pub fn default_value(mut self, value: impl Into<String>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	/// Set the inheritance flag (defaults to true)
	pub fn inherited(mut self, is_inherited: bool) -> Self {
		self.is_inherited = is_inherited;
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn visible_to_clients(mut self, visible: bool) -> Self {
		self.is_visible_to_clients = visible;
		self
	}

	/// Restrict the providers that may hold a value for this setting
	pub fn providers<I, S>(mut self, providers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.providers = providers.into_iter().map(Into::into).collect();
		self
	}

	pub fn build(self) -> StResult<SettingDefinition> {
		Error::check_not_empty(&self.name, "setting name")?;
		if self.providers.iter().any(String::is_empty) {
			return Err(Error::ConfigError(format!(
				"Setting '{}' lists an empty provider name",
				self.name
			)));
		}

		Ok(SettingDefinition {
			name: self.name,
			default_value: self.default_value,
			is_inherited: self.is_inherited,
			description: self.description,
			is_visible_to_clients: self.is_visible_to_clients,
			providers: self.providers,
		})
	}
}

/// Resolved setting value (output record, never persisted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingValue {
	pub name: String,
	pub value: Option<String>,
}

impl SettingValue {
	pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
		Self { name: name.into(), value }
	}
}


// vim: ts=4
