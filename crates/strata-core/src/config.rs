//! YAML configuration
//!
//! ```yaml
//! scopes: [D, C, G, T, U]
//! grant_cache_capacity: 1000
//! definitions:
//!   - name: App.Ui.Theme
//!     default_value: light
//!   - name: Smtp.Host
//!     default_value: localhost
//!     inherited: false
//!     providers: [D, C, G]
//! values:
//!   Smtp.Host: mail.example.com
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use strata_types::prelude::*;
use strata_types::registry::SettingsRegistry;

use crate::chain::{DEFAULT_SCOPES, ScopeHierarchy};
use crate::permission::DEFAULT_GRANT_CACHE_CAPACITY;

fn default_scopes() -> Vec<ScopeId> {
	DEFAULT_SCOPES.iter().map(|s| ScopeId::from(*s)).collect()
}

fn default_grant_cache_capacity() -> usize {
	DEFAULT_GRANT_CACHE_CAPACITY
}

fn default_true() -> bool {
	true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionConfig {
	pub name: String,
	#[serde(default)]
	pub default_value: Option<String>,
	#[serde(default = "default_true")]
	pub inherited: bool,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub visible_to_clients: bool,
	#[serde(default)]
	pub providers: Vec<String>,
}

impl DefinitionConfig {
	pub fn to_definition(&self) -> StResult<SettingDefinition> {
		let mut builder = SettingDefinition::builder(self.name.clone())
			.inherited(self.inherited)
			.visible_to_clients(self.visible_to_clients)
			.providers(self.providers.iter().cloned());
		if let Some(default_value) = &self.default_value {
			builder = builder.default_value(default_value.clone());
		}
		if let Some(description) = &self.description {
			builder = builder.description(description.clone());
		}
		builder.build()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrataConfig {
	/// Scope levels, most general first
	#[serde(default = "default_scopes")]
	pub scopes: Vec<ScopeId>,

	#[serde(default)]
	pub definitions: Vec<DefinitionConfig>,

	/// Values served by the configuration provider
	#[serde(default)]
	pub values: HashMap<String, String>,

	#[serde(default = "default_grant_cache_capacity")]
	pub grant_cache_capacity: usize,
}

impl Default for StrataConfig {
	fn default() -> Self {
		Self {
			scopes: default_scopes(),
			definitions: Vec::new(),
			values: HashMap::new(),
			grant_cache_capacity: DEFAULT_GRANT_CACHE_CAPACITY,
		}
	}
}

impl StrataConfig {
	pub fn from_yaml_str(yaml: &str) -> StResult<Self> {
		let config: StrataConfig = serde_yaml::from_str(yaml)?;
		Ok(config)
	}

	pub async fn load(path: impl AsRef<Path>) -> StResult<Self> {
		let path = path.as_ref();
		info!("Loading configuration from {}", path.display());
		let yaml = tokio::fs::read_to_string(path).await?;
		Self::from_yaml_str(&yaml)
	}

	pub fn hierarchy(&self) -> StResult<ScopeHierarchy> {
		ScopeHierarchy::new(self.scopes.iter().cloned())
	}

	/// Register all configured definitions plus `extra` into a new registry
	pub fn to_registry(
		&self,
		extra: impl IntoIterator<Item = SettingDefinition>,
	) -> StResult<SettingsRegistry> {
		let mut registry = SettingsRegistry::new();
		for def in &self.definitions {
			registry.register(def.to_definition()?)?;
		}
		registry.register_all(extra)?;

		for name in self.values.keys() {
			if !registry.contains(name) {
				warn!("Configured value for undefined setting '{}' is ignored", name);
			}
		}

		Ok(registry)
	}
}


// vim: ts=4
