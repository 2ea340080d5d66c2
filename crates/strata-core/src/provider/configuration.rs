//! Configuration value provider

use async_trait::async_trait;
use std::collections::HashMap;

use strata_types::prelude::*;
use strata_types::provider::SettingValueProvider;

use super::CONFIGURATION;

/// Serves values loaded from the configuration file; read-only
#[derive(Debug)]
pub struct ConfigurationValueProvider {
	scope: ScopeId,
	values: HashMap<String, String>,
}

impl ConfigurationValueProvider {
	pub fn new(values: HashMap<String, String>) -> Self {
		Self { scope: ScopeId::from(CONFIGURATION), values }
	}
}

#[async_trait]
impl SettingValueProvider for ConfigurationValueProvider {
	fn name(&self) -> &str {
		CONFIGURATION
	}

	fn scope(&self) -> &ScopeId {
		&self.scope
	}

	async fn get_or_null(
		&self,
		setting: &SettingDefinition,
		_key: Option<&str>,
	) -> StResult<Option<String>> {
		if !setting.allows_provider(self.name()) {
			return Ok(None);
		}
		Ok(self.values.get(&setting.name).cloned())
	}

	async fn set(
		&self,
		setting: &SettingDefinition,
		_value: &str,
		_key: Option<&str>,
	) -> StResult<()> {
		Err(Error::NotSupported(format!(
			"Configured value of '{}' is read-only",
			setting.name
		)))
	}

	async fn clear(&self, setting: &SettingDefinition, _key: Option<&str>) -> StResult<()> {
		Err(Error::NotSupported(format!(
			"Configured value of '{}' is read-only",
			setting.name
		)))
	}
}


// vim: ts=4
