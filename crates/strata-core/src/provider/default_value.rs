//! Default value provider

use async_trait::async_trait;

use strata_types::prelude::*;
use strata_types::provider::SettingValueProvider;

use super::DEFAULT;

/// Serves `SettingDefinition::default_value`; read-only
#[derive(Debug)]
pub struct DefaultValueProvider {
	scope: ScopeId,
}

impl DefaultValueProvider {
	pub fn new() -> Self {
		Self { scope: ScopeId::from(DEFAULT) }
	}
}

impl Default for DefaultValueProvider {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl SettingValueProvider for DefaultValueProvider {
	fn name(&self) -> &str {
		DEFAULT
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
		Ok(setting.default_value.clone())
	}

	async fn set(
		&self,
		setting: &SettingDefinition,
		_value: &str,
		_key: Option<&str>,
	) -> StResult<()> {
		Err(Error::NotSupported(format!("Default value of '{}' cannot be changed", setting.name)))
	}

	async fn clear(&self, setting: &SettingDefinition, _key: Option<&str>) -> StResult<()> {
		Err(Error::NotSupported(format!("Default value of '{}' cannot be cleared", setting.name)))
	}
}


// vim: ts=4
