//! Wiring of configuration, adapters and providers

use std::sync::Arc;

use strata_types::prelude::*;
use strata_types::store_adapter::{GrantCache, GrantRepository, SettingStore};

use crate::chain::{ProviderChain, ProviderRef};
use crate::config::StrataConfig;
use crate::manager::SettingManager;
use crate::permission::{LruGrantCache, PermissionStore};
use crate::provider::{
	ConfigurationValueProvider, CurrentKeyFn, DefaultValueProvider, StoreValueProvider,
};

/// Assembled services
#[derive(Debug, Clone)]
pub struct Strata {
	pub settings: Arc<SettingManager>,
	pub permissions: Option<Arc<PermissionStore>>,
}

pub struct Adapters {
	pub setting_store: Option<Arc<dyn SettingStore>>,
	pub grant_repository: Option<Arc<dyn GrantRepository>>,
	pub grant_cache: Option<Arc<dyn GrantCache>>,
}

pub struct StrataBuilder {
	config: StrataConfig,
	definitions: Vec<SettingDefinition>,
	providers: Option<Vec<ProviderRef>>,
	current_tenant: Option<CurrentKeyFn>,
	current_user: Option<CurrentKeyFn>,
	adapters: Adapters,
}

impl StrataBuilder {
	pub fn new() -> Self {
		StrataBuilder {
			config: StrataConfig::default(),
			definitions: Vec::new(),
			providers: None,
			current_tenant: None,
			current_user: None,
			adapters: Adapters { setting_store: None, grant_repository: None, grant_cache: None },
		}
	}

	// Opts
	pub fn config(&mut self, config: StrataConfig) -> &mut Self { self.config = config; self }
	pub fn definition(&mut self, definition: SettingDefinition) -> &mut Self { self.definitions.push(definition); self }
	pub fn current_tenant(&mut self, current: CurrentKeyFn) -> &mut Self { self.current_tenant = Some(current); self }
	pub fn current_user(&mut self, current: CurrentKeyFn) -> &mut Self { self.current_user = Some(current); self }

	/// Replace the standard D > C > G > T > U chain with custom providers
	pub fn providers(&mut self, providers: impl IntoIterator<Item = ProviderRef>) -> &mut Self {
		self.providers = Some(providers.into_iter().collect());
		self
	}

	// Adapters
	pub fn setting_store(&mut self, store: Arc<dyn SettingStore>) -> &mut Self { self.adapters.setting_store = Some(store); self }
	pub fn grant_repository(&mut self, repository: Arc<dyn GrantRepository>) -> &mut Self { self.adapters.grant_repository = Some(repository); self }
	pub fn grant_cache(&mut self, cache: Arc<dyn GrantCache>) -> &mut Self { self.adapters.grant_cache = Some(cache); self }

	/// Build the services; the provider chain itself is built on first use
	pub fn build(self) -> StResult<Strata> {
		let registry = Arc::new(self.config.to_registry(self.definitions)?.freeze());
		let hierarchy = self.config.hierarchy()?;

		let providers = match self.providers {
			Some(providers) => providers,
			None => {
				let store = self.adapters.setting_store.clone().ok_or_else(|| {
					Error::ConfigError("No setting store adapter configured".into())
				})?;
				standard_providers(
					&store,
					self.config.values.clone(),
					self.current_tenant,
					self.current_user,
				)
			}
		};

		let settings = SettingManager::with_factory(
			registry,
			Box::new(move || {
				let mut builder = ProviderChain::builder(hierarchy.clone());
				builder.add_all(providers.iter().cloned());
				builder.build()
			}),
		);

		let permissions = match self.adapters.grant_repository {
			Some(repository) => {
				let cache = self.adapters.grant_cache.unwrap_or_else(|| {
					Arc::new(LruGrantCache::new(self.config.grant_cache_capacity))
				});
				Some(Arc::new(PermissionStore::new(repository, cache)))
			}
			None => None,
		};

		info!("Strata initialized");
		Ok(Strata { settings: Arc::new(settings), permissions })
	}
}

impl Default for StrataBuilder {
	fn default() -> Self { Self::new() }
}

/// Default > Configuration > Global > Tenant > User
fn standard_providers(
	store: &Arc<dyn SettingStore>,
	values: std::collections::HashMap<String, String>,
	current_tenant: Option<CurrentKeyFn>,
	current_user: Option<CurrentKeyFn>,
) -> Vec<ProviderRef> {
	let mut tenant = StoreValueProvider::tenant(store.clone());
	if let Some(current) = current_tenant {
		tenant = tenant.with_current_key(current);
	}
	let mut user = StoreValueProvider::user(store.clone());
	if let Some(current) = current_user {
		user = user.with_current_key(current);
	}

	vec![
		Arc::new(DefaultValueProvider::new()) as ProviderRef,
		Arc::new(ConfigurationValueProvider::new(values)) as ProviderRef,
		Arc::new(StoreValueProvider::global(store.clone())) as ProviderRef,
		Arc::new(tenant) as ProviderRef,
		Arc::new(user) as ProviderRef,
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use strata_store_adapter_memory::{GrantRepositoryMemory, SettingStoreMemory};

	#[test]
	fn test_missing_store_is_config_error() {
		let result = StrataBuilder::new().build();
		assert!(matches!(result, Err(Error::ConfigError(_))));
	}

	#[tokio::test]
	async fn test_standard_chain() {
		let mut builder = StrataBuilder::new();
		builder
			.config(StrataConfig::from_yaml_str("values: { Theme: blue }").unwrap())
			.definition(SettingDefinition::builder("Theme").default_value("light").build().unwrap())
			.setting_store(Arc::new(SettingStoreMemory::new()));
		let strata = builder.build().unwrap();

		assert!(strata.permissions.is_none());
		assert_eq!(strata.settings.get_or_null("Theme").await.unwrap().as_deref(), Some("blue"));
		let chain = strata.settings.providers().unwrap();
		let names: Vec<_> = chain.providers().iter().map(|p| p.name()).collect();
		assert_eq!(names, vec!["D", "C", "G", "T", "U"]);
	}

	#[tokio::test]
	async fn test_invalid_custom_chain_fails_on_first_use() {
		let store: Arc<dyn SettingStore> = Arc::new(SettingStoreMemory::new());
		let mut builder = StrataBuilder::new();
		builder
			.definition(SettingDefinition::builder("Theme").build().unwrap())
			.providers([
				Arc::new(StoreValueProvider::user(store.clone())) as ProviderRef,
				Arc::new(StoreValueProvider::global(store)) as ProviderRef,
			]);
		let strata = builder.build().unwrap();

		assert!(matches!(strata.settings.get_or_null("Theme").await, Err(Error::ConfigError(_))));
	}

	#[tokio::test]
	async fn test_permission_store_is_wired() {
		let repository = Arc::new(GrantRepositoryMemory::new());
		repository.insert("Orders.Edit", "R", "admin").await.unwrap();

		let mut builder = StrataBuilder::new();
		builder
			.setting_store(Arc::new(SettingStoreMemory::new()))
			.grant_repository(repository.clone());
		let strata = builder.build().unwrap();

		let permissions = strata.permissions.unwrap();
		assert!(permissions.is_granted("Orders.Edit", "R", "admin").await.unwrap());
		assert!(permissions.is_granted("Orders.Edit", "R", "admin").await.unwrap());
		assert_eq!(repository.lookup_count(), 1);
	}
}

// vim: ts=4
