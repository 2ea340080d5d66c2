//! Store-backed provider for the global, tenant and user scopes

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use strata_types::prelude::*;
use strata_types::provider::SettingValueProvider;
use strata_types::store_adapter::SettingStore;

use super::{GLOBAL, TENANT, USER};

/// Supplies the provider key when the caller passes none (e.g. the current tenant id)
pub type CurrentKeyFn = Arc<dyn Fn() -> Option<String> + Send + Sync>;

enum KeyPolicy {
	/// Values are stored without a provider key
	Shared,
	/// Values are stored per entity; `current` fills in a missing key
	PerEntity { current: Option<CurrentKeyFn> },
}

/// Dispatches reads and writes to a [`SettingStore`] under its own provider name
pub struct StoreValueProvider {
	name: Box<str>,
	scope: ScopeId,
	store: Arc<dyn SettingStore>,
	key_policy: KeyPolicy,
}

impl StoreValueProvider {
	/// Provider storing values per entity key
	pub fn new(name: impl Into<Box<str>>, scope: impl Into<ScopeId>, store: Arc<dyn SettingStore>) -> Self {
		Self {
			name: name.into(),
			scope: scope.into(),
			store,
			key_policy: KeyPolicy::PerEntity { current: None },
		}
	}

	/// Instance-wide values, stored without a provider key
	pub fn global(store: Arc<dyn SettingStore>) -> Self {
		Self { name: GLOBAL.into(), scope: GLOBAL.into(), store, key_policy: KeyPolicy::Shared }
	}

	pub fn tenant(store: Arc<dyn SettingStore>) -> Self {
		Self::new(TENANT, TENANT, store)
	}

	pub fn user(store: Arc<dyn SettingStore>) -> Self {
		Self::new(USER, USER, store)
	}

	/// Resolve missing keys through `current`; ignored for shared providers
	pub fn with_current_key(mut self, current: CurrentKeyFn) -> Self {
		if let KeyPolicy::PerEntity { current: slot } = &mut self.key_policy {
			*slot = Some(current);
		}
		self
	}

	fn provider_key(&self, key: Option<&str>) -> Option<String> {
		match &self.key_policy {
			KeyPolicy::Shared => None,
			KeyPolicy::PerEntity { current } => match key {
				Some(key) => Some(key.to_string()),
				None => current.as_ref().and_then(|current| (**current)()),
			},
		}
	}
}

impl fmt::Debug for StoreValueProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let key_policy = match &self.key_policy {
			KeyPolicy::Shared => "shared",
			KeyPolicy::PerEntity { current: Some(_) } => "per-entity (current)",
			KeyPolicy::PerEntity { current: None } => "per-entity",
		};
		f.debug_struct("StoreValueProvider")
			.field("name", &self.name)
			.field("scope", &self.scope)
			.field("store", &self.store)
			.field("key_policy", &key_policy)
			.finish()
	}
}

#[async_trait]
impl SettingValueProvider for StoreValueProvider {
	fn name(&self) -> &str {
		&self.name
	}

	fn scope(&self) -> &ScopeId {
		&self.scope
	}

	async fn get_or_null(
		&self,
		setting: &SettingDefinition,
		key: Option<&str>,
	) -> StResult<Option<String>> {
		if !setting.allows_provider(&self.name) {
			return Ok(None);
		}
		let provider_key = self.provider_key(key);
		self.store.get_or_null(&setting.name, &self.name, provider_key.as_deref()).await
	}

	async fn set(&self, setting: &SettingDefinition, value: &str, key: Option<&str>) -> StResult<()> {
		if !setting.allows_provider(&self.name) {
			debug!("Provider '{}' does not hold '{}', skipping write", self.name, setting.name);
			return Ok(());
		}
		let provider_key = self.provider_key(key);
		self.store.set(&setting.name, value, &self.name, provider_key.as_deref()).await
	}

	async fn clear(&self, setting: &SettingDefinition, key: Option<&str>) -> StResult<()> {
		if !setting.allows_provider(&self.name) {
			return Ok(());
		}
		let provider_key = self.provider_key(key);
		self.store.delete(&setting.name, &self.name, provider_key.as_deref()).await
	}
}


// vim: ts=4
