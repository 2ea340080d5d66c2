//! Setting manager - the resolution engine
//!
//! Resolves effective values by walking the provider chain:
//! - single lookups scan from the specific end toward the default, first value wins
//! - aggregation scans general to specific, later providers overwrite earlier ones
//! - writes drop an override that only restates the inherited value
//!
//! Provider calls within one operation are issued sequentially. Provider errors are
//! propagated untouched and a failed multi-provider write is not rolled back.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use strata_types::prelude::*;
use strata_types::setting::SettingValue;

use crate::chain::{ProviderChain, ProviderRef, contiguous_run};

/// Builds the provider chain on first use
pub type ChainFactory = Box<dyn Fn() -> StResult<ProviderChain> + Send + Sync>;

pub struct SettingManager {
	registry: Arc<FrozenSettingsRegistry>,
	providers: OnceLock<ProviderChain>,
	factory: Option<ChainFactory>,
}

impl SettingManager {
	/// Create a manager over an already built chain
	pub fn new(registry: Arc<FrozenSettingsRegistry>, chain: ProviderChain) -> Self {
		let providers = OnceLock::new();
		let _ = providers.set(chain);
		Self { registry, providers, factory: None }
	}

	/// Create a manager which builds its chain lazily on first use
	pub fn with_factory(registry: Arc<FrozenSettingsRegistry>, factory: ChainFactory) -> Self {
		Self { registry, providers: OnceLock::new(), factory: Some(factory) }
	}

	pub fn registry(&self) -> &Arc<FrozenSettingsRegistry> {
		&self.registry
	}

	/// The memoized provider chain
	///
	/// Concurrent first callers may each run the factory; the first stored chain is
	/// the one every caller uses afterwards.
	pub fn providers(&self) -> StResult<&ProviderChain> {
		if let Some(chain) = self.providers.get() {
			return Ok(chain);
		}

		let factory = self
			.factory
			.as_ref()
			.ok_or_else(|| Error::ConfigError("No provider chain configured".into()))?;
		let chain = factory()?;
		debug!("Provider chain initialized with {} providers", chain.len());
		let _ = self.providers.set(chain);

		self.providers
			.get()
			.ok_or_else(|| Error::ConfigError("Provider chain initialization failed".into()))
	}

	/// Resolve the effective value of `name` as seen from `scope`
	///
	/// Without a scope the whole chain is scanned. Inheritable settings fall back to
	/// more general scopes unless `allow_fallback` is false; other settings only see
	/// the providers bound to `scope`.
	pub async fn resolve(
		&self,
		name: &str,
		scope: Option<&ScopeId>,
		key: Option<&str>,
		allow_fallback: bool,
	) -> StResult<Option<String>> {
		Error::check_not_empty(name, "setting name")?;
		if let Some(scope) = scope {
			Error::check_not_empty(scope.as_str(), "scope")?;
		}

		self.resolve_internal(name, scope, key, allow_fallback).await
	}

	async fn resolve_internal(
		&self,
		name: &str,
		scope: Option<&ScopeId>,
		key: Option<&str>,
		allow_fallback: bool,
	) -> StResult<Option<String>> {
		let setting = self.registry.get(name)?;
		let window = self.providers()?.window_for(scope, allow_fallback && setting.is_inherited);

		for provider in window {
			if let Some(value) = provider.get_or_null(setting, key).await? {
				trace!("Setting '{}' resolved by provider '{}'", name, provider.name());
				return Ok(Some(value));
			}
		}

		Ok(None)
	}

	/// Resolve every registered setting as seen from `scope`
	///
	/// Results follow registration order; settings no provider holds a value for are
	/// left out, except non-inheritable ones resolved at a scope (see below).
	///
	/// Without a scope all providers are consulted general to specific and the most
	/// specific value wins for every setting. With a scope, inheritable settings behave
	/// like [`resolve`](Self::resolve) over the permitted window, while other settings
	/// take the value of the most general provider in that window, absent included.
	pub async fn resolve_all(
		&self,
		scope: Option<&ScopeId>,
		key: Option<&str>,
		allow_fallback: bool,
	) -> StResult<Vec<SettingValue>> {
		if let Some(scope) = scope {
			Error::check_not_empty(scope.as_str(), "scope")?;
		}

		let chain = self.providers()?;
		let mut values = HashMap::new();

		let Some(scope) = scope else {
			for provider in chain.providers() {
				for setting in self.registry.list() {
					if let Some(value) = provider.get_or_null(setting, key).await? {
						values.insert(setting.name.clone(), Some(value));
					}
				}
			}
			return Ok(self.in_registration_order(values));
		};

		let mut provider_list: Vec<&ProviderRef> = chain.window_for(Some(scope), allow_fallback);
		provider_list.reverse();

		let Some(most_general) = provider_list.first() else {
			debug!("No provider serves scope '{}'", scope);
			return Ok(Vec::new());
		};

		for setting in self.registry.list() {
			if setting.is_inherited {
				for provider in &provider_list {
					if let Some(value) = provider.get_or_null(setting, key).await? {
						values.insert(setting.name.clone(), Some(value));
					}
				}
			} else {
				let value = most_general.get_or_null(setting, key).await?;
				values.insert(setting.name.clone(), value);
			}
		}

		Ok(self.in_registration_order(values))
	}

	fn in_registration_order(
		&self,
		mut values: HashMap<String, Option<String>>,
	) -> Vec<SettingValue> {
		self.registry
			.list()
			.filter_map(|setting| {
				values.remove(&setting.name).map(|value| SettingValue::new(setting.name.clone(), value))
			})
			.collect()
	}

	/// Write (or with `None`, clear) the value of `name` at `scope`
	///
	/// Unless `force` is set, writing the value an inheritable setting would already
	/// resolve to from the next more general scope clears the override instead. Only
	/// providers bound to `scope` are written. A scope no provider serves is a no-op.
	pub async fn write(
		&self,
		name: &str,
		value: Option<&str>,
		scope: &ScopeId,
		key: Option<&str>,
		force: bool,
	) -> StResult<()> {
		Error::check_not_empty(name, "setting name")?;
		Error::check_not_empty(scope.as_str(), "scope")?;

		let setting = self.registry.get(name)?;
		let chain = self.providers()?;
		let providers = chain.scan_from(Some(scope));
		if providers.is_empty() {
			debug!("No provider serves scope '{}', ignoring write of '{}'", scope, name);
			return Ok(());
		}

		let mut value = value;
		if providers.len() > 1 && !force && setting.is_inherited {
			if let (Some(new_value), Some(parent)) = (value, chain.next_general(scope)) {
				let fallback =
					self.resolve_internal(name, Some(parent.scope()), key, true).await?;
				if fallback.as_deref() == Some(new_value) {
					debug!(
						"Value of '{}' at scope '{}' equals the inherited value, clearing override",
						name, scope
					);
					value = None;
				}
			}
		}

		let targets = contiguous_run(providers, scope);
		match value {
			Some(value) => {
				for provider in targets {
					provider.set(setting, value, key).await?;
				}
			}
			None => {
				for provider in targets {
					provider.clear(setting, key).await?;
				}
			}
		}

		Ok(())
	}

	/// Clear the override of `name` at `scope`
	pub async fn clear(&self, name: &str, scope: &ScopeId, key: Option<&str>) -> StResult<()> {
		self.write(name, None, scope, key, true).await
	}

	/// Resolve `name` over the whole chain
	pub async fn get_or_null(&self, name: &str) -> StResult<Option<String>> {
		self.resolve(name, None, None, true).await
	}

	/// Resolve `name` at `scope` with fallback
	pub async fn get_for(
		&self,
		name: &str,
		scope: &ScopeId,
		key: Option<&str>,
	) -> StResult<Option<String>> {
		self.resolve(name, Some(scope), key, true).await
	}

	/// True if the resolved value is "true" (case-insensitive); absent is false
	pub async fn is_true(
		&self,
		name: &str,
		scope: Option<&ScopeId>,
		key: Option<&str>,
	) -> StResult<bool> {
		let value = self.resolve(name, scope, key, true).await?;
		Ok(value.is_some_and(|v| v.eq_ignore_ascii_case("true")))
	}

	/// Resolve and parse the value of `name`
	pub async fn get_as<T>(
		&self,
		name: &str,
		scope: Option<&ScopeId>,
		key: Option<&str>,
	) -> StResult<Option<T>>
	where
		T: FromStr,
		T::Err: fmt::Display,
	{
		match self.resolve(name, scope, key, true).await? {
			Some(value) => value.parse::<T>().map(Some).map_err(|e| {
				Error::InvalidArgument(format!("Setting '{}' has invalid value '{}': {}", name, value, e))
			}),
			None => Ok(None),
		}
	}
}

impl fmt::Debug for SettingManager {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SettingManager")
			.field("registry", &self.registry)
			.field("providers", &self.providers.get())
			.field("factory", &self.factory.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::chain::ScopeHierarchy;
	use crate::provider::{DefaultValueProvider, StoreValueProvider};
	use std::sync::atomic::{AtomicUsize, Ordering};
	use strata_store_adapter_memory::SettingStoreMemory;
	use strata_types::registry::SettingsRegistry;
	use strata_types::store_adapter::SettingStore;

	fn registry() -> Arc<FrozenSettingsRegistry> {
		let mut registry = SettingsRegistry::new();
		registry
			.register(SettingDefinition::builder("Theme").default_value("light").build().unwrap())
			.unwrap();
		registry
			.register(
				SettingDefinition::builder("Smtp.Host")
					.default_value("localhost")
					.inherited(false)
					.build()
					.unwrap(),
			)
			.unwrap();
		registry.register(SettingDefinition::builder("Page.Size").build().unwrap()).unwrap();
		Arc::new(registry.freeze())
	}

	fn chain(store: &Arc<SettingStoreMemory>) -> ProviderChain {
		let mut builder = ProviderChain::builder(ScopeHierarchy::default());
		builder
			.add(Arc::new(DefaultValueProvider::new()))
			.add(Arc::new(StoreValueProvider::global(store.clone())))
			.add(Arc::new(StoreValueProvider::tenant(store.clone())))
			.add(Arc::new(StoreValueProvider::user(store.clone())));
		builder.build().unwrap()
	}

	fn manager() -> (SettingManager, Arc<SettingStoreMemory>) {
		let store = Arc::new(SettingStoreMemory::new());
		(SettingManager::new(registry(), chain(&store)), store)
	}

	fn scope(id: &str) -> ScopeId {
		ScopeId::from(id)
	}

	fn by_name(values: &[SettingValue]) -> HashMap<&str, Option<&str>> {
		values.iter().map(|v| (v.name.as_str(), v.value.as_deref())).collect()
	}

	#[tokio::test]
	async fn test_unknown_setting_is_not_found() {
		let (manager, _store) = manager();
		let result = manager.resolve("Missing", None, None, true).await;
		assert!(matches!(result, Err(Error::NotFound(_))));
		let result = manager.write("Missing", Some("x"), &scope("T"), None, false).await;
		assert!(matches!(result, Err(Error::NotFound(_))));
	}

	#[tokio::test]
	async fn test_empty_identifiers_are_rejected() {
		let (manager, _store) = manager();
		assert!(matches!(
			manager.resolve("", None, None, true).await,
			Err(Error::InvalidArgument(_))
		));
		assert!(matches!(
			manager.write("Theme", Some("dark"), &scope(""), None, false).await,
			Err(Error::InvalidArgument(_))
		));
		assert!(matches!(
			manager.resolve_all(Some(&scope("")), None, true).await,
			Err(Error::InvalidArgument(_))
		));
	}

	#[tokio::test]
	async fn test_inherited_setting_falls_back_to_default() {
		let (manager, _store) = manager();
		let value = manager.resolve("Theme", Some(&scope("U")), Some("alice"), true).await.unwrap();
		assert_eq!(value.as_deref(), Some("light"));
		assert_eq!(manager.get_or_null("Theme").await.unwrap().as_deref(), Some("light"));
	}

	#[tokio::test]
	async fn test_more_specific_scopes_are_excluded() {
		let (manager, store) = manager();
		store.set("Theme", "dark", "U", Some("alice")).await.unwrap();
		let value = manager.resolve("Theme", Some(&scope("T")), Some("alice"), true).await.unwrap();
		assert_eq!(value.as_deref(), Some("light"));
	}

	#[tokio::test]
	async fn test_non_inherited_setting_stays_in_scope() {
		let (manager, store) = manager();
		store.set("Smtp.Host", "mail.acme.com", "T", Some("acme")).await.unwrap();

		let at_user = manager.resolve("Smtp.Host", Some(&scope("U")), Some("acme"), true).await;
		assert_eq!(at_user.unwrap(), None);
		let at_tenant = manager.resolve("Smtp.Host", Some(&scope("T")), Some("acme"), true).await;
		assert_eq!(at_tenant.unwrap().as_deref(), Some("mail.acme.com"));
		let at_default = manager.resolve("Smtp.Host", Some(&scope("D")), None, true).await;
		assert_eq!(at_default.unwrap().as_deref(), Some("localhost"));
	}

	#[tokio::test]
	async fn test_no_scope_scans_whole_chain() {
		let (manager, store) = manager();
		store.set("Smtp.Host", "mail.acme.com", "T", None).await.unwrap();
		let value = manager.resolve("Smtp.Host", None, None, false).await.unwrap();
		assert_eq!(value.as_deref(), Some("mail.acme.com"));
	}

	#[tokio::test]
	async fn test_unknown_scope_resolves_absent() {
		let (manager, _store) = manager();
		let value = manager.resolve("Theme", Some(&scope("X")), None, true).await.unwrap();
		assert_eq!(value, None);
	}

	#[tokio::test]
	async fn test_write_then_read_scenario() {
		let (manager, _store) = manager();
		let tenant = scope("T");
		let user = scope("U");

		assert_eq!(manager.get_for("Theme", &user, Some("k")).await.unwrap().as_deref(), Some("light"));

		manager.write("Theme", Some("dark"), &tenant, Some("k"), false).await.unwrap();
		assert_eq!(manager.get_for("Theme", &user, Some("k")).await.unwrap().as_deref(), Some("dark"));
		assert_eq!(
			manager.resolve("Theme", Some(&tenant), Some("k"), false).await.unwrap().as_deref(),
			Some("dark")
		);
		assert_eq!(manager.resolve("Theme", Some(&user), Some("k"), false).await.unwrap(), None);
	}

	#[tokio::test]
	async fn test_write_collapses_to_inherited_value() {
		let (manager, store) = manager();
		store.set("Theme", "dark", "T", Some("k")).await.unwrap();

		manager.write("Theme", Some("dark"), &scope("U"), Some("k"), false).await.unwrap();
		assert_eq!(store.get_or_null("Theme", "U", Some("k")).await.unwrap(), None);
		assert_eq!(manager.get_for("Theme", &scope("U"), Some("k")).await.unwrap().as_deref(), Some("dark"));

		// nothing was stored at U, so clearing T exposes the default
		store.delete("Theme", "T", Some("k")).await.unwrap();
		assert_eq!(manager.get_for("Theme", &scope("U"), Some("k")).await.unwrap().as_deref(), Some("light"));
	}

	#[tokio::test]
	async fn test_collapse_removes_existing_override() {
		let (manager, store) = manager();
		store.set("Theme", "blue", "U", Some("k")).await.unwrap();

		manager.write("Theme", Some("light"), &scope("U"), Some("k"), false).await.unwrap();
		assert_eq!(store.get_or_null("Theme", "U", Some("k")).await.unwrap(), None);
	}

	#[tokio::test]
	async fn test_forced_write_keeps_redundant_override() {
		let (manager, store) = manager();
		manager.write("Theme", Some("light"), &scope("U"), Some("k"), true).await.unwrap();
		assert_eq!(store.get_or_null("Theme", "U", Some("k")).await.unwrap().as_deref(), Some("light"));
	}

	#[tokio::test]
	async fn test_non_inherited_write_is_not_collapsed() {
		let (manager, store) = manager();
		manager.write("Smtp.Host", Some("localhost"), &scope("T"), Some("k"), false).await.unwrap();
		assert_eq!(
			store.get_or_null("Smtp.Host", "T", Some("k")).await.unwrap().as_deref(),
			Some("localhost")
		);
	}

	#[tokio::test]
	async fn test_clear_then_scope_local_lookup_is_absent() {
		let (manager, _store) = manager();
		manager.write("Theme", Some("dark"), &scope("T"), Some("k"), true).await.unwrap();
		manager.write("Theme", None, &scope("T"), Some("k"), true).await.unwrap();
		assert_eq!(manager.resolve("Theme", Some(&scope("T")), Some("k"), false).await.unwrap(), None);
	}

	#[tokio::test]
	async fn test_write_to_unserved_scope_is_noop() {
		let (manager, store) = manager();
		manager.write("Theme", Some("dark"), &scope("X"), None, true).await.unwrap();
		assert!(store.is_empty().await);
	}

	#[tokio::test]
	async fn test_write_to_read_only_scope_fails() {
		let (manager, _store) = manager();
		let result = manager.write("Theme", Some("dark"), &scope("D"), None, false).await;
		assert!(matches!(result, Err(Error::NotSupported(_))));
	}

	#[tokio::test]
	async fn test_resolve_all_without_scope() {
		let (manager, store) = manager();
		store.set("Theme", "dark", "T", None).await.unwrap();
		store.set("Smtp.Host", "mail.acme.com", "U", None).await.unwrap();

		let values = manager.resolve_all(None, None, true).await.unwrap();
		let names: Vec<_> = values.iter().map(|v| v.name.as_str()).collect();
		assert_eq!(names, vec!["Theme", "Smtp.Host"]);
		let values = by_name(&values);
		assert_eq!(values.get("Theme"), Some(&Some("dark")));
		assert_eq!(values.get("Smtp.Host"), Some(&Some("mail.acme.com")));
		assert!(!values.contains_key("Page.Size"));
	}

	#[tokio::test]
	async fn test_resolve_all_with_scope() {
		let (manager, store) = manager();
		store.set("Theme", "dark", "T", Some("k")).await.unwrap();
		store.set("Smtp.Host", "mail.acme.com", "T", Some("k")).await.unwrap();

		let values = manager.resolve_all(Some(&scope("U")), Some("k"), true).await.unwrap();
		let values = by_name(&values);
		assert_eq!(values.get("Theme"), Some(&Some("dark")));
		// non-inherited settings come from the most general provider in the window
		assert_eq!(values.get("Smtp.Host"), Some(&Some("localhost")));
		assert!(!values.contains_key("Page.Size"));
	}

	#[tokio::test]
	async fn test_resolve_all_without_fallback() {
		let (manager, store) = manager();
		store.set("Theme", "dark", "T", Some("k")).await.unwrap();

		let values = manager.resolve_all(Some(&scope("T")), Some("k"), false).await.unwrap();
		let values = by_name(&values);
		assert_eq!(values.get("Theme"), Some(&Some("dark")));
		// non-inherited settings are recorded even when absent
		assert_eq!(values.get("Smtp.Host"), Some(&None));

		let values = manager.resolve_all(Some(&scope("X")), Some("k"), true).await.unwrap();
		assert!(values.is_empty());
	}

	#[tokio::test]
	async fn test_allow_list_hides_default() {
		let mut registry = SettingsRegistry::new();
		registry
			.register(
				SettingDefinition::builder("Smtp.Host")
					.default_value("localhost")
					.providers(["G"])
					.build()
					.unwrap(),
			)
			.unwrap();
		let store = Arc::new(SettingStoreMemory::new());
		let mut builder = ProviderChain::builder(ScopeHierarchy::default());
		builder
			.add(Arc::new(DefaultValueProvider::new()))
			.add(Arc::new(StoreValueProvider::global(store.clone())));
		let manager = SettingManager::new(Arc::new(registry.freeze()), builder.build().unwrap());

		assert_eq!(manager.resolve("Smtp.Host", Some(&scope("G")), None, true).await.unwrap(), None);
		store.set("Smtp.Host", "mail.acme.com", "G", None).await.unwrap();
		assert_eq!(manager.get_or_null("Smtp.Host").await.unwrap().as_deref(), Some("mail.acme.com"));
	}

	/// D > T1, T2 (both at scope T) > U
	fn sibling_manager() -> (SettingManager, Arc<SettingStoreMemory>) {
		let store = Arc::new(SettingStoreMemory::new());
		let mut builder = ProviderChain::builder(ScopeHierarchy::default());
		builder
			.add(Arc::new(DefaultValueProvider::new()))
			.add(Arc::new(StoreValueProvider::new("T1", "T", store.clone())))
			.add(Arc::new(StoreValueProvider::new("T2", "T", store.clone())))
			.add(Arc::new(StoreValueProvider::user(store.clone())));
		(SettingManager::new(registry(), builder.build().unwrap()), store)
	}

	#[tokio::test]
	async fn test_write_reaches_every_sibling() {
		let (manager, store) = sibling_manager();

		manager.write("Theme", Some("dark"), &scope("T"), Some("k"), false).await.unwrap();
		assert_eq!(store.get_or_null("Theme", "T1", Some("k")).await.unwrap().as_deref(), Some("dark"));
		assert_eq!(store.get_or_null("Theme", "T2", Some("k")).await.unwrap().as_deref(), Some("dark"));

		// "light" is the default, so both overrides are dropped
		manager.write("Theme", Some("light"), &scope("T"), Some("k"), false).await.unwrap();
		assert_eq!(store.get_or_null("Theme", "T1", Some("k")).await.unwrap(), None);
		assert_eq!(store.get_or_null("Theme", "T2", Some("k")).await.unwrap(), None);
		assert!(store.is_empty().await);
	}

	#[tokio::test]
	async fn test_scope_local_lookup_sees_siblings() {
		let (manager, store) = sibling_manager();
		store.set("Theme", "dark", "T1", Some("k")).await.unwrap();

		let value = manager.resolve("Theme", Some(&scope("T")), Some("k"), false).await.unwrap();
		assert_eq!(value.as_deref(), Some("dark"));
		assert_eq!(manager.resolve("Theme", Some(&scope("U")), Some("k"), false).await.unwrap(), None);
	}

	#[tokio::test]
	async fn test_sibling_value_does_not_collapse_write() {
		let (manager, store) = sibling_manager();
		store.set("Theme", "dark", "T1", Some("k")).await.unwrap();

		manager.write("Theme", Some("dark"), &scope("T"), Some("k"), false).await.unwrap();
		assert_eq!(store.get_or_null("Theme", "T1", Some("k")).await.unwrap().as_deref(), Some("dark"));
		assert_eq!(store.get_or_null("Theme", "T2", Some("k")).await.unwrap().as_deref(), Some("dark"));
	}

	#[tokio::test]
	async fn test_collapse_against_sibling_run() {
		let (manager, store) = sibling_manager();
		store.set("Theme", "dark", "T1", Some("k")).await.unwrap();

		manager.write("Theme", Some("dark"), &scope("U"), Some("k"), false).await.unwrap();
		assert_eq!(store.get_or_null("Theme", "U", Some("k")).await.unwrap(), None);
		assert_eq!(manager.get_for("Theme", &scope("U"), Some("k")).await.unwrap().as_deref(), Some("dark"));
	}

	#[tokio::test]
	async fn test_typed_getters() {
		let (manager, store) = manager();
		store.set("Page.Size", "25", "G", None).await.unwrap();
		store.set("Theme", "TRUE", "G", None).await.unwrap();

		assert_eq!(manager.get_as::<u32>("Page.Size", None, None).await.unwrap(), Some(25));
		assert!(manager.is_true("Theme", None, None).await.unwrap());
		assert!(matches!(
			manager.get_as::<bool>("Page.Size", None, None).await,
			Err(Error::InvalidArgument(_))
		));
	}

	#[tokio::test]
	async fn test_lazy_chain_is_built_once() {
		let store = Arc::new(SettingStoreMemory::new());
		let calls = Arc::new(AtomicUsize::new(0));
		let factory_calls = calls.clone();
		let manager = SettingManager::with_factory(
			registry(),
			Box::new(move || -> StResult<ProviderChain> {
				factory_calls.fetch_add(1, Ordering::SeqCst);
				Ok(chain(&store))
			}),
		);

		manager.get_or_null("Theme").await.unwrap();
		manager.get_or_null("Theme").await.unwrap();
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn test_failed_factory_is_retried() {
		let manager = SettingManager::with_factory(
			registry(),
			Box::new(|| -> StResult<ProviderChain> { Err(Error::ConfigError("no store".into())) }),
		);
		assert!(matches!(manager.get_or_null("Theme").await, Err(Error::ConfigError(_))));
		assert!(matches!(manager.get_or_null("Theme").await, Err(Error::ConfigError(_))));
	}
}

// vim: ts=4
