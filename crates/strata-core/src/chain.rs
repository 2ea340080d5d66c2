//! Provider chain and scope windows
//!
//! The chain holds providers ordered from the most general scope (index 0) to the most
//! specific one. Consecutive providers may share a scope id. Ordering is checked once
//! against a [`ScopeHierarchy`] when the chain is built.

use std::collections::HashSet;
use std::sync::Arc;

use strata_types::prelude::*;
use strata_types::provider::SettingValueProvider;

pub type ProviderRef = Arc<dyn SettingValueProvider>;

/// Default scope levels, general to specific: default, configuration, global, tenant, user
pub const DEFAULT_SCOPES: [&str; 5] = ["D", "C", "G", "T", "U"];

/// Ordered scope levels, most general first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeHierarchy {
	levels: Vec<ScopeId>,
}

impl ScopeHierarchy {
	pub fn new<I, S>(levels: I) -> StResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<ScopeId>,
	{
		let levels: Vec<ScopeId> = levels.into_iter().map(Into::into).collect();
		if levels.is_empty() {
			return Err(Error::ConfigError("Scope hierarchy must not be empty".into()));
		}

		let mut seen = HashSet::new();
		for level in &levels {
			Error::check_not_empty(level.as_str(), "scope id")?;
			if !seen.insert(level) {
				return Err(Error::ConfigError(format!("Scope '{}' is listed twice", level)));
			}
		}

		Ok(Self { levels })
	}

	/// Position of `scope` in the hierarchy (0 = most general)
	pub fn level_of(&self, scope: &ScopeId) -> Option<usize> {
		self.levels.iter().position(|s| s == scope)
	}

	/// The next more general scope
	pub fn parent(&self, scope: &ScopeId) -> Option<&ScopeId> {
		self.level_of(scope).and_then(|idx| idx.checked_sub(1)).and_then(|idx| self.levels.get(idx))
	}

	pub fn levels(&self) -> &[ScopeId] {
		&self.levels
	}
}

impl Default for ScopeHierarchy {
	fn default() -> Self {
		Self { levels: DEFAULT_SCOPES.iter().map(|s| ScopeId::from(*s)).collect() }
	}
}

/// Validated, immutable provider chain
#[derive(Debug, Clone)]
pub struct ProviderChain {
	hierarchy: ScopeHierarchy,
	providers: Vec<ProviderRef>,
}

impl ProviderChain {
	pub fn builder(hierarchy: ScopeHierarchy) -> ProviderChainBuilder {
		ProviderChainBuilder { hierarchy, providers: Vec::new() }
	}

	/// Providers in general to specific order
	pub fn providers(&self) -> &[ProviderRef] {
		&self.providers
	}

	pub fn hierarchy(&self) -> &ScopeHierarchy {
		&self.hierarchy
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	/// Providers in specific to general order, starting at the first provider bound to
	/// `scope` (all providers when no scope is given). Providers more specific than
	/// `scope` are excluded. Empty if no provider serves `scope`.
	pub fn scan_from(&self, scope: Option<&ScopeId>) -> Vec<&ProviderRef> {
		let reversed = self.providers.iter().rev();
		match scope {
			Some(scope) => reversed.skip_while(|p| p.scope() != scope).collect(),
			None => reversed.collect(),
		}
	}

	/// Providers consulted for a lookup at `scope`, specific to general.
	///
	/// With `fallback` the window extends to the most general provider; without it the
	/// window is the contiguous run of providers bound to `scope` itself. A lookup
	/// without scope always sees the whole chain.
	pub fn window_for(&self, scope: Option<&ScopeId>, fallback: bool) -> Vec<&ProviderRef> {
		let providers = self.scan_from(scope);
		match scope {
			Some(scope) if !fallback => contiguous_run(providers, scope),
			_ => providers,
		}
	}

	/// First provider more general than the contiguous run bound to `scope`
	pub fn next_general(&self, scope: &ScopeId) -> Option<&ProviderRef> {
		self.scan_from(Some(scope)).into_iter().find(|p| p.scope() != scope)
	}
}

/// Keep the leading providers bound to `scope`
pub fn contiguous_run<'a>(providers: Vec<&'a ProviderRef>, scope: &ScopeId) -> Vec<&'a ProviderRef> {
	providers.into_iter().take_while(|p| p.scope() == scope).collect()
}

/// Collects providers and validates their order against the hierarchy
#[derive(Debug)]
pub struct ProviderChainBuilder {
	hierarchy: ScopeHierarchy,
	providers: Vec<ProviderRef>,
}

impl ProviderChainBuilder {
	/// Append a provider; it must not be more general than the previous one
	pub fn add(&mut self, provider: ProviderRef) -> &mut Self {
		self.providers.push(provider);
		self
	}

	pub fn add_all(&mut self, providers: impl IntoIterator<Item = ProviderRef>) -> &mut Self {
		self.providers.extend(providers);
		self
	}

	pub fn build(self) -> StResult<ProviderChain> {
		if self.providers.is_empty() {
			return Err(Error::ConfigError("Provider chain must not be empty".into()));
		}

		let mut names = HashSet::new();
		let mut last_level = 0;
		for provider in &self.providers {
			let level = self.hierarchy.level_of(provider.scope()).ok_or_else(|| {
				Error::ConfigError(format!(
					"Provider '{}' is bound to unknown scope '{}'",
					provider.name(),
					provider.scope()
				))
			})?;
			if level < last_level {
				return Err(Error::ConfigError(format!(
					"Provider '{}' (scope '{}') is more general than the provider before it",
					provider.name(),
					provider.scope()
				)));
			}
			if !names.insert(provider.name()) {
				return Err(Error::ConfigError(format!(
					"Provider '{}' is registered twice",
					provider.name()
				)));
			}
			last_level = level;
		}

		info!(
			"Provider chain: {}",
			self.providers.iter().map(|p| p.name()).collect::<Vec<_>>().join(" > ")
		);
		Ok(ProviderChain { hierarchy: self.hierarchy, providers: self.providers })
	}
}


// vim: ts=4
