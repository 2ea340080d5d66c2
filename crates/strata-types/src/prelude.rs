pub use crate::error::{Error, StResult};
pub use crate::registry::FrozenSettingsRegistry;
pub use crate::setting::SettingDefinition;
pub use crate::types::ScopeId;

pub use tracing::{debug, error, info, trace, warn};

// vim: ts=4
