//! Error type shared by the engine and all adapters

pub type StResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Unknown setting definition (or other missing entity)
	NotFound(String),
	/// Missing or empty required identifier
	InvalidArgument(String),
	/// Invalid registry, chain or configuration content
	ConfigError(String),
	/// Operation is not supported by the addressed provider
	NotSupported(String),
	DbError(String),
	Parse(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	/// Fails with `InvalidArgument` if `value` is empty
	pub fn check_not_empty(value: &str, what: &str) -> StResult<()> {
		if value.is_empty() {
			return Err(Error::InvalidArgument(format!("{} must not be empty", what)));
		}
		Ok(())
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound(msg) => write!(f, "not found: {}", msg),
			Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::NotSupported(msg) => write!(f, "not supported: {}", msg),
			Error::DbError(msg) => write!(f, "store error: {}", msg),
			Error::Parse(msg) => write!(f, "parse error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Parse(err.to_string())
	}
}

impl From<serde_yaml::Error> for Error {
	fn from(err: serde_yaml::Error) -> Self {
		Self::Parse(err.to_string())
	}
}


// vim: ts=4
