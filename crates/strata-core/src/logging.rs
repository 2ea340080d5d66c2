//! tracing subscriber setup

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Returns false if a global subscriber was already installed.
pub fn init() -> bool {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.try_init()
		.is_ok()
}

/// Debug-level subscriber writing through the test harness
pub fn init_test() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_repeated_init_does_not_panic() {
		init_test();
		init_test();
		assert!(!init());
	}
}

// vim: ts=4
