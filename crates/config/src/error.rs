//! Error types for configuration lookups.

use thiserror::Error;

/// Errors that can occur when a value is required but cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	/// No value exists at the given path.
	#[error("configurator does not have a value for <{name}>")]
	Missing {
		/// Dotted path that was looked up.
		name: String,
	},

	/// A value exists but has the wrong type.
	#[error("value for <{name}> is {got}, expected {expected}")]
	TypeMismatch {
		/// Dotted path that was looked up.
		name: String,
		/// Requested type.
		expected: &'static str,
		/// Type actually stored.
		got: &'static str,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
