use crate::error::{ConfigError, Result};
use crate::node::{Param, ParamNode};
use crate::value::FromParamValue;

/// Typed, named lookups over a parameter tree with default fallback.
///
/// Callers use it to decide which registry identifier to create:
///
/// ```
/// use nameplate_config::{Configurator, ParamNode};
///
/// let config = Configurator::new(ParamNode::new().with("codec.name", "rot13"));
/// assert_eq!(config.resolve_or("codec.name", "identity".to_string()), "rot13");
/// assert_eq!(config.resolve_or("codec.level", 6_i64), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Configurator {
	root: ParamNode,
}

impl Configurator {
	/// Wraps a parameter tree.
	pub fn new(root: ParamNode) -> Self {
		Self { root }
	}

	/// Returns the underlying tree.
	pub fn config(&self) -> &ParamNode {
		&self.root
	}

	/// Returns the underlying tree for modification.
	pub fn config_mut(&mut self) -> &mut ParamNode {
		&mut self.root
	}

	/// Resolves the value at `name`.
	///
	/// Returns `None` if the path is absent, names a node rather than a
	/// value, or holds a value of a different type. Type mismatches are
	/// logged.
	pub fn resolve<T: FromParamValue>(&self, name: &str) -> Option<T> {
		let value = self.root.at(name)?.as_value()?;
		let resolved = T::from_param(value);
		if resolved.is_none() {
			tracing::warn!(
				name,
				expected = T::TYPE_NAME,
				got = value.type_name(),
				"config value type mismatch",
			);
		}
		resolved
	}

	/// Resolves the value at `name`, falling back to `default`.
	pub fn resolve_or<T: FromParamValue>(&self, name: &str, default: T) -> T {
		self.resolve(name).unwrap_or(default)
	}

	/// Resolves the value at `name`, failing if it is absent or mistyped.
	pub fn require<T: FromParamValue>(&self, name: &str) -> Result<T> {
		let value = match self.root.at(name) {
			Some(Param::Value(value)) => value,
			Some(Param::Node(_)) | None => {
				return Err(ConfigError::Missing {
					name: name.to_string(),
				});
			}
		};
		T::from_param(value).ok_or_else(|| ConfigError::TypeMismatch {
			name: name.to_string(),
			expected: T::TYPE_NAME,
			got: value.type_name(),
		})
	}
}

impl From<ParamNode> for Configurator {
	fn from(root: ParamNode) -> Self {
		Self::new(root)
	}
}
