use std::collections::BTreeMap;

use crate::value::ParamValue;

/// A parameter: either a leaf value or a nested node.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
	/// Leaf value.
	Value(ParamValue),
	/// Named children.
	Node(ParamNode),
}

impl Param {
	/// Returns true if this is a leaf value.
	pub fn is_value(&self) -> bool {
		matches!(self, Param::Value(_))
	}

	/// Returns the leaf value, if any.
	pub fn as_value(&self) -> Option<&ParamValue> {
		match self {
			Param::Value(v) => Some(v),
			Param::Node(_) => None,
		}
	}

	/// Returns the nested node, if any.
	pub fn as_node(&self) -> Option<&ParamNode> {
		match self {
			Param::Node(n) => Some(n),
			Param::Value(_) => None,
		}
	}
}

macro_rules! impl_param_from_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Param {
				fn from(v: $ty) -> Self {
					Param::Value(v.into())
				}
			}
		)*
	};
}

impl_param_from_value!(ParamValue, bool, i64, f64, String, &str);

impl From<ParamNode> for Param {
	fn from(n: ParamNode) -> Self {
		Param::Node(n)
	}
}

/// A node of named parameters, addressed with dotted paths (`codec.name`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamNode {
	children: BTreeMap<String, Param>,
}

impl ParamNode {
	/// Creates an empty node.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the parameter at `path`, creating intermediate nodes.
	///
	/// A leaf value standing where an intermediate node is needed is replaced.
	pub fn set(&mut self, path: &str, param: impl Into<Param>) -> &mut Self {
		let param = param.into();
		match path.split_once('.') {
			None => {
				self.children.insert(path.to_string(), param);
			}
			Some((head, rest)) => {
				let child = self
					.children
					.entry(head.to_string())
					.or_insert_with(|| Param::Node(ParamNode::new()));
				if !matches!(child, Param::Node(_)) {
					*child = Param::Node(ParamNode::new());
				}
				if let Param::Node(node) = child {
					node.set(rest, param);
				}
			}
		}
		self
	}

	/// Builder-style [`ParamNode::set`].
	pub fn with(mut self, path: &str, param: impl Into<Param>) -> Self {
		self.set(path, param);
		self
	}

	/// Returns the parameter at `path`.
	pub fn at(&self, path: &str) -> Option<&Param> {
		match path.split_once('.') {
			None => self.children.get(path),
			Some((head, rest)) => self.children.get(head)?.as_node()?.at(rest),
		}
	}

	/// Returns the leaf value at `path`.
	pub fn value_at(&self, path: &str) -> Option<&ParamValue> {
		self.at(path)?.as_value()
	}

	/// Returns true if `path` exists.
	pub fn has(&self, path: &str) -> bool {
		self.at(path).is_some()
	}

	/// Iterates direct children in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Param)> {
		self.children.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Returns the number of direct children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	/// Returns true if the node has no children.
	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}
}
