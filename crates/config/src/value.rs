/// A leaf value in the parameter tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating-point value.
	Float(f64),
	/// String value.
	String(String),
}

impl ParamValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			ParamValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			ParamValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the value as a float, widening integers.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			ParamValue::Float(v) => Some(*v),
			ParamValue::Int(v) => Some(*v as f64),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ParamValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		match self {
			ParamValue::Bool(_) => "bool",
			ParamValue::Int(_) => "int",
			ParamValue::Float(_) => "float",
			ParamValue::String(_) => "string",
		}
	}
}

impl From<bool> for ParamValue {
	fn from(v: bool) -> Self {
		ParamValue::Bool(v)
	}
}

impl From<i64> for ParamValue {
	fn from(v: i64) -> Self {
		ParamValue::Int(v)
	}
}

impl From<f64> for ParamValue {
	fn from(v: f64) -> Self {
		ParamValue::Float(v)
	}
}

impl From<String> for ParamValue {
	fn from(v: String) -> Self {
		ParamValue::String(v)
	}
}

impl From<&str> for ParamValue {
	fn from(v: &str) -> Self {
		ParamValue::String(v.to_string())
	}
}

// Seal the FromParamValue trait to prevent external implementations.
mod sealed {
	pub trait Sealed {}
	impl Sealed for bool {}
	impl Sealed for i64 {}
	impl Sealed for f64 {}
	impl Sealed for String {}
}

/// Trait for types that can be extracted from a [`ParamValue`].
pub trait FromParamValue: sealed::Sealed + Sized {
	/// Name of the type as reported in diagnostics.
	const TYPE_NAME: &'static str;

	/// Extracts the value, returning `None` if the type doesn't match.
	fn from_param(value: &ParamValue) -> Option<Self>;
}

impl FromParamValue for bool {
	const TYPE_NAME: &'static str = "bool";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_bool()
	}
}

impl FromParamValue for i64 {
	const TYPE_NAME: &'static str = "int";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_int()
	}
}

impl FromParamValue for f64 {
	const TYPE_NAME: &'static str = "float";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_float()
	}
}

impl FromParamValue for String {
	const TYPE_NAME: &'static str = "string";

	fn from_param(value: &ParamValue) -> Option<Self> {
		value.as_str().map(|s| s.to_string())
	}
}
