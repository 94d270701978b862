use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A stateless factory for one concrete implementation of `B`.
///
/// Creators never hold on to the objects they build; every call to
/// [`Creator::create`] returns a new, exclusively owned instance.
pub trait Creator<B: ?Sized>: Send + Sync {
	/// Builds a new instance.
	fn create(&self) -> Box<B>;

	/// Returns the name of the concrete type this creator builds.
	fn type_name(&self) -> &'static str;
}

/// Creator backed by a plain constructor function.
///
/// Used for runtime registration where declaring a [`crate::Registrar`]
/// static is inconvenient.
pub struct FnCreator<B: ?Sized> {
	build: fn() -> Box<B>,
	type_name: &'static str,
}

impl<B: ?Sized> FnCreator<B> {
	pub const fn new(type_name: &'static str, build: fn() -> Box<B>) -> Self {
		Self { build, type_name }
	}
}

impl<B: ?Sized> Creator<B> for FnCreator<B> {
	fn create(&self) -> Box<B> {
		(self.build)()
	}

	fn type_name(&self) -> &'static str {
		self.type_name
	}
}

/// Handle to a creator stored in a registry.
///
/// Wraps either a `&'static` creator (registrar statics) or a shared one
/// supplied at runtime. Provides uniform access through [`Deref`].
pub enum CreatorRef<B: ?Sized + 'static> {
	/// Creator with `'static` lifetime.
	Static(&'static dyn Creator<B>),
	/// Creator owned by the registry.
	Shared(Arc<dyn Creator<B>>),
}

impl<B: ?Sized + 'static> CreatorRef<B> {
	/// Returns true if both handles point at the same creator.
	pub fn same_as(&self, other: &Self) -> bool {
		std::ptr::addr_eq(
			&**self as *const dyn Creator<B>,
			&**other as *const dyn Creator<B>,
		)
	}
}

impl<B: ?Sized + 'static> Clone for CreatorRef<B> {
	fn clone(&self) -> Self {
		match self {
			Self::Static(c) => Self::Static(*c),
			Self::Shared(c) => Self::Shared(Arc::clone(c)),
		}
	}
}

impl<B: ?Sized + 'static> Deref for CreatorRef<B> {
	type Target = dyn Creator<B>;

	fn deref(&self) -> &Self::Target {
		match self {
			Self::Static(c) => *c,
			Self::Shared(c) => &**c,
		}
	}
}

impl<B: ?Sized + 'static> fmt::Debug for CreatorRef<B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static(c) => f.debug_tuple("CreatorRef::Static").field(&c.type_name()).finish(),
			Self::Shared(c) => f.debug_tuple("CreatorRef::Shared").field(&c.type_name()).finish(),
		}
	}
}

impl<B: ?Sized + 'static> From<&'static dyn Creator<B>> for CreatorRef<B> {
	fn from(creator: &'static dyn Creator<B>) -> Self {
		Self::Static(creator)
	}
}

impl<B: ?Sized + 'static> From<Arc<dyn Creator<B>>> for CreatorRef<B> {
	fn from(creator: Arc<dyn Creator<B>>) -> Self {
		Self::Shared(creator)
	}
}
