use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use super::creator::{Creator, CreatorRef};
use super::error::InsertAction;
use super::registry::Registry;
use crate::db::RegistryTable;

/// The self-registering creator for one concrete type `D` behind base `B`.
///
/// Registrars are `static` values, normally declared through
/// [`crate::registrar!`], which also submits them for installation during
/// [`crate::startup`]. The `build` function is where `Box<D>` is coerced to
/// `Box<B>`, so a registrar can only exist if `D` actually implements `B`.
pub struct Registrar<B: ?Sized + 'static, D: 'static> {
	id: &'static str,
	build: fn() -> Box<B>,
	_derived: PhantomData<fn() -> D>,
}

impl<B: ?Sized + 'static, D: 'static> Registrar<B, D> {
	/// Creates a registrar binding `id` to the given constructor.
	pub const fn new(id: &'static str, build: fn() -> Box<B>) -> Self {
		Self {
			id,
			build,
			_derived: PhantomData,
		}
	}

	/// Returns the identifier this registrar registers under.
	pub fn id(&self) -> &'static str {
		self.id
	}

	/// Registers this registrar into `registry`.
	pub fn register_into(&'static self, registry: &Registry<B>) -> InsertAction {
		registry.register(self.id, CreatorRef::Static(self))
	}
}

impl<B: ?Sized + 'static, D: 'static> Creator<B> for Registrar<B, D> {
	fn create(&self) -> Box<B> {
		(self.build)()
	}

	fn type_name(&self) -> &'static str {
		type_name::<D>()
	}
}

impl<B: ?Sized + 'static, D: 'static> fmt::Debug for Registrar<B, D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registrar")
			.field("id", &self.id)
			.field("base", &type_name::<B>())
			.field("derived", &type_name::<D>())
			.finish()
	}
}

/// Link-time record of a registrar, collected via `inventory`.
///
/// Produced by [`crate::registrar!`]. The startup phase sorts submissions by
/// `(base, id, module, derived)` before installing them, so "first
/// registration wins" resolves the same way in every build.
pub struct Submission {
	/// Base type as written at the declaration site.
	pub base: &'static str,
	/// Identifier the registrar registers under.
	pub id: &'static str,
	/// Concrete type as written at the declaration site.
	pub derived: &'static str,
	/// Module that declared the registrar.
	pub module: &'static str,
	/// Installs the registrar into the table's registry for its base type.
	pub install: fn(&RegistryTable) -> InsertAction,
}

inventory::collect!(Submission);

impl fmt::Debug for Submission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Submission")
			.field("base", &self.base)
			.field("id", &self.id)
			.field("derived", &self.derived)
			.field("module", &self.module)
			.finish_non_exhaustive()
	}
}
