use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use crate::core::Registry;

type ErasedRegistry = Arc<dyn Any + Send + Sync>;

/// Table holding exactly one [`Registry<B>`] per base type.
///
/// Registries are created on first access and live as long as the table.
/// The table lock only guards the `TypeId` map; it is released before the
/// caller touches the returned registry, so registries for unrelated base
/// types never contend.
pub struct RegistryTable {
	registries: RwLock<HashMap<TypeId, ErasedRegistry>>,
}

impl RegistryTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self {
			registries: RwLock::new(HashMap::default()),
		}
	}

	/// Returns the registry for base type `B`, creating it on first access.
	pub fn registry<B: ?Sized + 'static>(&self) -> Arc<Registry<B>> {
		let key = TypeId::of::<B>();
		if let Some(existing) = self.registries.read().get(&key) {
			return downcast::<B>(Arc::clone(existing));
		}

		let erased = {
			let mut registries = self.registries.write();
			Arc::clone(registries.entry(key).or_insert_with(|| {
				tracing::debug!(base = type_name::<B>(), "registry created");
				Arc::new(Registry::<B>::new()) as ErasedRegistry
			}))
		};
		downcast::<B>(erased)
	}

	/// Returns the registry for `B` only if it already exists.
	pub fn get<B: ?Sized + 'static>(&self) -> Option<Arc<Registry<B>>> {
		let existing = Arc::clone(self.registries.read().get(&TypeId::of::<B>())?);
		Some(downcast::<B>(existing))
	}

	/// Returns the number of base types with a registry.
	pub fn len(&self) -> usize {
		self.registries.read().len()
	}

	/// Returns true if no registry has been created yet.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for RegistryTable {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for RegistryTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RegistryTable")
			.field("registries", &self.len())
			.finish()
	}
}

fn downcast<B: ?Sized + 'static>(erased: ErasedRegistry) -> Arc<Registry<B>> {
	match erased.downcast::<Registry<B>>() {
		Ok(registry) => registry,
		Err(_) => unreachable!("registry table entry stored under a foreign TypeId"),
	}
}
