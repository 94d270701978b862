//! The per-base-type identifier → creator map.
//!
//! # Role
//!
//! [`Registry<B>`] owns the authoritative mapping for one base type and
//! serializes every access through a single mutex. Object construction in
//! [`Registry::create`] runs while the lock is held, so a slow constructor
//! delays other operations on the same registry (registries for other base
//! types are unaffected).

use std::any::type_name;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::ops::Bound;
use std::sync::Arc;

use parking_lot::Mutex;

use super::creator::{Creator, CreatorRef, FnCreator};
use super::error::{InsertAction, RegistryError};

/// Name-keyed registry of creators for base type `B`.
///
/// Entries are only ever added; the first creator registered for an
/// identifier is permanent.
pub struct Registry<B: ?Sized + 'static> {
	label: &'static str,
	entries: Mutex<BTreeMap<Box<str>, CreatorRef<B>>>,
}

impl<B: ?Sized + 'static> Registry<B> {
	/// Creates an empty registry labelled with the base type's name.
	pub fn new() -> Self {
		Self::with_label(type_name::<B>())
	}

	/// Creates an empty registry with a custom diagnostic label.
	pub fn with_label(label: &'static str) -> Self {
		Self {
			label,
			entries: Mutex::new(BTreeMap::new()),
		}
	}

	/// Returns the label used in diagnostics.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Registers `creator` under `id`.
	///
	/// If `id` is already bound the existing creator is kept, a warning is
	/// logged and [`InsertAction::KeptExisting`] is returned.
	pub fn register(&self, id: impl Into<Box<str>>, creator: CreatorRef<B>) -> InsertAction {
		let id = id.into();
		let mut entries = self.entries.lock();
		match entries.entry(id) {
			btree_map::Entry::Occupied(existing) => {
				tracing::warn!(
					registry = self.label,
					id = %existing.key(),
					existing = existing.get().type_name(),
					rejected = creator.type_name(),
					"creator already registered; keeping the first",
				);
				InsertAction::KeptExisting
			}
			btree_map::Entry::Vacant(slot) => {
				tracing::trace!(
					registry = self.label,
					id = %slot.key(),
					derived = creator.type_name(),
					"creator registered",
				);
				slot.insert(creator);
				InsertAction::InsertedNew
			}
		}
	}

	/// Registers a `'static` creator.
	pub fn register_static(
		&self,
		id: impl Into<Box<str>>,
		creator: &'static dyn Creator<B>,
	) -> InsertAction {
		self.register(id, CreatorRef::Static(creator))
	}

	/// Registers a shared creator owned by the registry.
	pub fn register_shared(
		&self,
		id: impl Into<Box<str>>,
		creator: Arc<dyn Creator<B>>,
	) -> InsertAction {
		self.register(id, CreatorRef::Shared(creator))
	}

	/// Registers a bare constructor function.
	pub fn register_fn(
		&self,
		id: impl Into<Box<str>>,
		type_name: &'static str,
		build: fn() -> Box<B>,
	) -> InsertAction {
		self.register_shared(id, Arc::new(FnCreator::new(type_name, build)))
	}

	/// Builds a new instance of the type registered under `id`.
	///
	/// Returns `None` and logs an error if nothing is registered under `id`.
	pub fn create(&self, id: &str) -> Option<Box<B>> {
		match self.try_create(id) {
			Ok(object) => Some(object),
			Err(err) => {
				tracing::error!(registry = self.label, id, "{err}");
				None
			}
		}
	}

	/// Builds a new instance of the type registered under `id`.
	pub fn try_create(&self, id: &str) -> Result<Box<B>, RegistryError> {
		let entries = self.entries.lock();
		let creator = entries.get(id).ok_or_else(|| RegistryError::UnknownId {
			registry: self.label,
			id: id.to_owned(),
		})?;
		Ok(creator.create())
	}

	/// Builds a new instance from an enumeration handle, skipping the lookup.
	///
	/// An entry carries its own creator, so an entry taken from another
	/// `Registry<B>` still builds the type it was enumerated with. Use
	/// [`Registry::holds`] to reject foreign entries.
	pub fn create_entry(&self, entry: &Entry<B>) -> Box<B> {
		let _entries = self.entries.lock();
		entry.creator.create()
	}

	/// Returns a lazy iterator over the registered entries in identifier order.
	///
	/// Each step locks the registry independently. Entries registered while
	/// iterating show up if they sort after the current position.
	pub fn entries(&self) -> Entries<'_, B> {
		Entries {
			registry: self,
			cursor: None,
		}
	}

	/// Returns the registered identifiers, sorted, as of a single lock.
	pub fn ids(&self) -> Vec<String> {
		self.entries.lock().keys().map(|id| id.to_string()).collect()
	}

	/// Returns true if `entry` is bound in this registry to the same creator.
	pub fn holds(&self, entry: &Entry<B>) -> bool {
		self.entries
			.lock()
			.get(entry.id())
			.is_some_and(|creator| creator.same_as(&entry.creator))
	}

	/// Returns true if a creator is registered under `id`.
	pub fn contains(&self, id: &str) -> bool {
		self.entries.lock().contains_key(id)
	}

	/// Returns the number of registered creators.
	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	/// Returns true if no creators are registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<B: ?Sized + 'static> Default for Registry<B> {
	fn default() -> Self {
		Self::new()
	}
}

impl<B: ?Sized + 'static> fmt::Debug for Registry<B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("ids", &self.ids())
			.finish()
	}
}

/// Enumeration handle for one registered creator.
pub struct Entry<B: ?Sized + 'static> {
	id: Box<str>,
	creator: CreatorRef<B>,
}

impl<B: ?Sized + 'static> Entry<B> {
	/// Returns the identifier.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the concrete type name of the creator.
	pub fn type_name(&self) -> &'static str {
		self.creator.type_name()
	}
}

impl<B: ?Sized + 'static> Clone for Entry<B> {
	fn clone(&self) -> Self {
		Self {
			id: self.id.clone(),
			creator: self.creator.clone(),
		}
	}
}

impl<B: ?Sized + 'static> fmt::Debug for Entry<B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Entry")
			.field("id", &self.id)
			.field("creator", &self.creator)
			.finish()
	}
}

/// Lazy, restartable iterator over a registry's entries.
///
/// Remembers the last identifier it yielded and resumes strictly after it,
/// so the sequence is memory-safe under concurrent registration but is not a
/// single-point snapshot. Use [`Registry::ids`] for that.
pub struct Entries<'a, B: ?Sized + 'static> {
	registry: &'a Registry<B>,
	cursor: Option<Box<str>>,
}

impl<B: ?Sized + 'static> Entries<'_, B> {
	/// Restarts the enumeration from the first identifier.
	pub fn rewind(&mut self) {
		self.cursor = None;
	}
}

impl<B: ?Sized + 'static> Clone for Entries<'_, B> {
	fn clone(&self) -> Self {
		Self {
			registry: self.registry,
			cursor: self.cursor.clone(),
		}
	}
}

impl<B: ?Sized + 'static> Iterator for Entries<'_, B> {
	type Item = Entry<B>;

	fn next(&mut self) -> Option<Entry<B>> {
		let entry = {
			let entries = self.registry.entries.lock();
			let mut rest = match self.cursor.as_deref() {
				Some(last) => entries.range::<str, _>((Bound::Excluded(last), Bound::Unbounded)),
				None => entries.range::<str, _>(..),
			};
			let (id, creator) = rest.next()?;
			Entry {
				id: id.clone(),
				creator: creator.clone(),
			}
		};
		self.cursor = Some(entry.id.clone());
		Some(entry)
	}
}
