//! Name-keyed factory registries.
//!
//! A [`Registry<B>`] maps string identifiers to [`Creator`]s that build fresh
//! `Box<B>` instances, where `B` is usually a trait object such as
//! `dyn Codec`. Concrete types join a registry by declaring a [`Registrar`]
//! with the [`registrar!`] macro; nothing else in the program needs to name
//! them.
//!
//! # Lifecycle
//!
//! Registrars are collected at link time and installed by an explicit startup
//! phase:
//!
//! 1. [`startup`] (or [`startup_with`]) builds the process-wide
//!    [`RegistryTable`] and installs every linked registrar in a
//!    deterministic order.
//! 2. [`registry`] hands out the single [`Registry<B>`] for a base type.
//!    Calling it before startup is an error rather than a silently
//!    incomplete registry.
//! 3. [`shutdown`] tears the table down. It cannot be restarted.
//!
//! Tests and embedders that do not want global state can build a
//! [`Registry`] or [`RegistryTable`] directly.
//!
//! # Example
//!
//! ```ignore
//! pub trait Shape: Send {
//!     fn sides(&self) -> u32;
//! }
//!
//! #[derive(Default)]
//! struct Square;
//!
//! impl Shape for Square {
//!     fn sides(&self) -> u32 {
//!         4
//!     }
//! }
//!
//! nameplate_registry::registrar!(dyn Shape, Square, "square");
//!
//! fn main() -> Result<(), nameplate_registry::RegistryError> {
//!     let _guard = nameplate_registry::startup_guard()?;
//!     let shape = nameplate_registry::registry::<dyn Shape>()?.try_create("square")?;
//!     assert_eq!(shape.sides(), 4);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod db;
mod macros;

pub use crate::core::{
	Creator, CreatorRef, Entries, Entry, FnCreator, InsertAction, Registrar, Registry,
	RegistryError, Submission,
};
pub use crate::db::{
	InstallReport, LifecycleGuard, RegistryTable, create, is_running, registry, shutdown, startup,
	startup_guard, startup_with, table,
};

#[doc(hidden)]
pub use inventory;
