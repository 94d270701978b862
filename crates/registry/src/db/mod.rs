//! Process-wide registry table and its startup/shutdown lifecycle.
//!
//! The global table moves through four phases:
//!
//! | Phase | Entered by | `registry::<B>()` |
//! |-------|------------|-------------------|
//! | uninitialized | process start | [`RegistryError::NotStarted`] |
//! | starting | [`startup`] / [`startup_with`], while installing | [`RegistryError::NotStarted`] |
//! | running | startup completing | the registry for `B` |
//! | shut down | [`shutdown`] | [`RegistryError::ShutDown`] |
//!
//! Startup installs every linked registrar before the table becomes visible,
//! so no caller can observe a registry that is still missing entries.

use std::ops::Deref;
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};

pub mod plugin;
mod table;

pub use plugin::InstallReport;
pub use table::RegistryTable;

use crate::core::{Registry, RegistryError};

enum Phase {
	Uninitialized,
	/// Registrars are being installed; nothing is published yet.
	Starting,
	Running(Arc<RegistryTable>),
	ShutDown,
}

static PHASE: RwLock<Phase> = RwLock::new(Phase::Uninitialized);

/// Serializes startup attempts. Reentrant so a registration callback that
/// calls [`startup`] sees `Starting` instead of waiting on itself.
static STARTUP: ReentrantMutex<()> = parking_lot::const_reentrant_mutex(());

impl RegistryTable {
	/// Installs every linked registrar into this table.
	pub fn install_submissions(&self) -> InstallReport {
		plugin::install_submissions(self)
	}
}

/// Starts the global table, installing every linked registrar.
///
/// Idempotent while running: later calls return the same table.
pub fn startup() -> Result<Arc<RegistryTable>, RegistryError> {
	startup_with(|_| {})
}

/// Starts the global table and runs `register` on first start.
///
/// `register` runs after the linked registrars are installed and before the
/// table is published, with no lifecycle lock held. It must use the table it
/// is given: until startup completes the global accessors report
/// [`RegistryError::NotStarted`]. Other threads calling [`startup`] meanwhile
/// wait and then receive the published table.
///
/// If `register` panics the global table returns to the uninitialized phase.
pub fn startup_with(
	register: impl FnOnce(&RegistryTable),
) -> Result<Arc<RegistryTable>, RegistryError> {
	start(register).map(|(table, _)| table)
}

/// Runs startup, reporting whether this call built the table.
fn start(
	register: impl FnOnce(&RegistryTable),
) -> Result<(Arc<RegistryTable>, bool), RegistryError> {
	let _serial = STARTUP.lock();
	{
		let mut phase = PHASE.write();
		match &*phase {
			Phase::Running(table) => return Ok((Arc::clone(table), false)),
			Phase::Starting => return Err(RegistryError::NotStarted),
			Phase::ShutDown => return Err(RegistryError::ShutDown),
			Phase::Uninitialized => *phase = Phase::Starting,
		}
	}
	let _pending = PendingStart;

	let table = Arc::new(RegistryTable::new());
	let report = table.install_submissions();
	register(&table);

	let mut phase = PHASE.write();
	if !matches!(&*phase, Phase::Starting) {
		// shut down while installing
		return Err(RegistryError::ShutDown);
	}
	*phase = Phase::Running(Arc::clone(&table));
	drop(phase);

	tracing::info!(
		installed = report.installed,
		kept_existing = report.kept_existing,
		registries = table.len(),
		"registry table started",
	);
	Ok((table, true))
}

/// Rolls an unfinished startup back to `Uninitialized`.
struct PendingStart;

impl Drop for PendingStart {
	fn drop(&mut self) {
		let mut phase = PHASE.write();
		if matches!(&*phase, Phase::Starting) {
			*phase = Phase::Uninitialized;
		}
	}
}

/// Shuts the global table down.
///
/// The table is destroyed once the last outstanding handle is dropped.
/// Further access fails with [`RegistryError::ShutDown`]; calling this twice
/// is harmless.
pub fn shutdown() {
	let previous = std::mem::replace(&mut *PHASE.write(), Phase::ShutDown);
	if let Phase::Running(table) = previous {
		tracing::info!(registries = table.len(), "registry table shut down");
	}
}

/// Returns true between [`startup`] and [`shutdown`].
pub fn is_running() -> bool {
	matches!(&*PHASE.read(), Phase::Running(_))
}

/// Returns the global table.
pub fn table() -> Result<Arc<RegistryTable>, RegistryError> {
	match &*PHASE.read() {
		Phase::Running(table) => Ok(Arc::clone(table)),
		Phase::Uninitialized | Phase::Starting => Err(RegistryError::NotStarted),
		Phase::ShutDown => Err(RegistryError::ShutDown),
	}
}

/// Returns the global registry for base type `B`.
pub fn registry<B: ?Sized + 'static>() -> Result<Arc<Registry<B>>, RegistryError> {
	Ok(table()?.registry::<B>())
}

/// Builds a new `B` registered under `id` in the global table.
///
/// The outer `Result` reports lifecycle misuse; the inner `Option` is `None`
/// for an unknown identifier, as with [`Registry::create`].
pub fn create<B: ?Sized + 'static>(id: &str) -> Result<Option<Box<B>>, RegistryError> {
	Ok(registry::<B>()?.create(id))
}

/// Starts the global table and returns a guard that shuts it down on drop.
///
/// If the table was already running, the guard does not own it and dropping
/// the guard leaves it running.
pub fn startup_guard() -> Result<LifecycleGuard, RegistryError> {
	let (table, owner) = start(|_| {})?;
	Ok(LifecycleGuard { table, owner })
}

/// Scope guard for the global table.
///
/// Only the guard whose call performed startup shuts the table down.
#[must_use = "dropping the guard may shut the registry table down"]
#[derive(Debug)]
pub struct LifecycleGuard {
	table: Arc<RegistryTable>,
	owner: bool,
}

impl LifecycleGuard {
	/// Returns true if dropping this guard shuts the table down.
	pub fn owns_table(&self) -> bool {
		self.owner
	}
}

impl Deref for LifecycleGuard {
	type Target = RegistryTable;

	fn deref(&self) -> &RegistryTable {
		&self.table
	}
}

impl Drop for LifecycleGuard {
	fn drop(&mut self) {
		if self.owner {
			shutdown();
		}
	}
}
