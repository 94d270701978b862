/// Result of a registration attempt.
///
/// Registration never fails: a duplicate identifier keeps the existing
/// creator and reports [`InsertAction::KeptExisting`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Identifier was new; creator inserted.
	InsertedNew,
	/// Identifier existed; kept the existing creator and dropped the new one.
	KeptExisting,
}

impl InsertAction {
	/// Returns true if the creator was inserted.
	pub fn is_inserted(self) -> bool {
		self == InsertAction::InsertedNew
	}
}

/// Generic registry error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// No creator is registered under the identifier.
	#[error("no creator registered for <{id}> in {registry}")]
	UnknownId { registry: &'static str, id: String },

	/// The global table was accessed before [`crate::startup`].
	#[error("registry table accessed before startup")]
	NotStarted,

	/// The global table was accessed after [`crate::shutdown`].
	#[error("registry table already shut down")]
	ShutDown,
}
