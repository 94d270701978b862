use super::table::RegistryTable;
use crate::core::{InsertAction, Submission};

/// Outcome of installing the linked registrars into a table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InstallReport {
	/// Registrars inserted under a new identifier.
	pub installed: usize,
	/// Registrars dropped because their identifier was already taken.
	pub kept_existing: usize,
}

/// Returns every linked [`Submission`] in installation order.
///
/// `inventory` yields submissions in an unspecified order, so they are sorted
/// by `(base, id, module, derived)` to keep "first registration wins"
/// deterministic across builds.
pub fn ordered_submissions() -> Vec<&'static Submission> {
	let mut submissions: Vec<&'static Submission> = inventory::iter::<Submission>.into_iter().collect();
	submissions.sort_by(|a, b| {
		a.base
			.cmp(b.base)
			.then_with(|| a.id.cmp(b.id))
			.then_with(|| a.module.cmp(b.module))
			.then_with(|| a.derived.cmp(b.derived))
	});
	submissions
}

/// Installs every linked registrar into `table`.
pub fn install_submissions(table: &RegistryTable) -> InstallReport {
	let mut report = InstallReport::default();
	for submission in ordered_submissions() {
		let action = (submission.install)(table);
		tracing::debug!(
			base = submission.base,
			id = submission.id,
			derived = submission.derived,
			module = submission.module,
			?action,
			"registrar installed",
		);
		match action {
			InsertAction::InsertedNew => report.installed += 1,
			InsertAction::KeptExisting => report.kept_existing += 1,
		}
	}
	report
}
