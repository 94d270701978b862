//! Shared registry infrastructure.
//!
//! # Mental Model
//!
//! 1. **Creators:** a [`Creator<B>`] is a stateless factory that builds one
//!    concrete type and returns it as `Box<B>`.
//! 2. **Registrars:** a [`Registrar<B, D>`] is the `static` creator for a
//!    concrete type `D`. The `registrar!` macro declares one and submits a
//!    [`Submission`] so the startup phase can install it.
//! 3. **Registries:** a [`Registry<B>`] maps identifiers to creators behind a
//!    single mutex and builds a fresh object on every `create`.
//!
//! # Invariants
//!
//! - Must keep the first creator registered for an identifier.
//!   - Enforced in: [`Registry::register`].
//!   - Tested by: `invariants::test_first_registration_wins`.
//!   - Failure symptom: `create` switches concrete type after a late duplicate.
//!
//! - Must hand out a new, exclusively owned object per `create`.
//!   - Enforced in: [`Registry::try_create`] (no caching).
//!   - Tested by: `invariants::test_fresh_instance_per_create`.
//!   - Failure symptom: state leaks between callers.
//!
//! - Must not lose concurrent registrations.
//!   - Enforced in: [`Registry::register`] (single mutex).
//!   - Tested by: `invariants::test_concurrent_disjoint_registration`.
//!   - Failure symptom: identifiers missing from enumeration.

mod creator;
mod error;
mod registrar;
mod registry;

pub use creator::{Creator, CreatorRef, FnCreator};
pub use error::{InsertAction, RegistryError};
pub use registrar::{Registrar, Submission};
pub use registry::{Entries, Entry, Registry};

#[cfg(test)]
pub(crate) mod invariants;

#[cfg(test)]
pub(crate) mod test_fixtures;
