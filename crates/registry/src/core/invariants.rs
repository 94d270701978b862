use std::collections::HashSet;

use super::test_fixtures::{Shape, counter, square, triangle};
use crate::core::{InsertAction, Registry};

/// Invariant: MUST keep the first creator registered for an identifier.
pub(crate) fn inv_first_registration_wins() {
	let registry = Registry::<dyn Shape>::new();

	assert_eq!(registry.register_fn("x", "Square", square), InsertAction::InsertedNew);
	assert_eq!(
		registry.register_fn("x", "Triangle", triangle),
		InsertAction::KeptExisting
	);

	let shape = registry.create("x").expect("x must resolve");
	assert_eq!(shape.sides(), 4, "first registration must stay bound");
	assert_eq!(registry.len(), 1);
}

#[cfg_attr(test, test)]
pub(crate) fn test_first_registration_wins() {
	inv_first_registration_wins()
}

/// Invariant: MUST hand out a new, exclusively owned object per `create`.
pub(crate) fn inv_fresh_instance_per_create() {
	let registry = Registry::<dyn Shape>::new();
	registry.register_fn("counter", "Counter", counter);

	let mut a = registry.create("counter").unwrap();
	let mut b = registry.create("counter").unwrap();

	assert_eq!(a.bump(), 1);
	assert_eq!(a.bump(), 2);
	assert_eq!(b.bump(), 1, "state must not be shared between instances");
	assert!(!std::ptr::addr_eq(&*a as *const dyn Shape, &*b as *const dyn Shape));
}

#[cfg_attr(test, test)]
pub(crate) fn test_fresh_instance_per_create() {
	inv_fresh_instance_per_create()
}

/// Invariant: MUST NOT lose concurrent registrations of disjoint identifiers.
pub(crate) fn inv_concurrent_disjoint_registration() {
	const THREADS: usize = 8;
	const PER_THREAD: usize = 64;

	let registry = Registry::<dyn Shape>::new();

	std::thread::scope(|s| {
		for t in 0..THREADS {
			let registry = &registry;
			s.spawn(move || {
				for i in 0..PER_THREAD {
					let action = registry.register_fn(format!("t{t}-{i}"), "Square", square);
					assert_eq!(action, InsertAction::InsertedNew);
				}
			});
		}
	});

	assert_eq!(registry.len(), THREADS * PER_THREAD);
	for t in 0..THREADS {
		for i in 0..PER_THREAD {
			assert!(registry.contains(&format!("t{t}-{i}")));
		}
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_concurrent_disjoint_registration() {
	inv_concurrent_disjoint_registration()
}

/// Invariant: concurrent `create` calls MUST each receive an independent object.
pub(crate) fn inv_concurrent_create_distinct() {
	const THREADS: usize = 8;
	const PER_THREAD: usize = 32;

	let registry = Registry::<dyn Shape>::new();
	registry.register_fn("counter", "Counter", counter);

	let objects: Vec<Box<dyn Shape>> = std::thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|_| {
				let registry = &registry;
				s.spawn(move || {
					(0..PER_THREAD)
						.map(|_| {
							let mut object = registry.create("counter").unwrap();
							assert_eq!(object.bump(), 1, "fresh object expected");
							object
						})
						.collect::<Vec<_>>()
				})
			})
			.collect();
		handles
			.into_iter()
			.flat_map(|h| h.join().unwrap())
			.collect()
	});

	assert_eq!(objects.len(), THREADS * PER_THREAD);
	let addresses: HashSet<usize> = objects
		.iter()
		.map(|o| &**o as *const dyn Shape as *const () as usize)
		.collect();
	assert_eq!(addresses.len(), objects.len(), "every create must allocate anew");
}

#[cfg_attr(test, test)]
pub(crate) fn test_concurrent_create_distinct() {
	inv_concurrent_create_distinct()
}

/// Invariant: enumeration after N distinct registrations MUST yield exactly N identifiers.
pub(crate) fn inv_enumeration_count() {
	let registry = Registry::<dyn Shape>::new();
	for i in 0..10 {
		registry.register_fn(format!("shape-{i}"), "Triangle", triangle);
	}
	registry.register_fn("shape-3", "Square", square);

	let ids: Vec<String> = registry.entries().map(|e| e.id().to_string()).collect();
	let unique: HashSet<&String> = ids.iter().collect();
	assert_eq!(ids.len(), 10);
	assert_eq!(unique.len(), 10);
}

#[cfg_attr(test, test)]
pub(crate) fn test_enumeration_count() {
	inv_enumeration_count()
}
