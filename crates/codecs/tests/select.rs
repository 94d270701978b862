//! End-to-end: global startup, configuration-driven selection and
//! concurrent creation.

use nameplate_codecs::{Codec, select};
use nameplate_config::{Configurator, ParamNode};
use nameplate_registry::RegistryError;

fn configured(name: &str) -> Configurator {
	Configurator::new(ParamNode::new().with("codec.name", name))
}

#[test]
fn test_select_through_global_table() {
	let _ = tracing_subscriber::fmt::try_init();

	assert!(matches!(
		select(&configured("identity")),
		Err(RegistryError::NotStarted)
	));

	let table = nameplate_registry::startup().expect("startup succeeds");
	let codecs = nameplate_codecs::registry().expect("running");
	assert!(codecs.contains("identity"));
	assert_eq!(codecs.len(), table.registry::<dyn Codec>().len());

	let codec = select(&Configurator::default()).expect("identity is always linked");
	assert_eq!(codec.name(), "identity");

	assert!(matches!(
		select(&configured("morse")),
		Err(RegistryError::UnknownId { .. })
	));
	// The convenience wrapper reports absence as `None`.
	assert!(codecs.create("morse").is_none());

	#[cfg(feature = "xor")]
	{
		// Each thread gets its own xor state; a shared instance would drift.
		let config = configured("xor");
		let expected = select(&config).unwrap().encode(b"same input");
		std::thread::scope(|s| {
			let handles: Vec<_> = (0..8)
				.map(|_| {
					s.spawn(|| {
						let mut codec = select(&config).unwrap();
						let first = codec.encode(b"same input");
						let _ = codec.encode(b"advance the offset");
						first
					})
				})
				.collect();
			for handle in handles {
				assert_eq!(handle.join().unwrap(), expected);
			}
		});
	}

	nameplate_registry::shutdown();
	assert!(matches!(
		select(&configured("identity")),
		Err(RegistryError::ShutDown)
	));
}
