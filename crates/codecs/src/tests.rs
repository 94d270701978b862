use nameplate_config::{Configurator, ParamNode};
use nameplate_registry::RegistryTable;
use proptest::prelude::*;

use super::*;

fn installed() -> RegistryTable {
	let table = RegistryTable::new();
	table.install_submissions();
	table
}

fn configured(name: &str) -> Configurator {
	Configurator::new(ParamNode::new().with(CODEC_KEY, name))
}

/// Every compiled-in codec is registered under its own name.
#[test]
fn test_linked_codecs_registered() {
	let table = installed();
	let registry = table.registry::<dyn Codec>();

	let mut expected = vec!["identity"];
	if cfg!(feature = "reverse") {
		expected.push("reverse");
	}
	if cfg!(feature = "rot13") {
		expected.push("rot13");
	}
	if cfg!(feature = "xor") {
		expected.push("xor");
	}
	assert_eq!(registry.ids(), expected);

	for entry in registry.entries() {
		let codec = registry.create_entry(&entry);
		assert_eq!(codec.name(), entry.id());
	}
}

#[test]
fn test_select_defaults_to_identity() {
	let table = installed();

	let mut codec = select_from(&table, &Configurator::default()).unwrap();
	assert_eq!(codec.name(), DEFAULT_CODEC);
	assert_eq!(codec.encode(b"plain"), b"plain");
}

#[test]
fn test_select_mistyped_name_defaults() {
	let table = installed();
	let config = Configurator::new(ParamNode::new().with(CODEC_KEY, 13_i64));

	let codec = select_from(&table, &config).unwrap();
	assert_eq!(codec.name(), DEFAULT_CODEC);
}

#[test]
fn test_select_unknown() {
	let table = installed();

	let err = select_from(&table, &configured("base64")).err();
	assert!(matches!(
		err,
		Some(RegistryError::UnknownId { ref id, .. }) if id == "base64"
	));
}

#[cfg(feature = "rot13")]
#[test]
fn test_rot13() {
	let mut codec = Rot13;
	assert_eq!(codec.encode(b"Hello, World!"), b"Uryyb, Jbeyq!");
	assert_eq!(codec.decode(b"Uryyb"), b"Hello");
}

#[cfg(feature = "reverse")]
#[test]
fn test_reverse() {
	let table = installed();
	let mut codec = select_from(&table, &configured("reverse")).unwrap();
	assert_eq!(codec.encode(b"abc"), b"cba");
}

/// Chunk boundaries do not change the encoded stream.
#[cfg(feature = "xor")]
#[test]
fn test_xor_stream_offsets() {
	let mut whole = Xor::default();
	let mut chunked = Xor::default();

	let expected = whole.encode(b"nameplate");
	let mut got = chunked.encode(b"name");
	got.extend(chunked.encode(b"plate"));

	assert_eq!(got, expected);
	assert_eq!(chunked.encoded(), 9);
	assert_eq!(chunked.decoded(), 0);
}

/// Instances from the registry start from a clean offset.
#[cfg(feature = "xor")]
#[test]
fn test_xor_instances_independent() {
	let table = installed();
	let config = configured("xor");

	let mut first = select_from(&table, &config).unwrap();
	let one = first.encode(b"abc");
	let _ = first.encode(b"more");

	let mut second = select_from(&table, &config).unwrap();
	assert_eq!(second.encode(b"abc"), one);
}

proptest! {
	#[cfg(feature = "rot13")]
	#[test]
	fn prop_rot13_involution(input in proptest::collection::vec(any::<u8>(), 0..256)) {
		let mut codec = Rot13;
		let once = codec.encode(&input);
		prop_assert_eq!(codec.encode(&once), input);
	}

	#[cfg(feature = "xor")]
	#[test]
	fn prop_xor_chunked_round_trip(
		input in proptest::collection::vec(any::<u8>(), 0..256),
		split in any::<prop::sample::Index>(),
	) {
		let at = split.index(input.len() + 1);
		let (head, tail) = input.split_at(at);

		let mut encoder = Xor::with_key(0x17);
		let mut decoder = Xor::with_key(0x17);
		let mut encoded = encoder.encode(head);
		encoded.extend(encoder.encode(tail));

		let (first, second) = encoded.split_at(encoded.len() / 2);
		let mut decoded = decoder.decode(first);
		decoded.extend(decoder.decode(second));
		prop_assert_eq!(decoded, input);
	}
}
