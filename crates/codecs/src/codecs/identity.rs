use crate::Codec;

/// Passes bytes through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Codec for Identity {
	fn name(&self) -> &'static str {
		"identity"
	}

	fn encode(&mut self, input: &[u8]) -> Vec<u8> {
		input.to_vec()
	}

	fn decode(&mut self, input: &[u8]) -> Vec<u8> {
		input.to_vec()
	}
}

nameplate_registry::registrar!(dyn Codec, Identity, "identity");
