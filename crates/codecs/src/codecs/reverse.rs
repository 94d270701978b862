use crate::Codec;

/// Reverses each chunk.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reverse;

impl Codec for Reverse {
	fn name(&self) -> &'static str {
		"reverse"
	}

	fn encode(&mut self, input: &[u8]) -> Vec<u8> {
		input.iter().rev().copied().collect()
	}

	fn decode(&mut self, input: &[u8]) -> Vec<u8> {
		self.encode(input)
	}
}

nameplate_registry::registrar!(dyn Codec, Reverse, "reverse");
