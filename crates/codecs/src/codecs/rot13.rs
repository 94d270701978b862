use crate::Codec;

/// Rotates ASCII letters by 13 places. Other bytes pass through.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rot13;

fn rotate(byte: u8) -> u8 {
	match byte {
		b'a'..=b'z' => b'a' + (byte - b'a' + 13) % 26,
		b'A'..=b'Z' => b'A' + (byte - b'A' + 13) % 26,
		_ => byte,
	}
}

impl Codec for Rot13 {
	fn name(&self) -> &'static str {
		"rot13"
	}

	fn encode(&mut self, input: &[u8]) -> Vec<u8> {
		input.iter().copied().map(rotate).collect()
	}

	fn decode(&mut self, input: &[u8]) -> Vec<u8> {
		self.encode(input)
	}
}

nameplate_registry::registrar!(dyn Codec, Rot13, "rot13");
