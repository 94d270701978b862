use crate::Codec;

const DEFAULT_KEY: u8 = 0x5a;

/// XORs each byte with a keystream derived from its stream offset.
///
/// The encoder and decoder sides keep separate offsets, so a stream encoded
/// in chunks by one instance decodes in chunks on another. Sharing an
/// instance between two streams corrupts both.
#[derive(Debug, Clone)]
pub struct Xor {
	key: u8,
	encoded: u64,
	decoded: u64,
}

impl Xor {
	/// Creates a codec with a custom key.
	pub fn with_key(key: u8) -> Self {
		Self {
			key,
			encoded: 0,
			decoded: 0,
		}
	}

	/// Number of bytes encoded so far.
	pub fn encoded(&self) -> u64 {
		self.encoded
	}

	/// Number of bytes decoded so far.
	pub fn decoded(&self) -> u64 {
		self.decoded
	}
}

impl Default for Xor {
	fn default() -> Self {
		Self::with_key(DEFAULT_KEY)
	}
}

fn apply(key: u8, offset: &mut u64, input: &[u8]) -> Vec<u8> {
	let out = input
		.iter()
		.zip(*offset..)
		.map(|(&byte, pos)| byte ^ key ^ (pos as u8))
		.collect();
	*offset += input.len() as u64;
	out
}

impl Codec for Xor {
	fn name(&self) -> &'static str {
		"xor"
	}

	fn encode(&mut self, input: &[u8]) -> Vec<u8> {
		apply(self.key, &mut self.encoded, input)
	}

	fn decode(&mut self, input: &[u8]) -> Vec<u8> {
		apply(self.key, &mut self.decoded, input)
	}
}

nameplate_registry::registrar!(dyn Codec, Xor, "xor");
