//! Byte codecs that register themselves with the nameplate registry.
//!
//! Each concrete codec declares itself with [`nameplate_registry::registrar!`]
//! in its own module. Nothing here lists the codecs: whichever modules are
//! compiled in (see the crate features) are available after
//! [`nameplate_registry::startup`].
//!
//! ```no_run
//! use nameplate_config::{Configurator, ParamNode};
//!
//! nameplate_registry::startup().unwrap();
//! let config = Configurator::new(ParamNode::new().with("codec.name", "rot13"));
//! let mut codec = nameplate_codecs::select(&config).unwrap();
//! assert_eq!(codec.encode(b"abc"), b"nop");
//! ```

use std::sync::Arc;

use nameplate_config::Configurator;
use nameplate_registry::{Registry, RegistryError, RegistryTable};

mod codecs;

pub use codecs::Identity;
#[cfg(feature = "reverse")]
pub use codecs::Reverse;
#[cfg(feature = "rot13")]
pub use codecs::Rot13;
#[cfg(feature = "xor")]
pub use codecs::Xor;

/// Configuration key naming the codec to create.
pub const CODEC_KEY: &str = "codec.name";

/// Identifier used when the configuration names no codec.
pub const DEFAULT_CODEC: &str = "identity";

/// A byte-stream transformation.
///
/// Codecs may keep state between calls, so each consumer should create its
/// own instance.
pub trait Codec: Send {
	/// Registered identifier of this codec.
	fn name(&self) -> &'static str;

	/// Encodes the next chunk of a stream.
	fn encode(&mut self, input: &[u8]) -> Vec<u8>;

	/// Decodes the next chunk of a stream.
	fn decode(&mut self, input: &[u8]) -> Vec<u8>;
}

/// Returns the codec registry of the running global table.
pub fn registry() -> Result<Arc<Registry<dyn Codec>>, RegistryError> {
	nameplate_registry::registry::<dyn Codec>()
}

/// Creates the codec named by [`CODEC_KEY`] from the global registry.
///
/// Falls back to [`DEFAULT_CODEC`] when the key is absent or not a string.
pub fn select(config: &Configurator) -> Result<Box<dyn Codec>, RegistryError> {
	select_from(&*nameplate_registry::table()?, config)
}

/// Like [`select`], against an explicit table.
pub fn select_from(
	table: &RegistryTable,
	config: &Configurator,
) -> Result<Box<dyn Codec>, RegistryError> {
	let name = config.resolve_or(CODEC_KEY, DEFAULT_CODEC.to_string());
	tracing::debug!(codec = %name, "selecting codec");
	table.registry::<dyn Codec>().try_create(&name)
}

#[cfg(test)]
mod tests;
