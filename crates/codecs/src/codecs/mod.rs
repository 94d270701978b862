mod identity;
#[cfg(feature = "reverse")]
mod reverse;
#[cfg(feature = "rot13")]
mod rot13;
#[cfg(feature = "xor")]
mod xor;

pub use identity::Identity;
#[cfg(feature = "reverse")]
pub use reverse::Reverse;
#[cfg(feature = "rot13")]
pub use rot13::Rot13;
#[cfg(feature = "xor")]
pub use xor::Xor;
