//! Configuration access for nameplate programs.
//!
//! A [`Configurator`] wraps a tree of [`Param`]s and resolves dotted names
//! (`codec.name`) to typed values, with default fallback. Programs use it to
//! choose which registry identifier to instantiate; the registries themselves
//! never read configuration.
//!
//! Building the tree from files or the command line is left to the caller.

pub mod configurator;
pub mod error;
pub mod node;
pub mod value;

pub use configurator::Configurator;
pub use error::{ConfigError, Result};
pub use node::{Param, ParamNode};
pub use value::{FromParamValue, ParamValue};
