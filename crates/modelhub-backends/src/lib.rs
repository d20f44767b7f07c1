//! Backend requirements for Modelhub objects.
//!
//! Some model families only work when optional backends are compiled in. When they are not,
//! the library still exports the public names as placeholder objects (see [`DummyObject`])
//! whose construction fails with a [`MissingBackendError`] naming what to enable.

mod backend;
mod dummy;
mod error;
mod oracle;
mod registry;
mod requirement;

pub use backend::Backend;
pub use dummy::{Checked, DummyObject};
pub use error::MissingBackendError;
pub use oracle::{BackendOracle, BackendSet, CompiledBackends};
pub use registry::RegistryEntry;
pub use requirement::{requires_backends, requires_backends_with};
