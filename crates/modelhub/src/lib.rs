//! Modelhub model library.
//!
//! Model families that depend on optional backends are only usable when the matching Cargo
//! features are enabled. Their public names are always exported: without the features they
//! are placeholders whose constructors return a [`MissingBackendError`] naming the features to
//! enable.

pub mod utils;

pub use modelhub_backends::{
    Backend, BackendOracle, BackendSet, CompiledBackends, DummyObject, MissingBackendError,
    RegistryEntry, requires_backends, requires_backends_with,
};
pub use modelhub_macros::DummyObject;
pub use utils::dummies::*;
