use crate::{Backend, BackendOracle, CompiledBackends, MissingBackendError};

/// Checks that every backend in `backends` was compiled in.
///
/// `name` identifies the object being used and ends up in the error message.
pub fn requires_backends(name: &str, backends: &[Backend]) -> Result<(), MissingBackendError> {
    requires_backends_with(&CompiledBackends, name, backends)
}

/// Same as [`requires_backends`], asking `oracle` instead of the compiled features.
pub fn requires_backends_with<O: BackendOracle + ?Sized>(
    oracle: &O,
    name: &str,
    backends: &[Backend],
) -> Result<(), MissingBackendError> {
    let missing: Vec<Backend> = backends
        .iter()
        .copied()
        .filter(|backend| !oracle.is_available(*backend))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    log::debug!("`{name}` is missing backends: {missing:?}");
    Err(MissingBackendError::new(name, missing))
}
