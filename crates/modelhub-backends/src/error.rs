use crate::Backend;

/// Returned when an object is used while some of the backends it requires are not available.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", missing_backends_message(.name, .missing))]
pub struct MissingBackendError {
    name: String,
    missing: Vec<Backend>,
}

impl MissingBackendError {
    pub fn new(name: impl Into<String>, missing: Vec<Backend>) -> Self {
        Self {
            name: name.into(),
            missing,
        }
    }

    /// The name of the object that was used.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The missing backends, in the order the object declares them.
    pub fn missing(&self) -> &[Backend] {
        &self.missing
    }
}

fn missing_backends_message(name: &str, missing: &[Backend]) -> String {
    missing
        .iter()
        .map(|backend| {
            format!(
                "`{name}` requires the {backend} backend ({}) but it was not found in your environment. \
                 You can enable it with the `{backend}` feature: `cargo add modelhub --features {backend}`.",
                backend.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
