use crate::{Backend, BackendOracle, MissingBackendError, requires_backends_with};

/// A public object name together with the backends its real implementation requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegistryEntry {
    name: &'static str,
    backends: &'static [Backend],
}

impl RegistryEntry {
    pub const fn new(name: &'static str, backends: &'static [Backend]) -> Self {
        Self { name, backends }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn backends(&self) -> &'static [Backend] {
        self.backends
    }

    /// Runs the backend check for this object.
    pub fn require<O: BackendOracle + ?Sized>(&self, oracle: &O) -> Result<(), MissingBackendError> {
        requires_backends_with(oracle, self.name, self.backends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BackendSet;

    static ENTRY: RegistryEntry =
        RegistryEntry::new("WidgetModel", &[Backend::Timm, Backend::Vision]);

    #[test]
    fn require_uses_declared_backends() {
        let err = ENTRY
            .require(&BackendSet::empty().with(Backend::Timm))
            .unwrap_err();
        assert_eq!(err.name(), "WidgetModel");
        assert_eq!(err.missing(), &[Backend::Vision]);

        assert!(ENTRY.require(&BackendSet::all()).is_ok());
    }
}
