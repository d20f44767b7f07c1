use std::collections::BTreeSet;

use strum::IntoEnumIterator;

use crate::Backend;

/// Answers whether a backend is usable in the current environment.
pub trait BackendOracle {
    fn is_available(&self, backend: Backend) -> bool;
}

impl<O: BackendOracle + ?Sized> BackendOracle for &O {
    fn is_available(&self, backend: Backend) -> bool {
        (**self).is_available(backend)
    }
}

/// The oracle used by default: a backend is available when its Cargo feature is enabled.
///
/// Feature selection happens at compile time, so the answer never changes while the process runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompiledBackends;

impl BackendOracle for CompiledBackends {
    fn is_available(&self, backend: Backend) -> bool {
        backend.is_compiled()
    }
}

/// An explicit set of available backends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendSet {
    available: BTreeSet<Backend>,
}

impl BackendSet {
    /// No backend available.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every known backend available.
    pub fn all() -> Self {
        Backend::iter().collect()
    }

    pub fn with(mut self, backend: Backend) -> Self {
        self.available.insert(backend);
        self
    }

    pub fn without(mut self, backend: Backend) -> Self {
        self.available.remove(&backend);
        self
    }

    pub fn contains(&self, backend: Backend) -> bool {
        self.available.contains(&backend)
    }
}

impl FromIterator<Backend> for BackendSet {
    fn from_iter<T: IntoIterator<Item = Backend>>(iter: T) -> Self {
        Self {
            available: iter.into_iter().collect(),
        }
    }
}

impl BackendOracle for BackendSet {
    fn is_available(&self, backend: Backend) -> bool {
        self.contains(backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_backends_follow_features() {
        let oracle = CompiledBackends;
        for backend in Backend::iter() {
            assert_eq!(oracle.is_available(backend), backend.is_compiled());
        }
    }

    #[test]
    fn backend_set_builders() {
        let set = BackendSet::empty().with(Backend::Vision);
        assert!(set.is_available(Backend::Vision));
        assert!(!set.is_available(Backend::Timm));

        let set = BackendSet::all().without(Backend::Timm);
        assert!(!set.is_available(Backend::Timm));
        assert!(set.is_available(Backend::Speech));
    }

    #[test]
    fn oracle_by_reference() {
        fn check(oracle: impl BackendOracle) -> bool {
            oracle.is_available(Backend::Torch)
        }

        let set: BackendSet = [Backend::Torch].into_iter().collect();
        assert!(check(&set));
        assert!(check(&set as &dyn BackendOracle));
    }
}
