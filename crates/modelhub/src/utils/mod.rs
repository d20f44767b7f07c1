use std::collections::HashMap;

use modelhub_backends::RegistryEntry;
use once_cell::sync::Lazy;

pub(crate) mod dummies;

pub use dummies::*;

static DUMMY_LOOKUP: Lazy<HashMap<&'static str, &'static RegistryEntry>> = Lazy::new(|| {
    dummy_objects()
        .map(|entry| (entry.name(), entry))
        .collect()
});

/// Every placeholder object exported by the crate.
pub fn dummy_objects() -> impl Iterator<Item = &'static RegistryEntry> {
    dummies::DUMMY_MODULES.iter().flat_map(|entries| entries.iter())
}

/// Looks up the placeholder registered under `name`, to inspect its requirements without
/// building it.
pub fn dummy_object(name: &str) -> Option<&'static RegistryEntry> {
    DUMMY_LOOKUP.get(name).copied()
}
