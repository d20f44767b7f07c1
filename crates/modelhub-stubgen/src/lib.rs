//! Generates the placeholder modules of `modelhub` from its backend registry.
//!
//! `registry.toml` lists, for each combination of optional backends, the public objects that
//! need them. Every combination becomes one `dummy_<backends>_objects.rs` module in which each
//! object is replaced by a placeholder that fails with a missing backend error. A `dummies.rs`
//! index ([`ModuleIndex`]) declares those modules and re-exports their objects. Everything is
//! checked in, and [`sync`] with [`Mode::Check`] verifies it still matches the registry.

mod error;
mod registry;
mod render;
mod sync;

pub use error::StubgenError;
pub use registry::{DummyItem, DummyModule, ObjectKind, Registry};
pub use render::ModuleIndex;
pub use sync::{Mode, StubgenConfig, SyncReport, sync};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn workspace_root() -> &'static Path {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .and_then(Path::parent)
            .expect("Should be able to locate the workspace root.")
    }

    #[test]
    fn checked_in_modules_match_the_registry() {
        let config = StubgenConfig::from_workspace_root(workspace_root());
        let report = sync(&config, Mode::Check).unwrap();
        assert!(!report.unchanged.is_empty());
    }

    #[test]
    fn checked_in_fixtures_match_their_registry() {
        let fixtures = workspace_root().join("crates/modelhub/src/utils/fixtures");
        let config = StubgenConfig::new(fixtures.join("registry.toml"), fixtures);
        let report = sync(&config, Mode::Check).unwrap();
        assert_eq!(report.unchanged.len(), 2);
    }
}
