use std::path::{Path, PathBuf};

use derive_new::new;

use crate::render::HEADER;
use crate::{ModuleIndex, Registry, StubgenError};

/// Where the registry lives and where the generated modules go.
#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct StubgenConfig {
    pub registry: PathBuf,
    pub output_dir: PathBuf,
}

impl StubgenConfig {
    pub const REGISTRY_PATH: &'static str = "crates/modelhub/registry.toml";
    pub const OUTPUT_DIR: &'static str = "crates/modelhub/src/utils";

    /// The default layout of the workspace rooted at `root`.
    pub fn from_workspace_root(root: &Path) -> Self {
        Self::new(root.join(Self::REGISTRY_PATH), root.join(Self::OUTPUT_DIR))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Rewrite every generated module that differs from the registry.
    Overwrite,
    /// Only report generated modules that differ from the registry.
    Check,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

/// Brings the generated modules and their index in line with the registry, or checks that
/// they are.
pub fn sync(config: &StubgenConfig, mode: Mode) -> Result<SyncReport, StubgenError> {
    let registry = Registry::from_path(&config.registry)?;
    let mut report = SyncReport::default();
    let mut out_of_date = Vec::new();

    let mut files: Vec<(PathBuf, String)> = registry
        .modules()
        .iter()
        .map(|module| (config.output_dir.join(module.file_name()), module.to_string()))
        .collect();
    files.push((
        config.output_dir.join(ModuleIndex::FILE_NAME),
        registry.index().to_string(),
    ));

    for (path, expected) in files {
        let current = match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => return Err(StubgenError::Io { path, source }),
        };

        if current.as_deref() == Some(expected.as_str()) {
            log::debug!("{} is up to date", path.display());
            report.unchanged.push(path);
            continue;
        }

        match mode {
            Mode::Check => {
                log::warn!("{} is out of date", path.display());
                out_of_date.push(path);
            }
            Mode::Overwrite => {
                std::fs::create_dir_all(&config.output_dir).map_err(|source| {
                    StubgenError::Io {
                        path: config.output_dir.clone(),
                        source,
                    }
                })?;
                std::fs::write(&path, expected).map_err(|source| StubgenError::Io {
                    path: path.clone(),
                    source,
                })?;
                log::info!("Updated {}", path.display());
                report.written.push(path);
            }
        }
    }

    warn_orphans(config, &registry)?;

    if !out_of_date.is_empty() {
        return Err(StubgenError::OutOfDate { files: out_of_date });
    }

    Ok(report)
}

/// Generated modules left behind by backend combinations that are no longer registered.
fn warn_orphans(config: &StubgenConfig, registry: &Registry) -> Result<(), StubgenError> {
    let entries = match std::fs::read_dir(&config.output_dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(source) => {
            return Err(StubgenError::Io {
                path: config.output_dir.clone(),
                source,
            });
        }
    };

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !(name.starts_with("dummy_") && name.ends_with("_objects.rs")) {
            continue;
        }
        if registry
            .modules()
            .iter()
            .any(|module| module.file_name() == name)
        {
            continue;
        }
        let is_generated = std::fs::read_to_string(entry.path())
            .map(|content| content.starts_with(HEADER))
            .unwrap_or(false);
        if is_generated {
            log::warn!(
                "{} is generated but no registry group uses its backends anymore",
                entry.path().display()
            );
        }
    }

    Ok(())
}
