use std::path::{Path, PathBuf};

use clap::Args;
use modelhub_stubgen::{Mode, StubgenConfig, sync};

#[derive(Args, Debug)]
pub(crate) struct FixCopiesCmdArgs {
    /// Only check that the placeholder modules are up to date, without writing them.
    #[arg(long)]
    check: bool,
    /// Path to the backend registry.
    #[arg(long)]
    registry: Option<PathBuf>,
    /// Directory the placeholder modules are written to.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl FixCopiesCmdArgs {
    fn config(&self) -> StubgenConfig {
        let mut config = StubgenConfig::from_workspace_root(workspace_root());
        if let Some(registry) = &self.registry {
            config.registry = registry.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        config
    }

    fn mode(&self) -> Mode {
        if self.check { Mode::Check } else { Mode::Overwrite }
    }
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or_else(|| Path::new("."))
}

pub(crate) fn handle_command(args: FixCopiesCmdArgs) -> anyhow::Result<()> {
    let config = args.config();
    info!("Reading backend registry {}", config.registry.display());

    let report = sync(&config, args.mode())?;
    match (args.mode(), report.written.len()) {
        (Mode::Check, _) => info!("All placeholder modules are up to date"),
        (Mode::Overwrite, 0) => info!("Nothing to update"),
        (Mode::Overwrite, count) => info!("Updated {count} placeholder module(s)"),
    }

    Ok(())
}
