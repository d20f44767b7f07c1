use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StubgenError {
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse the registry: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Group {group} of the registry does not list any backend")]
    EmptyBackends { group: usize },
    #[error("Unknown backend '{0}'")]
    UnknownBackend(String),
    #[error("Backend '{backend}' is listed more than once in group {group}")]
    DuplicateBackend { backend: String, group: usize },
    #[error(
        "Invalid object name '{0}': expected an UpperCamelCase, UPPER_SNAKE_CASE or lower_snake_case name that is neither a Rust keyword nor used by the generated modules"
    )]
    InvalidName(String),
    #[error("Object '{0}' is registered more than once")]
    DuplicateObject(String),
    #[error(
        "{} are out of date with the registry. Run `cargo xtask fix-copies` to fix this.",
        display_files(.files)
    )]
    OutOfDate { files: Vec<PathBuf> },
}

fn display_files(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|file| file.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
