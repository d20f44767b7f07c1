use env_logger::{Builder, Env};

/// Logger for the xtask commands, `info` by default and overridable with `RUST_LOG`.
pub(crate) fn init_logger() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp(None).format_target(false);
    builder
}
