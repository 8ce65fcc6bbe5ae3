//! scenekit-cli
//!
//! Headless front end: measures preset polygons and runs scene files.

// Modules
pub(crate) mod cli;
pub(crate) mod measure;
pub(crate) mod run;

fn main() -> anyhow::Result<()> {
    setup_logging()?;
    cli::run()
}

/// Log to stderr, filtered by `RUST_LOG`. Only warnings and errors are shown by default.
fn setup_logging() -> anyhow::Result<()> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
