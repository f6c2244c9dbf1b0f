use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rookery_core::STARTING_PLACEMENT;
use rookery_repl::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    info!(placement = STARTING_PLACEMENT, "rookery starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Session::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
