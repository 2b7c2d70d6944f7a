//! Mini Library - interactive library catalog

use std::io;

use mini_library::{cli, config::AppConfig, logging, repository::Repository, services::Services};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let _guard = logging::init_tracing(&config.logging);

    tracing::info!("Starting Mini Library v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        genres = config.library.genres.len(),
        max_loans = config.library.max_loans_per_member,
        "Loaded configuration"
    );

    let mut services = Services::new(Repository::new(), config.library);

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(&mut services, stdin.lock(), stdout.lock())?;

    tracing::info!("Mini Library stopped");
    Ok(())
}
