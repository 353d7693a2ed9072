//! HostelMate
//!
//! Main application entry point

use std::process::ExitCode;
use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use HostelMate::{
    config::Settings,
    handlers::{handle_command, Cli},
    services::TerminalSink,
    state::{AppContext, Outcome, SessionStore},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::load_from(&cli.config).context("failed to load settings")?;
    if let Some(session) = &cli.session {
        settings.session.storage_path = session.display().to_string();
    }
    settings.validate()?;

    // Initialize logging; the guard flushes the file appender on drop
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", HostelMate::info());

    let store = SessionStore::new(&settings.session.storage_path);
    let session = store
        .load_context()
        .await
        .with_context(|| format!("failed to read session storage {}", store.path().display()))?;
    if session.is_empty() {
        warn!(path = %store.path().display(), "Session storage has no identity records");
    }

    let ctx = AppContext::new(settings, session, Arc::new(TerminalSink))?;

    let mut stdout = std::io::stdout();
    let outcome = handle_command(&ctx, cli.command, &mut stdout).await?;

    Ok(match outcome {
        Outcome::Applied | Outcome::Discarded => ExitCode::SUCCESS,
        Outcome::Failed(_) => ExitCode::FAILURE,
    })
}
