// Portal entry point.
//
// Startup sequence:
// 1. Load config (built-in defaults when config/portal.toml is absent)
// 2. Initialize tracing (log to file, not terminal)
// 3. Build the portal state (static catalog, seeded comments)
// 4. Run the TUI event loop until the user quits

use opndocs::app::PortalState;
use opndocs::config;
use opndocs::tui;

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing (log to file, not terminal)
    init_tracing(&config)?;
    info!(
        "Opn Docs portal starting up (tick rate {:?}, log filter {})",
        config.tick_rate, config.log_filter
    );

    // 3. Build the portal state
    let state = PortalState::new();
    info!(
        "Portal ready: section {:?}, {} seeded comments",
        state.nav.active_section,
        state.board.len()
    );

    // 4. Run the TUI event loop (blocking until the user quits)
    tui::run(state, config.tick_rate)
        .await
        .context("TUI loop failed")?;

    info!("Portal shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by
/// the TUI).
fn init_tracing(config: &config::Config) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    std::fs::create_dir_all(&config.log_dir)?;
    let log_file = std::fs::File::create(config.log_dir.join("opndocs.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone())),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
