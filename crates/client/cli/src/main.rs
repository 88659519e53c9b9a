//! Terminal client entry point.
mod app;
mod config;
mod input;
mod presentation;
mod state;

use std::path::PathBuf;

use anyhow::Result;
use app::CliApp;
use config::CliConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // The TUI owns stdout, so logs only go to a file
    setup_logging(config.session_id.as_deref())?;

    CliApp::builder(config).build()?.execute().await
}

/// Setup logging to a per-session file.
fn setup_logging(session_id: Option<&str>) -> Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true); // colorized tail -f

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the whole process
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(())
}

/// Platform cache directory for logs, falling back to the system temp dir.
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "wardrobe")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("wardrobe").join("logs"))
}
