//! Glue code tying content loading, the engine, and the terminal UI together.
use anyhow::{Context, Result};
use tokio::time::Duration;
use wardrobe_content::ContentFactory;
use wardrobe_core::{Catalog, Wardrobe};

use crate::config::CliConfig;
use crate::presentation::{EventLoop, terminal};
use crate::state::AppState;

pub struct CliApp {
    config: CliConfig,
    catalog: Catalog,
    wardrobe: Wardrobe,
}

pub struct CliAppBuilder {
    config: CliConfig,
}

impl CliAppBuilder {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Loads content from the data directory and builds the engine.
    pub fn build(self) -> Result<CliApp> {
        let factory = ContentFactory::new(self.config.data_dir.clone());
        let catalog = factory.load_catalog()?;
        let engine_config = factory.load_config()?;
        let wardrobe = Wardrobe::from_catalog(&catalog, engine_config).with_context(|| {
            format!("Invalid catalog in {}", factory.data_dir().display())
        })?;

        for issue in wardrobe.diagnostics() {
            tracing::warn!("catalog: {}", issue);
        }

        Ok(CliApp {
            config: self.config,
            catalog,
            wardrobe,
        })
    }
}

impl CliApp {
    pub fn builder(config: CliConfig) -> CliAppBuilder {
        CliAppBuilder::new(config)
    }

    pub async fn execute(self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let CliApp {
            config,
            catalog,
            wardrobe,
        } = self;

        let mut app_state = AppState::new(config.message_capacity);
        let frame = wardrobe.frame();
        app_state
            .messages
            .info(frame, "Click a garment to cycle its rod, drag it onto the body to wear it.");
        if !wardrobe.diagnostics().is_empty() {
            app_state.messages.warn(
                frame,
                format!("{} catalog issue(s) found", wardrobe.diagnostics().len()),
            );
        }

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let event_loop = EventLoop::new(
            catalog,
            wardrobe,
            app_state,
            Duration::from_millis(config.frame_interval_ms),
        );
        let wardrobe = event_loop.run(&mut terminal).await?;

        tracing::info!(
            "CLI client shutting down: {} item(s) worn after {} frames",
            wardrobe.worn().len(),
            wardrobe.frame()
        );
        Ok(())
    }
}
