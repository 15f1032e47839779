//! Gladiator console client.
//!
//! Composition root: loads configuration, installs file logging, asks the
//! player for a name and role, then drives a [`Runtime`] with a menu-based
//! action provider and prints every battle event.
//!
//! ```bash
//! # Reproducible battle against a named rogue
//! GLADIATOR_SEED=42 GLADIATOR_ENEMY_NAME=Vex GLADIATOR_ENEMY_ARCHETYPE=rogue \
//!     cargo run -p gladiator-client
//! ```

mod config;
mod input;
mod logging;
mod presentation;

use std::io::{self, Write};

use anyhow::{Context, Result};
use gladiator_core::{GameError, Side};
use gladiator_runtime::{Runtime, RuntimeConfig, RuntimeError};

use crate::config::ClientConfig;
use crate::input::MenuActionProvider;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let client_config = ClientConfig::from_env();
    let runtime_config = RuntimeConfig::from_env().context("invalid battle configuration")?;

    let _guard = logging::setup_logging(&client_config)?;
    tracing::info!("Starting gladiator client");
    tracing::info!(?runtime_config, "Battle configuration loaded");

    match play(&client_config, runtime_config) {
        Ok(winner) => {
            tracing::info!(%winner, "Client finished");
            Ok(())
        }
        Err(RuntimeError::InputClosed) => {
            tracing::warn!("Input closed before the battle finished");
            eprintln!("\nInput closed. Leaving the arena.");
            Ok(())
        }
        Err(err) => {
            tracing::error!(
                code = err.error_code(),
                severity = err.severity().as_str(),
                "Client aborted: {err}"
            );
            Err(err).context("battle aborted")
        }
    }
}

fn play(
    client_config: &ClientConfig,
    runtime_config: RuntimeConfig,
) -> gladiator_runtime::Result<Side> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    writeln!(output, "{}\n", presentation::TITLE)?;
    let name = input::prompt_name(&mut input, &mut output)?;
    let archetype = input::prompt_role(&mut input, &mut output)?;
    tracing::info!(%name, %archetype, "Player ready");

    let mut runtime = Runtime::builder()
        .config(runtime_config)
        .player(name, archetype)
        .provider(MenuActionProvider::new(input, io::stdout()))
        .build()?;
    if let Some(seed) = runtime.seed() {
        tracing::info!(seed, "Replay with GLADIATOR_SEED={seed}");
    }

    let bar_width = client_config.health_bar_width;
    let mut written: io::Result<()> = Ok(());
    let winner = runtime.run(|event| {
        if written.is_ok() {
            written = presentation::event_lines(event, bar_width)
                .iter()
                .try_for_each(|line| writeln!(output, "{line}"));
        }
    })?;
    written?;
    output.flush()?;

    Ok(winner)
}
