//! Assistant config commands: show, set.

use anyhow::{Result, bail};
use clap::Subcommand;
use ecore::Tone;
use gateway::Gateway;

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the current assistant configuration.
    Show,
    /// Update one configuration field.
    Set {
        /// Field name (name, tone, consultant_mode, model).
        key: String,
        /// New value.
        value: String,
    },
}

/// Dispatch config subcommands.
pub async fn run(gateway: &Gateway, action: &ConfigCommand) -> Result<()> {
    match action {
        ConfigCommand::Show => show(gateway).await,
        ConfigCommand::Set { key, value } => set(gateway, key, value).await,
    }
}

async fn show(gateway: &Gateway) -> Result<()> {
    let config = gateway.get_config().await?;
    println!("Name:            {}", config.assistant_name);
    println!("Tone:            {:?}", config.tone);
    println!("Consultant mode: {}", config.consultant_mode);
    println!("Model:           {}", config.model);
    Ok(())
}

async fn set(gateway: &Gateway, key: &str, value: &str) -> Result<()> {
    let mut config = gateway.get_config().await?;
    match key {
        "name" => config.assistant_name = value.to_owned(),
        "model" => config.model = value.to_owned(),
        "consultant_mode" => {
            config.consultant_mode = value
                .parse()
                .map_err(|_| anyhow::anyhow!("expected true or false, got '{value}'"))?;
        }
        "tone" => {
            config.tone = match value {
                "formal" => Tone::Formal,
                "neutral" => Tone::Neutral,
                "casual" => Tone::Casual,
                other => bail!("unknown tone '{other}' (expected formal, neutral, or casual)"),
            };
        }
        other => bail!("unknown config key '{other}'"),
    }
    let updated = gateway.set_config(config).await?;
    println!("Set {key} = {value} ({})", updated.assistant_name);
    Ok(())
}
