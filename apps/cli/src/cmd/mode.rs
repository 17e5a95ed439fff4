//! Data mode commands: show, set.

use anyhow::Result;
use clap::Subcommand;
use gateway::{DataMode, ModeStore};

/// Mode subcommands.
#[derive(Subcommand, Debug)]
pub enum ModeCommand {
    /// Show the persisted data mode.
    Show,
    /// Persist a new data mode.
    Set {
        /// `mock` or `live`.
        mode: String,
    },
}

/// Dispatch mode subcommands.
pub fn run(store: &ModeStore, action: &ModeCommand) -> Result<()> {
    match action {
        ModeCommand::Show => {
            println!("{}", store.mode());
            Ok(())
        }
        ModeCommand::Set { mode } => {
            let mode: DataMode = mode.parse()?;
            store.set_mode(mode)?;
            println!("Data mode set to {mode}. Takes effect on the next command.");
            Ok(())
        }
    }
}
