//! Erika CLI application: a terminal front end for the data-access
//! gateway: workspace views, search, config, and a streaming chat REPL.

pub use cmd::{Cli, Command};

pub mod cmd;
pub mod repl;
