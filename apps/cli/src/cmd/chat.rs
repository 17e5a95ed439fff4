//! Interactive chat REPL command.

use crate::repl::ChatRepl;
use anyhow::Result;
use gateway::Gateway;

/// Enter the interactive REPL on the default thread.
pub async fn run(gateway: Gateway) -> Result<()> {
    let mut repl = ChatRepl::new(gateway, "thread-default")?;
    repl.run().await
}
