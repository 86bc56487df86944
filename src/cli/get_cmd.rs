//! `callbridge get`: callback-bridge read rendered to the console.

use anyhow::Result;

/// Run the get command.
pub async fn run(endpoint: &str, timeout_ms: u64) -> Result<()> {
    let actions = super::build_actions(endpoint, timeout_ms)?;
    actions.trigger_get().await;
    Ok(())
}
