//! `callbridge post`: opaque POST beacon rendered to the console.

use anyhow::Result;

/// Run the post command.
pub async fn run(endpoint: &str, timeout_ms: u64) -> Result<()> {
    let actions = super::build_actions(endpoint, timeout_ms)?;
    actions.trigger_post().await;
    Ok(())
}
