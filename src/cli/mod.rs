//! CLI subcommand implementations for the callbridge binary.

pub mod get_cmd;
pub mod output;
pub mod post_cmd;

use crate::actions::Actions;
use crate::bridge::BridgeClient;
use crate::loader::HttpScriptLoader;
use crate::poster::Poster;
use crate::sink::{ConsoleTarget, OutputSink};
use anyhow::{Context, Result};
use std::sync::Arc;
use url::Url;

/// Default endpoint: the deployed Apps Script web app.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxidJ9lEVzLKQ3QB-zmsnhJgOB5PXDgVuYQC8biBizHkErDCc_PyrdINLCCiaovoUuKsg/exec";

/// Wire the production actions bundle: HTTP loader, poster, console
/// sink. With --quiet the sink is detached, so outcomes are dropped.
pub fn build_actions(endpoint: &str, timeout_ms: u64) -> Result<Actions> {
    let url = Url::parse(endpoint).context("invalid endpoint URL")?;

    let bridge = BridgeClient::new(Arc::new(HttpScriptLoader::new(timeout_ms)));
    let poster = Poster::new(url.as_str(), timeout_ms);
    let sink = if output::is_quiet() {
        OutputSink::detached()
    } else {
        OutputSink::new(Arc::new(ConsoleTarget))
    };

    Ok(Actions::new(bridge, poster, sink, url.as_str()))
}
