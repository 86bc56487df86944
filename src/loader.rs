//! Script-loading capability.
//!
//! The original transport for callback-bridge reads is a dynamically
//! attached script element; outside a browser that collapses to fetching
//! the script body over plain HTTP. The trait keeps the capability
//! swappable per target environment.

use crate::error::BridgeError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Default transport timeout for script loads, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Something that can fetch an executable script resource.
#[async_trait]
pub trait ScriptLoader: Send + Sync {
    /// Fetch the script body at `url`. Any failure to deliver the body
    /// is the load failure; application-level errors arrive inside a
    /// successfully delivered body.
    async fn load(&self, url: &str) -> Result<String, BridgeError>;
}

/// Loader backed by a plain HTTP GET. No retries at any layer.
pub struct HttpScriptLoader {
    client: reqwest::Client,
}

impl HttpScriptLoader {
    pub fn new(timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!("callbridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

#[async_trait]
impl ScriptLoader for HttpScriptLoader {
    async fn load(&self, url: &str) -> Result<String, BridgeError> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            debug!("script request failed: {e}");
            BridgeError::ScriptLoadFailed
        })?;

        // A script element fires its error event on any non-success
        // status; mirror that here.
        if !resp.status().is_success() {
            debug!("script load returned status {}", resp.status());
            return Err(BridgeError::ScriptLoadFailed);
        }

        resp.text().await.map_err(|e| {
            debug!("script body read failed: {e}");
            BridgeError::ScriptLoadFailed
        })
    }
}
