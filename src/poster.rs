//! Direct poster: fire-and-forget JSON writes.
//!
//! The endpoint accepts cross-origin writes only in a mode that hides
//! the response from the caller, so a send produces a transport-level
//! receipt and nothing more. Whether the remote application accepted
//! the payload is unobservable by design.

use crate::error::BridgeError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// The fixed beacon payload shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Beacon {
    /// Origin tag for the write.
    pub source: String,
    /// ISO-8601 timestamp of the send.
    pub timestamp: String,
}

impl Beacon {
    /// Beacon stamped at `at`.
    pub fn at(at: DateTime<Utc>) -> Self {
        Self {
            source: "github".to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Proof that the transport call returned without throwing. Carries no
/// response data: the send mode discards body and status visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostReceipt;

/// Sends opaque POST beacons to one endpoint.
#[derive(Clone)]
pub struct Poster {
    client: reqwest::Client,
    endpoint: String,
}

impl Poster {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(concat!("callbridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Send a beacon stamped with the current time.
    pub async fn send(&self) -> Result<PostReceipt, BridgeError> {
        self.send_at(Utc::now()).await
    }

    /// Send a beacon stamped at a caller-supplied instant.
    ///
    /// Resolves once the transport call returns; the response is
    /// dropped unread. Fails only on transport-level errors.
    pub async fn send_at(&self, at: DateTime<Utc>) -> Result<PostReceipt, BridgeError> {
        let beacon = Beacon::at(at);
        debug!(timestamp = %beacon.timestamp, "posting beacon");

        self.client
            .post(&self.endpoint)
            .json(&beacon)
            .send()
            .await
            .map_err(|e| BridgeError::Transport(e.to_string()))?;

        Ok(PostReceipt)
    }
}
