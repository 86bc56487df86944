//! User-triggered flows: the GET and POST demo actions.
//!
//! Both triggers render every outcome, success or failure, through the
//! display sink and never propagate an error to the caller.

use crate::bridge::BridgeClient;
use crate::poster::Poster;
use crate::sink::OutputSink;
use tracing::{error, info};

/// Query string for the callback-bridge read; `cb` is the placeholder
/// swapped for the per-request token.
const GET_QUERY: &str = "?callback=cb&source=github";

/// Confirmation line rendered after a successful opaque POST.
const POST_SENT: &str = "POST request sent successfully";

/// Bundles the two request paths with the display sink they render to.
pub struct Actions {
    bridge: BridgeClient,
    poster: Poster,
    sink: OutputSink,
    endpoint: String,
}

impl Actions {
    pub fn new(
        bridge: BridgeClient,
        poster: Poster,
        sink: OutputSink,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            bridge,
            poster,
            sink,
            endpoint: endpoint.into(),
        }
    }

    /// Run the callback-bridge GET and render its outcome.
    pub async fn trigger_get(&self) {
        self.sink.show_text("Loading...");
        let url = format!("{}{}", self.endpoint, GET_QUERY);
        match self.bridge.fetch(&url).await {
            Ok(data) => self.sink.show(&data),
            Err(e) => {
                self.sink.show_text(&format!("Error: {e}"));
                error!("GET error: {e}");
            }
        }
    }

    /// Send the opaque POST beacon and render its outcome.
    pub async fn trigger_post(&self) {
        self.sink.show_text("Loading...");
        match self.poster.send().await {
            Ok(_receipt) => self.sink.show_text(POST_SENT),
            Err(e) => {
                self.sink.show_text(&format!("Error: {e}"));
                error!("POST error: {e}");
            }
        }
    }
}

/// Startup hook, run once the runtime is ready. Establishes no state.
pub fn init() {
    info!("callbridge loaded");
}
