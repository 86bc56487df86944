// Copyright 2026 Callbridge Contributors
// SPDX-License-Identifier: Apache-2.0

//! Callback-bridge requester.
//!
//! The endpoint does not allow its responses to be read by an ordinary
//! cross-origin fetch, so reads go through the JSONP technique: request
//! a script that invokes a uniquely named callback with the payload.
//! Each request registers its own random token, so concurrent requests
//! never collide.

pub mod registry;
pub mod script;

use crate::error::BridgeError;
use crate::loader::ScriptLoader;
use rand::distributions::Alphanumeric;
use rand::Rng;
use registry::CallbackRegistry;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Literal placeholder the caller embeds in the request URL; replaced
/// with the generated token before the load.
pub const CALLBACK_PLACEHOLDER: &str = "callback=cb";

/// Width of the random token suffix.
const TOKEN_SUFFIX_LEN: usize = 12;

/// Issues callback-bridge reads through a [`ScriptLoader`].
#[derive(Clone)]
pub struct BridgeClient {
    loader: Arc<dyn ScriptLoader>,
    registry: CallbackRegistry,
}

impl BridgeClient {
    pub fn new(loader: Arc<dyn ScriptLoader>) -> Self {
        Self {
            loader,
            registry: CallbackRegistry::new(),
        }
    }

    /// The registration table. Exposed so callers and tests can check
    /// that no registration outlives its request.
    pub fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }

    /// Perform a callback-bridge read.
    ///
    /// `url` must contain the literal `callback=cb` placeholder.
    /// Resolves with whatever value the loaded script passes to the
    /// generated callback. Fails when the resource cannot be loaded or
    /// the delivered body does not invoke a registered callback. No
    /// timer is applied beyond the loader's own transport timeout.
    pub async fn fetch(&self, url: &str) -> Result<Value, BridgeError> {
        let token = generate_token();
        let rx = self.registry.register(&token).await;

        let final_url = url.replace(CALLBACK_PLACEHOLDER, &format!("callback={token}"));
        debug!(%token, "loading script resource");

        let body = match self.loader.load(&final_url).await {
            Ok(body) => body,
            Err(e) => {
                self.registry.deregister(&token).await;
                return Err(e);
            }
        };

        let invocation = match script::parse_invocation(&body) {
            Ok(inv) => inv,
            Err(e) => {
                self.registry.deregister(&token).await;
                return Err(e);
            }
        };

        if !self
            .registry
            .complete(&invocation.callback, invocation.payload)
            .await
        {
            self.registry.deregister(&token).await;
            return Err(BridgeError::MalformedScript(format!(
                "script invoked unknown callback {:?}",
                invocation.callback
            )));
        }

        rx.await.map_err(|_| BridgeError::CallbackDropped)
    }
}

/// Generate a callback token with a random alphanumeric suffix wide
/// enough that concurrent requests will not collide.
fn generate_token() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("cb_{suffix}")
}
