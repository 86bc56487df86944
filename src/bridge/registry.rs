//! Callback registration table.
//!
//! Replaces the original "attach a function to the global namespace"
//! trick with an owned map from token to completion handle. Lifecycle
//! is explicit: register, then either complete (invocation) or
//! deregister (load-failure cleanup).

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};

/// Table of pending callback registrations, keyed by token.
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    pending: Arc<Mutex<HashMap<String, oneshot::Sender<Value>>>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token and hand back the receiving end of its
    /// completion handle. Tokens are registered at most once and never
    /// reused across requests.
    pub async fn register(&self, token: &str) -> oneshot::Receiver<Value> {
        let (tx, rx) = oneshot::channel();
        let mut pending = self.pending.lock().await;
        debug_assert!(!pending.contains_key(token), "token registered twice");
        pending.insert(token.to_string(), tx);
        rx
    }

    /// Invoke the named callback with `value`, removing its
    /// registration. Returns false when no such registration exists.
    pub async fn complete(&self, name: &str, value: Value) -> bool {
        let handle = self.pending.lock().await.remove(name);
        match handle {
            Some(tx) => {
                // A receiver dropped mid-flight just discards the value.
                let _ = tx.send(value);
                true
            }
            None => false,
        }
    }

    /// Drop a registration without invoking it.
    pub async fn deregister(&self, token: &str) {
        self.pending.lock().await.remove(token);
    }

    /// Number of registrations currently pending.
    pub async fn pending(&self) -> usize {
        self.pending.lock().await.len()
    }
}
