//! Display sink: the single text region where operation outcomes land.
//!
//! Strings render verbatim; anything structured is pretty-printed for
//! human inspection. A sink without a target silently drops writes.

use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A writable text region. Each write replaces the previous content.
pub trait DisplayTarget: Send + Sync {
    fn set_text(&self, text: &str);
}

/// Target that prints each update to stdout.
pub struct ConsoleTarget;

impl DisplayTarget for ConsoleTarget {
    fn set_text(&self, text: &str) {
        println!("{text}");
    }
}

/// In-memory target holding the last written text, for tests and any
/// caller that wants to inspect the final content.
#[derive(Default)]
pub struct BufferTarget {
    content: Mutex<String>,
}

impl BufferTarget {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// The current text content.
    pub fn text_content(&self) -> String {
        self.content.lock().unwrap().clone()
    }
}

impl DisplayTarget for BufferTarget {
    fn set_text(&self, text: &str) {
        *self.content.lock().unwrap() = text.to_string();
    }
}

/// Renders operation outcomes into one display target.
///
/// A missing target is not an error: every write becomes a no-op.
#[derive(Clone)]
pub struct OutputSink {
    target: Option<Arc<dyn DisplayTarget>>,
}

impl OutputSink {
    pub fn new(target: Arc<dyn DisplayTarget>) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// A sink with no display target attached.
    pub fn detached() -> Self {
        Self { target: None }
    }

    /// Show a value: strings as-is, anything else pretty-printed with
    /// two-space indentation.
    pub fn show(&self, data: &Value) {
        let text = match data {
            Value::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        };
        self.show_text(&text);
    }

    /// Show a plain string.
    pub fn show_text(&self, text: &str) {
        if let Some(target) = &self.target {
            target.set_text(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_show_text_replaces_content() {
        let target = BufferTarget::new();
        let sink = OutputSink::new(target.clone());

        sink.show_text("Loading...");
        assert_eq!(target.text_content(), "Loading...");

        sink.show_text("done");
        assert_eq!(target.text_content(), "done");
    }

    #[test]
    fn test_show_pretty_prints_structured_values() {
        let target = BufferTarget::new();
        let sink = OutputSink::new(target.clone());

        sink.show(&json!({"ok": true}));
        assert_eq!(target.text_content(), "{\n  \"ok\": true\n}");
    }

    #[test]
    fn test_show_string_value_verbatim() {
        let target = BufferTarget::new();
        let sink = OutputSink::new(target.clone());

        sink.show(&json!("plain message"));
        assert_eq!(target.text_content(), "plain message");
    }

    #[test]
    fn test_detached_sink_does_not_panic() {
        let sink = OutputSink::detached();
        sink.show_text("Loading...");
        sink.show(&json!({"ok": true}));
    }
}
