//! Parsing of JSONP script bodies.
//!
//! The endpoint answers a callback-bridge GET with a script body of the
//! form `cb_x({"ok":true});`: one invocation of the requested callback
//! with the payload as its single argument.

use crate::error::BridgeError;
use serde_json::Value;

/// A parsed callback invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Name of the invoked callback function.
    pub callback: String,
    /// The delivered payload. An empty argument list is null.
    pub payload: Value,
}

/// Parse a script body into the single callback invocation it performs.
pub fn parse_invocation(body: &str) -> Result<Invocation, BridgeError> {
    let trimmed = body.trim();

    let open = trimmed
        .find('(')
        .ok_or_else(|| BridgeError::MalformedScript("no callback invocation".into()))?;
    let close = trimmed
        .rfind(')')
        .filter(|&c| c > open)
        .ok_or_else(|| BridgeError::MalformedScript("unterminated invocation".into()))?;

    let callback = trimmed[..open].trim();
    if callback.is_empty() || !callback.chars().all(is_ident_char) {
        return Err(BridgeError::MalformedScript(format!(
            "invalid callback name: {callback:?}"
        )));
    }

    let args = trimmed[open + 1..close].trim();
    let payload = if args.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(args)
            .map_err(|e| BridgeError::MalformedScript(format!("bad payload: {e}")))?
    };

    // Anything after the closing paren must be at most a semicolon.
    let tail = trimmed[close + 1..].trim();
    if !tail.is_empty() && tail != ";" {
        return Err(BridgeError::MalformedScript(format!(
            "trailing content after invocation: {tail:?}"
        )));
    }

    Ok(Invocation {
        callback: callback.to_string(),
        payload,
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
