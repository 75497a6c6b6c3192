//! Wire framing: one message per line of text, `KIND|PAYLOAD`.
//!
//! `KIND` is an ASCII command or event name; `PAYLOAD` is a JSON value. The
//! payload carries strings, integers and nested objects/arrays losslessly,
//! so `decode(encode(kind, payload))` always returns the original pair.

use serde_json::Value;

use crate::error::BridgeError;

/// Separator between the message kind and its payload.
const SEPARATOR: char = '|';

/// Frame a kind and payload into a single wire line.
pub fn encode(kind: &str, payload: &Value) -> String {
    format!("{kind}{SEPARATOR}{payload}")
}

/// Split and parse a wire line back into `(kind, payload)`.
///
/// An empty payload section decodes as `{}` so a bare `REQUEST_EVENTS|`
/// survives. A missing separator, empty kind, or unparseable payload is a
/// `MalformedMessage`; callers log it and drop the line, they never abort.
pub fn decode(line: &str) -> Result<(String, Value), BridgeError> {
    let Some((kind, payload)) = line.split_once(SEPARATOR) else {
        return Err(BridgeError::MalformedMessage(format!(
            "missing '{SEPARATOR}' separator in {line:?}"
        )));
    };

    if kind.is_empty() {
        return Err(BridgeError::MalformedMessage(format!(
            "empty message kind in {line:?}"
        )));
    }

    if payload.is_empty() {
        return Ok((kind.to_string(), Value::Object(serde_json::Map::new())));
    }

    let value = serde_json::from_str(payload).map_err(|err| {
        BridgeError::MalformedMessage(format!("bad payload for {kind}: {err}"))
    })?;
    Ok((kind.to_string(), value))
}
