//! Serialized state injection.
//!
//! Produces a copy of a document whose body carries an inline script that
//! publishes server state to the client as `window.epii.state`.

use epii_types::markup::sanitize;
use epii_types::{Asset, Document, is_truthy};
use log::{debug, error};
use serde::Serialize;

/// Global object the state is published on.
pub const STATE_NAMESPACE: &str = "epii";

/// Literal embedded when there is no state or it cannot be serialized.
const UNDEFINED: &str = "undefined";

/// Serializes `state` into a JavaScript literal that is safe inside a
/// `<script>` element.
///
/// `None`, falsy values (`null`, `false`, `0`, `""`) and values serde_json
/// rejects all become `undefined`; a rejection is logged and never returned.
pub fn state_literal<S: Serialize + ?Sized>(state: Option<&S>) -> String {
    let Some(state) = state else {
        return UNDEFINED.to_string();
    };
    let json = serde_json::to_value(state).and_then(|value| {
        if is_truthy(&value) {
            serde_json::to_string(state).map(Some)
        } else {
            Ok(None)
        }
    });
    match json {
        Ok(Some(json)) => sanitize(&json),
        Ok(None) => UNDEFINED.to_string(),
        Err(e) => {
            error!("inject state is not serializable, embedding undefined instead: {}", e);
            UNDEFINED.to_string()
        }
    }
}

/// Builds the loaded, inline script asset carrying `state`.
pub fn inject_script<S: Serialize + ?Sized>(state: Option<&S>) -> Asset {
    let ns = STATE_NAMESPACE;
    let literal = state_literal(state);
    Asset::inline_script(format!(
        "if(!window.{ns})window.{ns}={{}};window.{ns}.state={literal};"
    ))
}

/// Returns a deep copy of `document` with `state` attached as `body.inject`.
///
/// The copy keeps `name` and `html`. Head and body are carried over, with
/// the script attached, only when the document has both; a lone head or body
/// is left out of the copy. `document` itself is never modified.
pub fn get_inject_copy<S: Serialize + ?Sized>(document: &Document, state: Option<&S>) -> Document {
    let mut copy = document.clone();
    if !copy.has_sections() {
        debug!(
            "document '{}' has no head/body pair, state injection dropped",
            document.name
        );
        copy.head = None;
        copy.body = None;
        return copy;
    }
    if let Some(body) = copy.body.as_mut() {
        body.inject = Some(inject_script(state));
    }
    copy
}
