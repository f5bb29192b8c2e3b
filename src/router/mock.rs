//! Stub synthesis for the Mock transport.
//!
//! Capability names are matched against an ordered table of name fragments;
//! the first matching entry builds the stub. Names matching nothing yield a
//! generic success envelope. This keeps mock output shape-plausible without
//! per-capability mock definitions.

use serde_json::{json, Value};
use tracing::debug;

type StubBuilder = fn() -> Value;

fn list_stub() -> Value {
    json!({ "success": true, "items": [], "total": 0 })
}

fn write_stub() -> Value {
    json!({ "success": true, "count": 0 })
}

/// Fragment table, evaluated top to bottom; first match wins. Order is part
/// of the contract: a capability containing several fragments gets the
/// earliest entry's stub.
const STUB_TABLE: &[(&str, StubBuilder)] = &[
    ("fetch", list_stub),
    ("list", list_stub),
    ("search", list_stub),
    ("write", write_stub),
    ("create", write_stub),
    ("update", write_stub),
    ("delete", write_stub),
];

/// Synthesize a mock response for `capability`.
pub fn respond(capability: &str) -> Value {
    for (fragment, build) in STUB_TABLE {
        if capability.contains(fragment) {
            debug!(
                "Mock stub for '{}' matched fragment '{}'",
                capability, fragment
            );
            return build();
        }
    }

    debug!("Mock stub for '{}': no fragment matched, generic stub", capability);
    json!({ "success": true, "data": null })
}
