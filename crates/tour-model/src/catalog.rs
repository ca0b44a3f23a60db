//! Catalog document envelope.

use serde_json::Value;

/// Extract the raw tour records from a catalog document.
///
/// The document's top-level `tours` field holds the records. A missing
/// or non-array `tours` degrades to an empty catalog; only an unparsable
/// body is a hard failure, and that is the loader's problem.
pub fn tour_records(doc: &Value) -> &[Value] {
    doc.get("tours")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
