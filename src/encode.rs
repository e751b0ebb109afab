//! Query-component encoding for GET transport.
//!
//! GET payloads are percent-encoded per field so that literal `&`, `%`, `<`
//! etc. inside a payload survive transport as data instead of being
//! reinterpreted by the server's query parser. POST bodies deliberately skip
//! this and carry the raw payload (see `probe`).

/// Split a payload at the first `=` into (key, value).
///
/// A payload without `=` is treated as a bare value with an empty key.
pub fn split_payload(payload: &str) -> (&str, &str) {
    match payload.split_once('=') {
        Some((key, value)) => (key, value),
        None => ("", payload),
    }
}

/// Percent-encode a payload for use as a GET query string.
///
/// Key and value are encoded independently; a payload with no `=` is emitted
/// as the encoded value alone.
pub fn encode_query(payload: &str) -> String {
    let (key, value) = split_payload(payload);
    if key.is_empty() && !payload.starts_with('=') {
        return urlencoding::encode(value).into_owned();
    }
    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
}
