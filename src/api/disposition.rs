//! `Content-Disposition` helpers for multipart fields
//!
//! The multipart parser only understands the plain `filename="..."`
//! parameter. Clients that follow RFC 6266 send non-ASCII names as
//! `filename*=UTF-8''%EC%82%B0.jpg` instead, which is decoded here.

use axum::http::{header, HeaderMap};
use percent_encoding::percent_decode_str;

/// Decoded `filename*` parameter of a field's `Content-Disposition`, if any.
pub fn ext_filename(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::CONTENT_DISPOSITION)?;
    let value = std::str::from_utf8(value.as_bytes()).ok()?;

    value
        .split(';')
        .filter_map(|param| param.trim().split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("filename*"))
        .and_then(|(_, ext_value)| decode_ext_value(ext_value.trim()))
}

/// Decode an RFC 8187 `ext-value`: `charset'[language]'pct-encoded`.
fn decode_ext_value(ext_value: &str) -> Option<String> {
    let mut parts = ext_value.splitn(3, '\'');
    let charset = parts.next()?;
    let _language = parts.next()?;
    let encoded = parts.next()?;

    let bytes = percent_decode_str(encoded);
    if charset.eq_ignore_ascii_case("utf-8") {
        bytes.decode_utf8().ok().map(|name| name.into_owned())
    } else if charset.eq_ignore_ascii_case("iso-8859-1") {
        Some(bytes.map(char::from).collect())
    } else {
        None
    }
}
