//! `application/x-www-form-urlencoded` body encoding

use std::collections::BTreeMap;

/// Encode fields as `key=value` pairs joined by `&`, in key order
pub fn encode_form(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
