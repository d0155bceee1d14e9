//! Raw query string splitting.

use std::collections::HashMap;

/// Query parameter name mapped to every value supplied for it, in order.
pub type QueryValues = HashMap<String, Vec<String>>;

/// Split a raw `application/x-www-form-urlencoded` query into [`QueryValues`].
///
/// Percent escapes and `+` are decoded. A bare key (`?age`) gets an empty value.
pub fn parse_query(raw: &str) -> QueryValues {
    let mut values = QueryValues::new();
    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        values
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    values
}
