//! Query-string merging for UTM annotation.
//!
//! Existing parameters are read with `application/x-www-form-urlencoded`
//! rules, collapsed into an insertion-ordered map, overlaid with the tracking
//! triple and encoded again.
//!
//! # Merge Rules
//!
//! 1. **Blank values**: `a=` and bare `a` are dropped
//! 2. **Repeated keys**: last value wins, the key keeps its first position
//! 3. **UTM keys**: overwrite a like-named parameter in place, otherwise appended
//! 4. **Encoding**: output is form-urlencoded (space becomes `+`)

use url::form_urlencoded;

use crate::domain::TrackingParams;

/// Parses a raw query (without the leading `?`) into ordered, de-duplicated pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        upsert(&mut pairs, key.into_owned(), value.into_owned());
    }

    pairs
}

/// Encodes pairs as a query string (without the leading `?`).
pub fn encode_query(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Merges the tracking triple into an existing query and returns the encoded result.
///
/// `None` means the URL had no query at all.
pub fn merge_tracking_query(query: Option<&str>, params: &TrackingParams) -> String {
    let mut pairs = query.map(parse_query).unwrap_or_default();

    for (key, value) in params.pairs() {
        upsert(&mut pairs, key.to_string(), value.to_string());
    }

    encode_query(&pairs)
}

fn upsert(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, slot)) => *slot = value,
        None => pairs.push((key, value)),
    }
}
