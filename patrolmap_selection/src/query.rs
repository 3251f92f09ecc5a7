// Copyright 2025 the Patrol Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use url::form_urlencoded;

/// Query parameter carrying the selected robot id.
pub const QUERY_KEY: &str = "robotId";

fn strip(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

/// First value of `key` in `query`, percent-decoded.
#[must_use]
pub fn query_value(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(strip(query).as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Rewrites `query` so that `key` has `value`, or is absent for `None`.
///
/// Every other pair keeps its position. Repeated occurrences of `key`
/// collapse into the first one.
pub(crate) fn with_value(query: &str, key: &str, value: Option<&str>) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    let mut written = false;
    for (k, v) in form_urlencoded::parse(strip(query).as_bytes()) {
        if k != key {
            out.append_pair(&k, &v);
            continue;
        }
        if let Some(value) = value.filter(|_| !written) {
            out.append_pair(key, value);
            written = true;
        }
    }
    if let Some(value) = value.filter(|_| !written) {
        out.append_pair(key, value);
    }
    out.finish()
}
