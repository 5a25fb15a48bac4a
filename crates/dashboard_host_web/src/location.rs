//! Page location access.

use crate::bridge;

/// Returns `window.location.search` (including the leading `?`), or `None` outside a browser.
pub fn current_query_string() -> Option<String> {
    bridge::location_search()
}
