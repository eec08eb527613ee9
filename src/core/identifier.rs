//! Identifier normalization

use crate::config::{COMPONENT_PREFIX, SCOPE_MARKER};

/// Strip `component:` from each entry and drop scoped (`@`) entries.
///
/// Only the first occurrence of `component:` is removed, wherever it sits in
/// the string. Scoped entries are dropped before and after stripping, so an
/// entry such as `component:@ui/button` is excluded too. Order and
/// duplicates are preserved.
pub fn normalize(raw: &[String]) -> Vec<String> {
    raw.iter()
        .filter(|entry| !entry.starts_with(SCOPE_MARKER))
        .map(|entry| entry.replacen(COMPONENT_PREFIX, "", 1))
        .filter(|name| !name.starts_with(SCOPE_MARKER))
        .collect()
}
