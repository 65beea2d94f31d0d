// src/classify/names.rs
//! Bridge name matching against the catalog.
//!
//! Each catalog phrase is tested independently with case-sensitive substring
//! containment on the raw text. No normalization of the input happens here.

use crate::catalog::Catalog;

/// Canonical names of every catalog entry whose phrase occurs in `text`,
/// in catalog order, without duplicates. Empty means "not a tracked bridge".
pub fn match_bridges(text: &str, catalog: &Catalog) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in catalog.entries() {
        if !text.contains(entry.phrase.as_str()) {
            continue;
        }
        let name = entry.canonical_name();
        if !out.iter().any(|n| n == name) {
            out.push(name.to_string());
        }
    }
    out
}
